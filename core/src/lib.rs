#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

pub use clue::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod clue;
mod engine;
mod error;
mod generator;
mod types;

/// Number of categories on a standard board.
pub const CATEGORY_COUNT: Coord = 6;

/// Number of clues in each category of a standard board.
pub const QUESTION_COUNT: Coord = 5;

/// How many candidate categories are requested when picking a board.
pub const CATEGORY_POOL_SIZE: u32 = 100;

/// Inclusive bounds of the random listing offset used when picking a board.
pub const OFFSET_RANGE: (u32, u32) = (1, 499);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub category_pool_size: u32,
    pub min_offset: u32,
    pub max_offset: u32,
}

impl GameConfig {
    pub const fn new_unchecked(categories: Coord, clues_per_category: Coord) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool_size: CATEGORY_POOL_SIZE,
            min_offset: OFFSET_RANGE.0,
            max_offset: OFFSET_RANGE.1,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord) -> Self {
        let categories = categories.clamp(1, Coord::MAX);
        let clues_per_category = clues_per_category.clamp(1, Coord::MAX);
        let mut config = Self::new_unchecked(categories, clues_per_category);
        config.category_pool_size = config.category_pool_size.max(categories.into());
        config
    }

    pub const fn size(&self) -> Coord2 {
        (self.categories, self.clues_per_category)
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories == 0
            || self.clues_per_category == 0
            || self.category_pool_size < u32::from(self.categories)
            || self.min_offset > self.max_offset
        {
            return Err(GameError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(CATEGORY_COUNT, QUESTION_COUNT)
    }
}

/// One column of the board: a titled, fixed-order list of clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// A complete game grid.
///
/// Always holds exactly `size.0` categories with `size.1` clues each, and no category id twice.
/// Deserialized boards go through [`Board::new`] as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: Coord2,
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct BoardRepr {
    size: Coord2,
    categories: Vec<Category>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let (categories, clues) = repr.size;
        Board::new(&GameConfig::new_unchecked(categories, clues), repr.categories)
    }
}

impl Board {
    pub fn new(config: &GameConfig, categories: Vec<Category>) -> Result<Self> {
        let (category_count, clue_count) = config.size();

        if categories.len() != usize::from(category_count)
            || categories
                .iter()
                .any(|category| category.clues.len() != usize::from(clue_count))
        {
            return Err(GameError::InvalidBoardShape);
        }

        let mut seen = HashSet::with_capacity(categories.len());
        if !categories.iter().all(|category| seen.insert(category.id)) {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self {
            size: config.size(),
            categories,
        })
    }

    /// `(categories, clues per category)`
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn validate_coords(&self, cell: CellId) -> Result<CellId> {
        let (categories, clues) = self.size;
        if cell.category < categories && cell.clue < clues {
            Ok(cell)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Maps a cell token such as `"2-4"` to a cell of this board.
    pub fn resolve(&self, token: &str) -> Result<CellId> {
        self.validate_coords(token.parse()?)
    }

    pub fn clue_at(&self, cell: CellId) -> Result<&Clue> {
        let cell = self.validate_coords(cell)?;
        Ok(&self[cell])
    }

    pub fn state_at(&self, cell: CellId) -> Result<RevealState> {
        self.clue_at(cell).map(Clue::reveal_state)
    }

    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome<'_>> {
        let cell = self.validate_coords(cell)?;
        Ok(self[cell].reveal())
    }

    /// Every cell of the board, row by row.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + use<> {
        let (categories, clues) = self.size;
        (0..clues).flat_map(move |clue| {
            (0..categories).map(move |category| CellId::new(category, clue))
        })
    }

    /// Whether every clue is showing its answer.
    pub fn is_finished(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .all(|clue| clue.reveal_state().is_final())
    }
}

impl Index<CellId> for Board {
    type Output = Clue;

    fn index(&self, cell: CellId) -> &Self::Output {
        let (category, clue) = cell.coords().to_index();
        &self.categories[category].clues[clue]
    }
}

impl IndexMut<CellId> for Board {
    fn index_mut(&mut self, cell: CellId) -> &mut Self::Output {
        let (category, clue) = cell.coords().to_index();
        &mut self.categories[category].clues[clue]
    }
}
