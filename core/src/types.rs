use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Single board axis index, used for category and clue positions and counts.
pub type Coord = u8;

/// Two-dimensional coordinates `(category, clue)`.
pub type Coord2 = (Coord, Coord);

/// Identifier a clue source uses for one category.
pub type CategoryId = u64;

pub trait ToIndex {
    type Output;
    fn to_index(self) -> Self::Output;
}

impl ToIndex for Coord2 {
    type Output = (usize, usize);

    fn to_index(self) -> Self::Output {
        (self.0.into(), self.1.into())
    }
}

/// Typed address of one board cell.
///
/// The token form is `"{category}-{clue}"`, e.g. `"2-4"` addresses the fifth clue of the third
/// category. Parsing only checks the shape; bounds are checked against a board by
/// [`Board::resolve`](crate::Board::resolve).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub category: Coord,
    pub clue: Coord,
}

impl CellId {
    pub const fn new(category: Coord, clue: Coord) -> Self {
        Self { category, clue }
    }

    pub const fn coords(self) -> Coord2 {
        (self.category, self.clue)
    }
}

impl From<Coord2> for CellId {
    fn from((category, clue): Coord2) -> Self {
        Self::new(category, clue)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

/// Parses one unsigned decimal index in the form `Display` writes it: no sign, no leading zeros.
fn parse_index(part: &str) -> Result<Coord, GameError> {
    if part.is_empty()
        || !part.bytes().all(|b| b.is_ascii_digit())
        || (part.len() > 1 && part.starts_with('0'))
    {
        return Err(GameError::InvalidCoords);
    }
    part.parse().map_err(|_| GameError::InvalidCoords)
}

impl FromStr for CellId {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (category, clue) = token.split_once('-').ok_or(GameError::InvalidCoords)?;
        Ok(Self::new(parse_index(category)?, parse_index(clue)?))
    }
}
