use serde::{Deserialize, Serialize};

use crate::*;

/// What the renderer should do with one cell after a reveal event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate<'a> {
    pub cell: CellId,
    /// `None` means the event was ignored and the cell keeps its current text.
    pub display: Option<&'a str>,
}

impl CellUpdate<'_> {
    pub const fn has_update(&self) -> bool {
        self.display.is_some()
    }
}

/// Owns the board of the game currently being played.
///
/// The board is only ever replaced as a whole, after a new one has been fully assembled, so a
/// failed build leaves the previous game playable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr")]
pub struct GameSession {
    config: GameConfig,
    board: Option<Board>,
}

#[derive(Deserialize)]
struct SessionRepr {
    config: GameConfig,
    board: Option<Board>,
}

impl TryFrom<SessionRepr> for GameSession {
    type Error = GameError;

    fn try_from(repr: SessionRepr) -> Result<Self> {
        repr.config.validate()?;
        let mut session = Self::new(repr.config);
        if let Some(board) = repr.board {
            session.publish(board)?;
        }
        Ok(session)
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.board.is_some()
    }

    /// Whether a board is published and all of its answers are showing
    pub fn is_finished(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_finished)
    }

    /// Builds a fresh board from `source` and publishes it.
    ///
    /// On error the current board, if any, stays exactly as it was.
    pub async fn new_game<S: ClueSource + ?Sized>(
        &mut self,
        source: &S,
        seed: u64,
    ) -> Result<&Board> {
        log::debug!("Starting new game, seed: {}", seed);
        match BoardBuilder::new(source, self.config, seed).build().await {
            Ok(board) => self.publish(board),
            Err(err) => {
                log::warn!("Board build failed, keeping previous board: {}", err);
                Err(err)
            }
        }
    }

    /// Replaces the current board with an already assembled one of the configured size.
    pub fn publish(&mut self, board: Board) -> Result<&Board> {
        if board.size() != self.config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        log::debug!("Publishing board of size {:?}", board.size());
        Ok(self.board.insert(board))
    }

    /// Advances the clue addressed by a cell token such as `"2-4"`.
    pub fn reveal(&mut self, token: &str) -> Result<CellUpdate<'_>> {
        let board = self.board.as_ref().ok_or(GameError::InvalidCoords)?;
        let cell = board.resolve(token)?;
        self.reveal_at(cell)
    }

    pub fn reveal_at(&mut self, cell: CellId) -> Result<CellUpdate<'_>> {
        let board = self.board.as_mut().ok_or(GameError::InvalidCoords)?;
        let outcome = board.reveal(cell)?;
        log::trace!("Reveal at {}: {:?}", cell, outcome);
        Ok(CellUpdate {
            cell,
            display: outcome.display_text(),
        })
    }

    pub fn state_at(&self, cell: CellId) -> Result<RevealState> {
        self.board
            .as_ref()
            .ok_or(GameError::InvalidCoords)?
            .state_at(cell)
    }
}
