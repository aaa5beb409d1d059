use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough candidates, requested {requested} but only {available} available")]
    InsufficientCandidates { requested: usize, available: usize },
    #[error("Clue source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid game configuration")]
    InvalidConfig,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
