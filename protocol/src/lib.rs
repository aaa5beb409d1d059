//! Wire formats spoken around the clueboard core: the trivia service's JSON listings, the updates
//! sent to a renderer, and the TOML game configuration.

use clueboard_core::{CategoryId, GameError};
use thiserror::Error;

pub use config::*;
pub use message::*;
pub use service::*;
pub use wire::*;

mod config;
mod message;
mod service;
mod wire;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Category listing is empty")]
    EmptyListing,
    #[error("Category {0} has no clues")]
    EmptyCategory(CategoryId),
    #[error("Category {0} has no title")]
    MissingTitle(CategoryId),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Every protocol failure is opaque to the game, except errors the game itself raised.
impl From<ProtocolError> for GameError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Game(err) => err,
            other => GameError::SourceUnavailable(other.to_string()),
        }
    }
}
