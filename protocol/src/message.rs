use clueboard_core::{Board, CellUpdate};
use serde::{Deserialize, Serialize};

use crate::*;

/// Reveal result as sent to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMessage {
    /// Cell token, e.g. `"2-4"`
    pub cell: String,
    /// New cell text; `None` leaves the cell untouched
    pub display: Option<String>,
}

impl From<CellUpdate<'_>> for RevealMessage {
    fn from(update: CellUpdate<'_>) -> Self {
        Self {
            cell: update.cell.to_string(),
            display: update.display.map(str::to_owned),
        }
    }
}

impl RevealMessage {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serializes a published board for the renderer.
pub fn encode_board(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

pub fn decode_board(body: &str) -> Result<Board> {
    Ok(serde_json::from_str(body)?)
}
