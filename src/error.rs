//! Errors raised at the crate boundary (parsing, configuration, validation).
//!
//! Game-logic rejections never produce an error: an illegal action returns
//! an unchanged copy of its input snapshot.

use thiserror::Error;

use crate::board::{PieceId, Player};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("depth {0} is out of range (1-6)")]
    DepthOutOfRange(u8),
    #[error("piece id {id} appears more than once")]
    DuplicatePiece { id: PieceId },
    #[error("piece id {id} is in the {hand} hand but belongs to the other player")]
    HandOwnerMismatch { id: PieceId, hand: Player },
    #[error("a winner is recorded but the phase is not GAMEOVER")]
    WinnerWithoutGameOver,
}
