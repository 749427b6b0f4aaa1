//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from board construction and the turn engine so the binary
//! can bubble them up with consistent context.
use thiserror::Error;

use monopoly_core::BoardError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("max_rounds must be at least 1")]
    InvalidRoundLimit,

    #[error("the game already ended after {rounds} rounds")]
    Finished { rounds: u32 },

    #[error("failed to serialize report")]
    Report(#[source] serde_json::Error),
}
