//! Error types for board construction, state loading, AI configuration and telemetry.
//!
//! Rejected moves are not errors: they come back as
//! [`MoveOutcome::Invalid`](crate::game::MoveOutcome::Invalid).

use std::io;

use crate::board::{Stone, MAX_BOARD_SIZE};

/// Board construction failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} is outside 1..={max}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
    #[error("board row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Snapshot validation failures raised by `load_state`.
///
/// The engine is left untouched whenever one of these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("malformed board: {0}")]
    Board(#[from] BoardError),
    #[error("board is {actual}x{actual}, engine is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("{field} must be black or white")]
    InvalidPlayer { field: &'static str },
    #[error("history entry {index} at ({row}, {col}) is out of bounds")]
    HistoryOutOfBounds { index: usize, row: usize, col: usize },
    #[error(
        "history entry {index} records {recorded:?} at ({row}, {col}) but the board holds {found:?}"
    )]
    Inconsistent {
        index: usize,
        row: usize,
        col: usize,
        recorded: Stone,
        found: Stone,
    },
    #[error("snapshot json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for StateError {
    fn from(err: serde_json::Error) -> Self {
        StateError::Json(err.to_string())
    }
}

/// Malformed input at the AI boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("the AI must play black or white")]
    InvalidColor,
    #[error("board is {actual}x{actual}, AI expects {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },
}

/// Failures reported by a telemetry sink. Never propagated out of move selection.
#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Sink(String),
}
