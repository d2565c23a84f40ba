//! Gomoku rules engine and AI opponent
//!
//! A headless Gomoku (five-in-a-row) implementation:
//! - Square board, 15x15 by default
//! - Five or more in a row wins (overlines count)
//! - Full board without a five is a draw
//! - AI opponent at three difficulty levels
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and the scoped trial-placement guard
//! - [`rules`]: Line walking, win and draw detection
//! - [`game`]: Authoritative game state with undo and JSON snapshots
//! - [`eval`]: Pattern-based position evaluation
//! - [`search`]: Candidate generation, tactics, lookahead and alpha-beta
//! - [`engine`]: AI move selection integrating all components
//! - [`telemetry`]: Per-move records for tuning and benchmarking
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, AiOptions, Difficulty, EngineOptions, GomokuEngine, Stone};
//!
//! let mut game = GomokuEngine::new(EngineOptions::default()).unwrap();
//! let mut ai = AIEngine::new(Difficulty::Medium, Stone::White, AiOptions::default()).unwrap();
//!
//! // Human plays Black in the center
//! game.apply_move(7, 7);
//!
//! // AI responds as White
//! if let Some(pos) = ai.select_move(game.board()).unwrap() {
//!     game.apply_move(pos.row as i32, pos.col as i32);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Move Selection
//!
//! Every difficulty follows this priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Tier strategy: ranked candidates (easy), one-ply lookahead (medium),
//!    or depth-3 alpha-beta (hard)

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{AIEngine, AiOptions, Behavior, Decision, Difficulty, MoveResult};
pub use error::{AiError, BoardError, StateError, TelemetryError};
pub use game::{EngineOptions, GameSnapshot, GomokuEngine, InvalidMove, MoveOutcome};
pub use telemetry::{JsonLinesSink, TelemetryRecord, TelemetrySink};
