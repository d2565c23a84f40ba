//! Position evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, score_lines_for_player};
pub use patterns::{run_score, PatternScore};
