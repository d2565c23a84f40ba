//! Game rules for standard Gomoku
//!
//! This module holds the stateless board utilities shared by the rules
//! engine and the AI:
//! - Line walking and run measurement
//! - Win conditions (five or more in a row)
//! - Draw detection (full board)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{collect_line, completes_five, count_direction, measure_run, Axis, Run};
pub use win::{check_draw, determine_winning_sequence, find_any_win, WinningLine};
