//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores every run of stones by length and openness. The evaluation is
//! zero-sum: `evaluate_board(b, Black) == -evaluate_board(b, White)`.

use crate::board::{Board, Stone};
use crate::rules::{measure_run, Axis};

use super::patterns::run_score;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favour `perspective`. Returns 0 for `Stone::Empty`.
#[must_use]
pub fn evaluate_board(board: &Board, perspective: Stone) -> i32 {
    if perspective == Stone::Empty {
        return 0;
    }
    score_lines_for_player(board, perspective)
        - score_lines_for_player(board, perspective.opponent())
}

/// Sum of run scores for one color.
///
/// Each run is scored once, from its first stone along each axis.
#[must_use]
pub fn score_lines_for_player(board: &Board, player: Stone) -> i32 {
    let mut score = 0;
    for pos in board.positions() {
        if board.get(pos) != player {
            continue;
        }
        for axis in Axis::ALL {
            if let Some(run) = measure_run(board, pos, axis, player) {
                score += run_score(run);
            }
        }
    }
    score
}
