//! Immediate tactical checks shared by every difficulty

use crate::board::{Board, Pos, Stone};
use crate::rules::completes_five;

/// First empty cell, row-major, where `color` would complete five in a row.
///
/// Used for both the immediate win (own color) and the block (opponent color).
pub fn find_winning_cell(board: &Board, color: Stone) -> Option<Pos> {
    board
        .empty_positions()
        .find(|&pos| completes_five(board, pos, color))
}
