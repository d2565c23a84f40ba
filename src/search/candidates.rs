//! Candidate move generation and ordering
//!
//! Only cells touching an existing stone are considered. Candidates are
//! ordered by the static evaluation of the board after the trial move.

use crate::board::{Board, Pos, Stone, TrialMove};
use crate::eval::evaluate_board;

/// A candidate move with its ordering score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    pub score: i32,
}

/// Empty cells in the 8-neighbourhood of any stone.
///
/// Discovery order: stones row-major, then each stone's neighbours from
/// top-left to bottom-right. An empty board yields the center cell.
pub fn neighborhood(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut moves = Vec::new();

    for stone in board.positions().filter(|&p| !board.is_empty(p)) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(pos) = board.step(stone, dr, dc) else {
                    continue;
                };
                let idx = pos.row * size + pos.col;
                if seen[idx] || !board.is_empty(pos) {
                    continue;
                }
                seen[idx] = true;
                moves.push(pos);
            }
        }
    }
    moves
}

/// Neighbourhood candidates for `mover`, scored from `perspective`, best first.
///
/// Each candidate is trial-placed and the board restored before the next.
/// The sort is stable, so equal scores keep discovery order.
pub fn ranked(board: &mut Board, mover: Stone, perspective: Stone, limit: usize) -> Vec<Candidate> {
    let moves = neighborhood(board);
    let mut scored = Vec::with_capacity(moves.len());
    for pos in moves {
        let trial = TrialMove::place(board, pos, mover);
        scored.push(Candidate {
            pos,
            score: evaluate_board(&trial, perspective),
        });
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
