//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the search used by the hardest difficulty.
//! Candidate ordering at every node is scored from the searching side's
//! point of view, including at the opponent's nodes; lines that look good
//! for us are tried first and cut the rest early.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new(2, 6);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = searcher.search(&mut board, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use serde::Serialize;

use crate::board::{Board, Pos, Stone, TrialMove};
use crate::eval::{evaluate_board, PatternScore};
use crate::rules::completes_five;

use super::candidates::ranked;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited below the root
    pub nodes_evaluated: u64,
    /// Deepest ply reached (root children are ply 1)
    pub max_depth_reached: u8,
    /// Alpha-beta cutoffs taken
    pub pruned_branches: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Root candidates searched
    pub candidates: usize,
    pub stats: SearchStats,
}

/// Alpha-beta searcher with a fixed depth and per-node candidate limit.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    candidate_limit: usize,
    /// Side the search maximizes for; set per search
    color: Stone,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(depth: u8, candidate_limit: usize) -> Self {
        Self {
            depth,
            candidate_limit,
            color: Stone::Empty,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search for the best move for `color`.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn search(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        self.color = color;
        self.stats = SearchStats::default();

        let candidates = ranked(board, color, color, self.candidate_limit);
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for candidate in &candidates {
            let score = if completes_five(board, candidate.pos, color) {
                PatternScore::FIVE
            } else {
                let mut trial = TrialMove::place(board, candidate.pos, color);
                self.alpha_beta(
                    &mut trial,
                    self.depth.saturating_sub(1),
                    alpha,
                    beta,
                    false,
                    1,
                )
            };

            if score > best_score {
                best_score = score;
                best_move = Some(candidate.pos);
            }
            alpha = alpha.max(score);
        }

        log::trace!(
            "alpha-beta depth {} searched {} nodes, {} cutoffs",
            self.depth,
            self.stats.nodes_evaluated,
            self.stats.pruned_branches
        );

        SearchResult {
            best_move,
            score: best_score,
            candidates: candidates.len(),
            stats: self.stats,
        }
    }

    /// Minimax value of `board` for the searching side.
    ///
    /// `maximizing` is true when the searching side is to move.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ply: u8,
    ) -> i32 {
        self.stats.nodes_evaluated += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(ply);

        if depth == 0 {
            return evaluate_board(board, self.color);
        }

        let mover = if maximizing {
            self.color
        } else {
            self.color.opponent()
        };
        let candidates = ranked(board, mover, self.color, self.candidate_limit);
        if candidates.is_empty() {
            return evaluate_board(board, self.color);
        }

        let mut value = if maximizing { -INF } else { INF };

        for candidate in &candidates {
            let score = if completes_five(board, candidate.pos, mover) {
                if maximizing {
                    PatternScore::FIVE
                } else {
                    -PatternScore::FIVE
                }
            } else {
                let mut trial = TrialMove::place(board, candidate.pos, mover);
                self.alpha_beta(&mut trial, depth - 1, alpha, beta, !maximizing, ply + 1)
            };

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.pruned_branches += 1;
                    break;
                }
            } else {
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.pruned_branches += 1;
                    break;
                }
            }
        }

        if value == INF || value == -INF {
            return evaluate_board(board, self.color);
        }
        value
    }
}
