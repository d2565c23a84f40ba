//! Bounded one-ply lookahead
//!
//! For each of our best candidates, assume the opponent answers with the
//! reply that hurts us most among their best few, and keep the candidate
//! whose worst case is highest. A truncated one-ply minimax.

use crate::board::{Board, Pos, Stone, TrialMove};
use crate::eval::{evaluate_board, PatternScore};
use crate::rules::completes_five;

use super::candidates::ranked;

/// Result of a lookahead search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookaheadResult {
    pub best_move: Option<Pos>,
    pub score: i32,
    /// Candidates examined at the root
    pub candidates: usize,
}

/// One-ply lookahead over a bounded candidate and reply set
#[derive(Debug, Clone, Copy)]
pub struct LookaheadSearcher {
    candidate_limit: usize,
    reply_limit: usize,
}

impl LookaheadSearcher {
    pub fn new(candidate_limit: usize, reply_limit: usize) -> Self {
        Self {
            candidate_limit,
            reply_limit,
        }
    }

    /// Pick the candidate with the best worst-case evaluation for `color`.
    ///
    /// Ties keep the first candidate in ranking order. The board is
    /// restored before returning.
    pub fn search(&self, board: &mut Board, color: Stone) -> LookaheadResult {
        let opponent = color.opponent();
        let candidates = ranked(board, color, color, self.candidate_limit);

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for candidate in &candidates {
            let score = if completes_five(board, candidate.pos, color) {
                PatternScore::FIVE
            } else {
                let mut trial = TrialMove::place(board, candidate.pos, color);
                self.worst_reply(&mut trial, color, opponent)
            };

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(candidate.pos);
            }
        }

        LookaheadResult {
            best_move,
            score: best_score,
            candidates: candidates.len(),
        }
    }

    /// Lowest evaluation for `color` across the opponent's ranked replies,
    /// or the current evaluation when there are none.
    fn worst_reply(&self, board: &mut Board, color: Stone, opponent: Stone) -> i32 {
        let base = evaluate_board(board, color);
        let replies = ranked(board, opponent, opponent, self.reply_limit);
        if replies.is_empty() {
            return base;
        }

        let mut worst = i32::MAX;
        for reply in &replies {
            let trial = TrialMove::place(board, reply.pos, opponent);
            worst = worst.min(evaluate_board(&trial, color));
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookahead_restores_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 7), Stone::Black);
        let before = board.clone();

        let result = LookaheadSearcher::new(12, 6).search(&mut board, Stone::White);
        assert_eq!(board, before);
        assert!(result.best_move.is_some());
        assert_eq!(result.candidates, 12);
    }

    #[test]
    fn test_lookahead_blocks_open_three() {
        let mut board = Board::new();
        for c in 6..9 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(9, 9), Stone::White);

        let result = LookaheadSearcher::new(12, 6).search(&mut board, Stone::White);
        let chosen = result.best_move.unwrap();
        assert!(
            chosen == Pos::new(7, 5) || chosen == Pos::new(7, 9),
            "expected an end of the open three, got {:?}",
            chosen
        );
    }

    #[test]
    fn test_ties_keep_first_discovered_candidate() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let order: Vec<Pos> = ranked(&mut board, Stone::White, Stone::White, 12)
            .into_iter()
            .map(|candidate| {
                assert_eq!(candidate.score, 0);
                candidate.pos
            })
            .collect();
        let discovery = vec![
            Pos::new(6, 6),
            Pos::new(6, 7),
            Pos::new(6, 8),
            Pos::new(7, 6),
            Pos::new(7, 8),
            Pos::new(8, 6),
            Pos::new(8, 7),
            Pos::new(8, 8),
        ];
        assert_eq!(order, discovery);

        let result = LookaheadSearcher::new(12, 6).search(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(6, 6)));
        assert_eq!(result.score, -PatternScore::OPEN_TWO);
        assert_eq!(result.candidates, 8);
    }

    #[test]
    fn test_lookahead_on_empty_board_plays_center() {
        let mut board = Board::new();
        let result = LookaheadSearcher::new(12, 6).search(&mut board, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.candidates, 1);
    }
}
