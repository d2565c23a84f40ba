//! Scoped stone placement for simulation
//!
//! Search code never calls `place_stone`/`remove_stone` in pairs by hand.
//! It places through a [`TrialMove`], and the stone is taken back when the
//! guard drops, on every exit path including unwinding.

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// A stone placed for the lifetime of the guard.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Stone,
}

impl<'a> TrialMove<'a> {
    /// Place `stone` at `pos`; the previous content is restored on drop.
    pub fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        let previous = board.get(pos);
        board.place_stone(pos, stone);
        Self {
            board,
            pos,
            previous,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.place_stone(self.pos, self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_restores_on_drop() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let trial = TrialMove::place(&mut board, Pos::new(7, 7), Stone::Black);
            assert_eq!(trial.get(Pos::new(7, 7)), Stone::Black);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_trials_unwind_in_order() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        let before = board.clone();
        {
            let mut outer = TrialMove::place(&mut board, Pos::new(1, 1), Stone::Black);
            {
                let inner = TrialMove::place(&mut outer, Pos::new(2, 2), Stone::White);
                assert_eq!(inner.stone_count(), 3);
            }
            assert_eq!(outer.stone_count(), 2);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_restores_after_panic() {
        let mut board = Board::new();
        let before = board.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _trial = TrialMove::place(&mut board, Pos::new(3, 4), Stone::Black);
            panic!("simulated failure mid-search");
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }
}
