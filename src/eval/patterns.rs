//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for runs of stones, keyed by
//! run length and how many of its ends are open.

use crate::rules::Run;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - already won
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 60_000;
    /// Semi-open four: XOOOO_ or _OOOOX
    pub const SEMI_OPEN_FOUR: i32 = 15_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 7_000;
    /// Semi-open three: XOOO_ or _OOOX
    pub const SEMI_OPEN_THREE: i32 = 2_000;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 800;
    /// Semi-open two: XOO_ or _OOX
    pub const SEMI_OPEN_TWO: i32 = 250;
}

/// Score a single run. Dead runs (both ends closed) and lone stones are worth nothing.
pub fn run_score(run: Run) -> i32 {
    if run.length >= 5 {
        return PatternScore::FIVE;
    }
    match (run.length, run.open_ends) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::SEMI_OPEN_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::SEMI_OPEN_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::SEMI_OPEN_TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(length: usize, open_ends: u8) -> Run {
        Run { length, open_ends }
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::SEMI_OPEN_FOUR);
        assert!(PatternScore::SEMI_OPEN_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::SEMI_OPEN_THREE);
        assert!(PatternScore::SEMI_OPEN_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::SEMI_OPEN_TWO);
    }

    #[test]
    fn test_five_ignores_openness() {
        assert_eq!(run_score(run(5, 0)), PatternScore::FIVE);
        assert_eq!(run_score(run(7, 2)), PatternScore::FIVE);
    }

    #[test]
    fn test_dead_runs_score_zero() {
        for length in 1..5 {
            assert_eq!(run_score(run(length, 0)), 0);
        }
    }

    #[test]
    fn test_single_stone_scores_zero() {
        assert_eq!(run_score(run(1, 2)), 0);
    }

    #[test]
    fn test_table_values() {
        assert_eq!(run_score(run(4, 2)), 60_000);
        assert_eq!(run_score(run(4, 1)), 15_000);
        assert_eq!(run_score(run(3, 2)), 7_000);
        assert_eq!(run_score(run(3, 1)), 2_000);
        assert_eq!(run_score(run(2, 2)), 800);
        assert_eq!(run_score(run(2, 1)), 250);
    }
}
