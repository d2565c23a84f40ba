//! Line walking shared by win detection and the evaluator
//!
//! Every "how many stones in a row" question in the crate goes through
//! this module, so the rules and the AI can never disagree on a count.

use serde::Serialize;

use crate::board::{Board, Pos, Stone};

/// The four line axes, in the order win detection checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    Vertical,
    MainDiagonal,
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::MainDiagonal,
        Axis::AntiDiagonal,
    ];

    /// Forward step `(d_row, d_col)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::MainDiagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Walk from `(row + d_row, col + d_col)` outward while cells hold `player`.
///
/// The origin itself is not included. Positions come back in walking order.
pub fn collect_line(
    board: &Board,
    row: usize,
    col: usize,
    d_row: i32,
    d_col: i32,
    player: Stone,
) -> Vec<Pos> {
    let mut line = Vec::new();
    let mut cursor = board.step(Pos::new(row, col), d_row, d_col);
    while let Some(pos) = cursor {
        if board.get(pos) != player {
            break;
        }
        line.push(pos);
        cursor = board.step(pos, d_row, d_col);
    }
    line
}

/// Number of consecutive `player` stones walking from `pos` (exclusive).
#[inline]
pub fn count_direction(board: &Board, pos: Pos, d_row: i32, d_col: i32, player: Stone) -> usize {
    let mut count = 0;
    let mut cursor = board.step(pos, d_row, d_col);
    while let Some(p) = cursor {
        if board.get(p) != player {
            break;
        }
        count += 1;
        cursor = board.step(p, d_row, d_col);
    }
    count
}

/// Length of the line through `pos` along `axis` if `pos` held `player`.
#[inline]
pub fn line_length_through(board: &Board, pos: Pos, axis: Axis, player: Stone) -> usize {
    let (dr, dc) = axis.delta();
    1 + count_direction(board, pos, dr, dc, player) + count_direction(board, pos, -dr, -dc, player)
}

/// Would placing `player` at `pos` produce five or more in a row?
///
/// Does not touch the board; `pos` is treated as holding `player`.
pub fn completes_five(board: &Board, pos: Pos, player: Stone) -> bool {
    Axis::ALL
        .iter()
        .any(|&axis| line_length_through(board, pos, axis, player) >= 5)
}

/// A maximal run measured from its first stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub length: usize,
    /// Empty cells directly beyond each end (0, 1 or 2)
    pub open_ends: u8,
}

/// Measure the run of `player` starting at `pos` along `axis`.
///
/// Returns `None` unless `pos` holds `player` and is the start of its run
/// (the cell behind it is not `player`), so each run is measured once.
pub fn measure_run(board: &Board, pos: Pos, axis: Axis, player: Stone) -> Option<Run> {
    if board.get(pos) != player {
        return None;
    }
    let (dr, dc) = axis.delta();
    let before = board.step(pos, -dr, -dc);
    if before.is_some_and(|p| board.get(p) == player) {
        return None;
    }

    let length = 1 + count_direction(board, pos, dr, dc, player);
    let after = pos
        .offset(dr * length as i32, dc * length as i32)
        .filter(|&p| board.contains(p));

    let open_ends = [before, after]
        .into_iter()
        .flatten()
        .filter(|&p| board.is_empty(p))
        .count() as u8;

    Some(Run { length, open_ends })
}
