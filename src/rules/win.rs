//! Win and draw detection
//!
//! Five or more in a row wins; overlines count.

use serde::Serialize;

use crate::board::{Board, Pos, Stone};

use super::line::{collect_line, Axis};

/// A completed line of five or more stones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    /// Positions ordered along the axis
    pub positions: Vec<Pos>,
    pub axis: Axis,
}

impl WinningLine {
    /// Color of the line's stones
    pub fn color(&self, board: &Board) -> Stone {
        self.positions
            .first()
            .map_or(Stone::Empty, |&p| board.get(p))
    }
}

/// Find the winning line through the stone at `(row, col)`.
///
/// Axes are tried horizontal, vertical, main diagonal, anti-diagonal; the
/// first one with a run of five or more wins. Returns `None` for an empty
/// or off-board origin.
pub fn determine_winning_sequence(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    let origin = Pos::new(row, col);
    if !board.contains(origin) {
        return None;
    }
    let player = board.get(origin);
    if player == Stone::Empty {
        return None;
    }

    for axis in Axis::ALL {
        let (dr, dc) = axis.delta();
        let forward = collect_line(board, row, col, dr, dc, player);
        let backward = collect_line(board, row, col, -dr, -dc, player);
        if forward.len() + backward.len() + 1 < 5 {
            continue;
        }

        let mut positions = Vec::with_capacity(forward.len() + backward.len() + 1);
        positions.extend(backward.into_iter().rev());
        positions.push(origin);
        positions.extend(forward);
        return Some(WinningLine { positions, axis });
    }
    None
}

/// Scan every stone in row-major order for a completed line.
pub fn find_any_win(board: &Board) -> Option<WinningLine> {
    board
        .positions()
        .filter(|&p| !board.is_empty(p))
        .find_map(|p| determine_winning_sequence(board, p.row, p.col))
}

/// True iff no cell is empty. Check for a win first; this does not.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let line = determine_winning_sequence(&board, 9, 2).unwrap();
        assert_eq!(line.axis, Axis::Horizontal);
        assert_eq!(line.positions, (0..5).map(|c| Pos::new(9, c)).collect::<Vec<_>>());
        assert_eq!(line.color(&board), Stone::Black);
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        let line = determine_winning_sequence(&board, 4, 9).unwrap();
        assert_eq!(line.axis, Axis::Vertical);
        assert_eq!(line.positions.first(), Some(&Pos::new(0, 9)));
        assert_eq!(line.positions.last(), Some(&Pos::new(4, 9)));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 10 - i), Stone::Black);
        }
        let line = determine_winning_sequence(&board, 2, 8).unwrap();
        assert_eq!(line.axis, Axis::AntiDiagonal);
        assert_eq!(line.positions.len(), 5);
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let line = determine_winning_sequence(&board, 9, 5).unwrap();
        assert_eq!(line.positions.len(), 6);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(determine_winning_sequence(&board, 9, 0).is_none());
        assert!(find_any_win(&board).is_none());
    }

    #[test]
    fn test_empty_origin_is_none() {
        let board = Board::new();
        assert!(determine_winning_sequence(&board, 7, 7).is_none());
        assert!(determine_winning_sequence(&board, 20, 7).is_none());
    }

    #[test]
    fn test_axis_order_prefers_horizontal() {
        // Origin sits on both a horizontal and a vertical five
        let mut board = Board::new();
        for i in 3..8 {
            board.place_stone(Pos::new(5, i), Stone::White);
            board.place_stone(Pos::new(i, 5), Stone::White);
        }
        let line = determine_winning_sequence(&board, 5, 5).unwrap();
        assert_eq!(line.axis, Axis::Horizontal);
    }

    #[test]
    fn test_find_any_win_scans_whole_board() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 2 + i), Stone::Black);
        }
        board.place_stone(Pos::new(0, 0), Stone::White);
        let line = find_any_win(&board).unwrap();
        assert_eq!(line.axis, Axis::MainDiagonal);
        assert_eq!(line.positions[0], Pos::new(10, 2));
    }

    #[test]
    fn test_draw_on_full_board_without_five() {
        // Horizontal pairs, flipped every row: no run longer than two.
        let mut board = Board::new();
        for pos in board.positions().collect::<Vec<_>>() {
            let stone = if (pos.col / 2 + pos.row) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }
        assert!(check_draw(&board));
        assert!(find_any_win(&board).is_none());
    }

    #[test]
    fn test_checkerboard_diagonals_win() {
        let mut board = Board::new();
        for pos in board.positions().collect::<Vec<_>>() {
            let stone = if (pos.row + pos.col) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }
        assert!(check_draw(&board));
        let line = find_any_win(&board).unwrap();
        assert_eq!(line.axis, Axis::MainDiagonal);
        assert_eq!(line.positions.first(), Some(&Pos::new(0, 0)));
        assert_eq!(line.positions.len(), 15);
    }

    #[test]
    fn test_no_draw_with_empty_cell() {
        let mut board = Board::with_size(3).unwrap();
        for pos in board.positions().collect::<Vec<_>>() {
            board.place_stone(pos, Stone::Black);
        }
        board.remove_stone(Pos::new(1, 1));
        assert!(!check_draw(&board));
    }

    proptest! {
        #[test]
        fn prop_five_through_origin_is_found(
            axis_idx in 0usize..4,
            a in 0usize..11,
            b in 0usize..11,
            u in 0usize..15,
            shift in 0usize..5,
            white in any::<bool>(),
        ) {
            let axis = Axis::ALL[axis_idx];
            let (dr, dc) = axis.delta();
            let color = if white { Stone::White } else { Stone::Black };
            let start = match axis {
                Axis::Horizontal => Pos::new(u, a),
                Axis::Vertical => Pos::new(a, u),
                Axis::MainDiagonal => Pos::new(a, b),
                Axis::AntiDiagonal => Pos::new(a, b + 4),
            };

            let mut board = Board::new();
            let mut cells = Vec::new();
            for i in 0..5 {
                let p = board.step(start, dr * i, dc * i);
                prop_assert!(p.is_some());
                cells.extend(p);
            }
            for &p in &cells {
                board.place_stone(p, color);
            }

            let origin = cells[shift];
            let line = determine_winning_sequence(&board, origin.row, origin.col);
            prop_assert!(line.is_some());
            if let Some(line) = line {
                prop_assert!(line.positions.len() >= 5);
                prop_assert!(line.positions.contains(&origin));
                prop_assert_eq!(line.axis, axis);
            }
        }
    }
}
