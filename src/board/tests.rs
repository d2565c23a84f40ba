use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
    assert!(Pos::new(3, 2) < Pos::new(3, 3));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(2, 3).offset(1, -1), Some(Pos::new(3, 2)));
}

#[test]
fn test_board_defaults() {
    let board = Board::new();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());
    assert_eq!(board.center(), Pos::new(7, 7));
    assert_eq!(board.positions().count(), 225);
}

#[test]
fn test_board_size_validation() {
    assert_eq!(Board::with_size(0), Err(BoardError::InvalidSize(0)));
    assert_eq!(
        Board::with_size(MAX_BOARD_SIZE + 1),
        Err(BoardError::InvalidSize(MAX_BOARD_SIZE + 1))
    );
    assert_eq!(Board::with_size(9).map(|b| b.size()), Ok(9));
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    let rows = vec![vec![Stone::Empty; 3], vec![Stone::Empty; 2], vec![Stone::Empty; 3]];
    assert_eq!(
        Board::from_rows(&rows),
        Err(BoardError::RaggedRow {
            row: 1,
            len: 2,
            expected: 3
        })
    );
}

#[test]
fn test_rows_round_trip() {
    let mut board = Board::with_size(5).unwrap();
    board.place_stone(Pos::new(1, 2), Stone::Black);
    board.place_stone(Pos::new(4, 0), Stone::White);
    let rebuilt = Board::from_rows(&board.rows()).unwrap();
    assert_eq!(rebuilt, board);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_in_bounds() {
    let board = Board::new();
    assert_eq!(board.in_bounds(0, 0), Some(Pos::new(0, 0)));
    assert_eq!(board.in_bounds(14, 14), Some(Pos::new(14, 14)));
    assert_eq!(board.in_bounds(-1, 3), None);
    assert_eq!(board.in_bounds(3, 15), None);
}

#[test]
fn test_has_neighbor() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);
    assert!(board.has_neighbor(Pos::new(6, 6)));
    assert!(board.has_neighbor(Pos::new(8, 7)));
    assert!(!board.has_neighbor(Pos::new(9, 7)));
    assert!(!board.has_neighbor(Pos::new(7, 7)));
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::with_size(3).unwrap();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(2, 1), Stone::White);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with("X  .  ."));
    assert!(lines[3].ends_with(".  O  ."));
}

#[test]
fn test_stone_serde_names() {
    assert_eq!(serde_json::to_string(&Stone::Black).unwrap(), "\"black\"");
    let s: Stone = serde_json::from_str("\"empty\"").unwrap();
    assert_eq!(s, Stone::Empty);
}
