//! Board representation for Gomoku

pub mod board;
pub mod trial;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;
pub use trial::TrialMove;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest board accepted by [`Board::with_size`]
pub const MAX_BOARD_SIZE: usize = 64;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Single-character glyph used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
        };
        f.write_str(name)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, returning `None` below zero.
    /// Upper bounds are the board's concern.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i64 + i64::from(dr);
        let col = self.col as i64 + i64::from(dc);
        if row < 0 || col < 0 {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A placed stone. Immutable once recorded in a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Stone,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, player: Stone) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            player,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}
