//! Fixed-size square grid of stones

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Game board. The dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<Stone>,
}

impl Board {
    /// Empty 15x15 board
    pub fn new() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    /// Empty board of the given size
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// Build a board from nested rows, rejecting non-square input.
    pub fn from_rows(rows: &[Vec<Stone>]) -> Result<Self, BoardError> {
        let mut board = Self::with_size(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != board.size {
                return Err(BoardError::RaggedRow {
                    row: r,
                    len: row.len(),
                    expected: board.size,
                });
            }
            let start = r * board.size;
            board.cells[start..start + board.size].copy_from_slice(row);
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos));
        pos.row * self.size + pos.col
    }

    /// Check whether a position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Signed bounds check, converting to a position when inside
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> Option<Pos> {
        if row < 0 || col < 0 {
            return None;
        }
        let pos = Pos::new(row as usize, col as usize);
        self.contains(pos).then_some(pos)
    }

    /// Step from `pos` by `(dr, dc)` staying on the board
    #[inline]
    pub fn step(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        pos.offset(dr, dc).filter(|&p| self.contains(p))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone, overwriting whatever is there
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Empty every cell, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| s.is_player())
    }

    /// Center cell, `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Pos::new(r, c)))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty(p))
    }

    /// Check if any of the 8 neighbours holds a stone
    pub fn has_neighbor(&self, pos: Pos) -> bool {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = self.step(pos, dr, dc) {
                    if !self.is_empty(n) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Nested rows, the persisted grid shape
    pub fn rows(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(<[Stone]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>3}", r)?;
            for stone in row {
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
