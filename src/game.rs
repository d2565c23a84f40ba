//! Authoritative game state: move application, undo, and snapshots
//!
//! [`GomokuEngine`] owns one board and enforces turn order. It is either
//! active (moves accepted) or terminal after a win or draw, in which case
//! every move is rejected until [`GomokuEngine::reset`] or
//! [`GomokuEngine::load_state`].
//!
//! # Example
//!
//! ```
//! use gomoku::game::{EngineOptions, GomokuEngine, MoveOutcome};
//!
//! let mut engine = GomokuEngine::new(EngineOptions::default()).unwrap();
//! for col in 0..5 {
//!     engine.apply_move(7, col);
//!     if col < 4 {
//!         engine.apply_move(8, col);
//!     }
//! }
//! assert!(engine.is_game_over());
//! assert_eq!(engine.winning_sequence().len(), 5);
//! assert!(matches!(engine.apply_move(0, 0), MoveOutcome::Invalid(_)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::StateError;
use crate::rules::{check_draw, determine_winning_sequence, find_any_win};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Side length of the board (default 15)
    pub board_size: usize,
    /// Player to move first (default black)
    pub starting_player: Stone,
    /// History capacity; `None` means one entry per cell
    pub max_history: Option<usize>,
}

impl EngineOptions {
    /// Number of moves retained before the oldest is evicted
    pub fn history_limit(&self) -> usize {
        self.max_history
            .unwrap_or(self.board_size * self.board_size)
            .max(1)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            starting_player: Stone::Black,
            max_history: None,
        }
    }
}

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidMove {
    GameOver,
    OutOfBounds,
    Occupied,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidMove::GameOver => "game-over",
            InvalidMove::OutOfBounds => "out-of-bounds",
            InvalidMove::Occupied => "occupied",
        };
        f.write_str(reason)
    }
}

/// Result of [`GomokuEngine::apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Rejected; the board is untouched
    Invalid(InvalidMove),
    /// Applied; the turn passes to the other color
    Continue { player: Stone, mv: Move },
    /// Applied and completed a line of five or more
    Win {
        player: Stone,
        mv: Move,
        winning_sequence: Vec<Pos>,
    },
    /// Applied and filled the last empty cell
    Draw { player: Stone, mv: Move },
}

impl MoveOutcome {
    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveOutcome::Invalid(_))
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::Draw { .. })
    }
}

/// Serializable engine state.
///
/// `game_over` and `winning_sequence` are written for consumers but
/// recomputed from the board on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<Vec<Stone>>,
    pub current_player: Stone,
    pub move_history: Vec<Move>,
    pub starting_player: Stone,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winning_sequence: Vec<Pos>,
}

/// Gomoku rules engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuEngine {
    options: EngineOptions,
    board: Board,
    current_player: Stone,
    history: Vec<Move>,
    game_over: bool,
    winning_sequence: Vec<Pos>,
}

impl GomokuEngine {
    /// Create an engine with an empty board.
    pub fn new(options: EngineOptions) -> Result<Self, StateError> {
        if !options.starting_player.is_player() {
            return Err(StateError::InvalidPlayer {
                field: "startingPlayer",
            });
        }
        let board = Board::with_size(options.board_size)?;

        Ok(Self {
            options,
            board,
            current_player: options.starting_player,
            history: Vec::new(),
            game_over: false,
            winning_sequence: Vec::new(),
        })
    }

    /// Build an engine from a snapshot.
    pub fn from_state(snapshot: &GameSnapshot, options: EngineOptions) -> Result<Self, StateError> {
        let mut engine = Self::new(options)?;
        engine.load_state(snapshot)?;
        Ok(engine)
    }

    /// Build an engine from a JSON snapshot.
    pub fn from_json(json: &str, options: EngineOptions) -> Result<Self, StateError> {
        let snapshot: GameSnapshot = serde_json::from_str(json)?;
        Self::from_state(&snapshot, options)
    }

    // ==================== Accessors ====================

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn starting_player(&self) -> Stone {
        self.options.starting_player
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Retained moves, oldest first
    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Positions of the active win; empty unless the game ended in a win
    #[inline]
    pub fn winning_sequence(&self) -> &[Pos] {
        &self.winning_sequence
    }

    #[inline]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // ==================== Play ====================

    /// Place a stone for the current player.
    ///
    /// Checks run in a fixed order: game over, bounds, occupancy. A
    /// rejected move leaves the engine unchanged.
    pub fn apply_move(&mut self, row: i32, col: i32) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Invalid(InvalidMove::GameOver);
        }
        let Some(pos) = self.board.in_bounds(row, col) else {
            return MoveOutcome::Invalid(InvalidMove::OutOfBounds);
        };
        if !self.board.is_empty(pos) {
            return MoveOutcome::Invalid(InvalidMove::Occupied);
        }

        let player = self.current_player;
        let mv = Move::new(pos, player);
        self.board.place_stone(pos, player);
        self.push_history(mv);

        if let Some(line) = determine_winning_sequence(&self.board, pos.row, pos.col) {
            self.game_over = true;
            self.winning_sequence = line.positions;
            return MoveOutcome::Win {
                player,
                mv,
                winning_sequence: self.winning_sequence.clone(),
            };
        }

        if check_draw(&self.board) {
            self.game_over = true;
            self.winning_sequence.clear();
            return MoveOutcome::Draw { player, mv };
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue { player, mv }
    }

    /// Remove up to `count` recent moves, most recent first.
    ///
    /// Always clears the terminal flag, even when nothing is removed or the
    /// remaining position still holds a five. The turn is recomputed only
    /// when at least one move comes off.
    pub fn undo_last_move(&mut self, count: usize) -> Vec<Move> {
        let keep = self.history.len().saturating_sub(count);
        let removed: Vec<Move> = self.history.drain(keep..).rev().collect();
        for mv in &removed {
            self.board.remove_stone(mv.pos());
        }

        if !removed.is_empty() {
            self.current_player = self
                .history
                .last()
                .map_or(self.options.starting_player, |mv| mv.player.opponent());
        }
        self.game_over = false;
        self.winning_sequence.clear();
        removed
    }

    /// Empty the board and return to the starting player.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = self.options.starting_player;
        self.history.clear();
        self.game_over = false;
        self.winning_sequence.clear();
    }

    /// Empty cells worth playing, in row-major order.
    ///
    /// An empty board yields only the center. With `vicinity_only`, cells
    /// touching a stone are returned, or every empty cell if none touch.
    pub fn available_moves(&self, vicinity_only: bool) -> Vec<Pos> {
        if self.board.is_board_empty() {
            return vec![self.board.center()];
        }
        if vicinity_only {
            let near: Vec<Pos> = self
                .board
                .empty_positions()
                .filter(|&pos| self.board.has_neighbor(pos))
                .collect();
            if !near.is_empty() {
                return near;
            }
        }
        self.board.empty_positions().collect()
    }

    fn push_history(&mut self, mv: Move) {
        self.history.push(mv);
        let limit = self.options.history_limit();
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }

    // ==================== Persistence ====================

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            current_player: self.current_player,
            move_history: self.history.clone(),
            starting_player: self.options.starting_player,
            game_over: self.game_over,
            winning_sequence: self.winning_sequence.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// Replace the whole game state with `snapshot`.
    ///
    /// Everything is validated before any field changes, so on error the
    /// engine is exactly as it was. Terminal status is derived from the
    /// board: the last recorded move first, then a full scan, then draw.
    pub fn load_state(&mut self, snapshot: &GameSnapshot) -> Result<(), StateError> {
        let board = Board::from_rows(&snapshot.board)?;
        if board.size() != self.options.board_size {
            return Err(StateError::SizeMismatch {
                expected: self.options.board_size,
                actual: board.size(),
            });
        }
        if !snapshot.current_player.is_player() {
            return Err(StateError::InvalidPlayer {
                field: "currentPlayer",
            });
        }
        if !snapshot.starting_player.is_player() {
            return Err(StateError::InvalidPlayer {
                field: "startingPlayer",
            });
        }

        for (index, mv) in snapshot.move_history.iter().enumerate() {
            let pos = mv.pos();
            if !board.contains(pos) {
                return Err(StateError::HistoryOutOfBounds {
                    index,
                    row: mv.row,
                    col: mv.col,
                });
            }
            if !mv.player.is_player() {
                return Err(StateError::InvalidPlayer {
                    field: "moveHistory",
                });
            }
            let found = board.get(pos);
            if found != mv.player {
                return Err(StateError::Inconsistent {
                    index,
                    row: mv.row,
                    col: mv.col,
                    recorded: mv.player,
                    found,
                });
            }
        }

        let limit = self.options.history_limit();
        let skip = snapshot.move_history.len().saturating_sub(limit);
        let history = snapshot.move_history[skip..].to_vec();

        let win = history
            .last()
            .and_then(|mv| determine_winning_sequence(&board, mv.row, mv.col))
            .or_else(|| find_any_win(&board));
        let (game_over, winning_sequence) = match win {
            Some(line) => (true, line.positions),
            None => (check_draw(&board), Vec::new()),
        };

        log::debug!(
            "loaded {} stones, {} history entries, game over: {}",
            board.stone_count(),
            history.len(),
            game_over
        );

        self.board = board;
        self.current_player = snapshot.current_player;
        self.options.starting_player = snapshot.starting_player;
        self.history = history;
        self.game_over = game_over;
        self.winning_sequence = winning_sequence;
        Ok(())
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        let options = EngineOptions::default();
        Self {
            options,
            board: Board::new(),
            current_player: options.starting_player,
            history: Vec::new(),
            game_over: false,
            winning_sequence: Vec::new(),
        }
    }
}
