//! AI engine selecting moves at three difficulty levels
//!
//! Every difficulty starts with the same two tactical checks:
//!
//! 1. **Immediate win**: complete our own five if possible
//! 2. **Block**: otherwise occupy the cell where the opponent would complete five
//!
//! Then each difficulty picks a move its own way:
//!
//! - **Easy**: random pick among the three best-ranked candidates
//! - **Medium**: one-ply lookahead against the opponent's best replies
//! - **Hard**: depth-limited alpha-beta, falling back to Medium
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, AiOptions, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut ai = AIEngine::new(Difficulty::Medium, Stone::White, AiOptions::default()).unwrap();
//! let result = ai.select_move_with_stats(&board).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Decision: {:?}", result.decision);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::AiError;
use crate::eval::PatternScore;
use crate::search::{find_winning_cell, ranked, LookaheadSearcher, SearchStats, Searcher};
use crate::telemetry::{self, SearchTelemetry, TelemetryRecord, TelemetrySink};

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Name of the move-selection strategy behind this tier
    pub fn strategy(self) -> &'static str {
        match self {
            Difficulty::Easy => "heuristic",
            Difficulty::Medium => "lookahead",
            Difficulty::Hard => "minimax",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AiError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(AiError::UnknownDifficulty(tag.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Which step of move selection produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    /// Completes our own five
    ImmediateWin,
    /// Occupies the opponent's winning cell
    BlockThreat,
    /// Chosen among ranked candidates (easy, medium)
    Candidate,
    /// Alpha-beta result (hard)
    Search,
    /// Uniform pick among all empty cells
    RandomFallback,
    /// Hard search produced nothing; medium picked instead
    MediumFallback,
}

/// Tuning overrides applied on top of the difficulty defaults.
///
/// Every field is optional; `None` keeps the tier default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Behavior {
    /// Alpha-beta depth (hard, default 3)
    pub search_depth: Option<u8>,
    /// Ranked candidates kept per node (easy/medium 12, hard 8)
    pub candidate_limit: Option<usize>,
    /// Opponent replies examined by the lookahead (default 6)
    pub reply_limit: Option<usize>,
    /// Top candidates the easy tier picks from (default 3)
    pub random_pool: Option<usize>,
    /// Free-form label echoed in telemetry
    pub profile: Option<String>,
}

/// Limits resolved for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Limits {
    candidate_limit: usize,
    reply_limit: usize,
    random_pool: usize,
    search_depth: u8,
}

impl Limits {
    fn resolve(difficulty: Difficulty, behavior: &Behavior) -> Self {
        let default_candidates = match difficulty {
            Difficulty::Easy | Difficulty::Medium => 12,
            Difficulty::Hard => 8,
        };
        Self {
            candidate_limit: behavior.candidate_limit.unwrap_or(default_candidates).max(1),
            reply_limit: behavior.reply_limit.unwrap_or(6),
            random_pool: behavior.random_pool.unwrap_or(3).max(1),
            search_depth: behavior.search_depth.unwrap_or(3),
        }
    }
}

/// Construction options for [`AIEngine`].
pub struct AiOptions {
    /// Expected board size; boards of any other size are rejected
    pub board_size: usize,
    /// Random source for tie-breaking and the easy tier
    pub rng: Box<dyn RngCore>,
    /// Optional receiver for one record per selected move
    pub telemetry: Option<Box<dyn TelemetrySink>>,
    pub behavior: Behavior,
}

impl AiOptions {
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[must_use]
    pub fn with_telemetry(mut self, sink: impl TelemetrySink + 'static) -> Self {
        self.telemetry = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl Default for AiOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            rng: Box::new(StdRng::from_entropy()),
            telemetry: None,
            behavior: Behavior::default(),
        }
    }
}

/// Result of a move selection with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Move chosen, `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score attached to the decision, when it has one
    pub score: Option<i32>,
    pub decision: Decision,
    /// Ranked candidates the strategy considered
    pub candidate_count: usize,
    pub elapsed: Duration,
    /// Alpha-beta counters (hard only, when the search ran)
    pub search: Option<SearchStats>,
}

impl MoveResult {
    #[inline]
    fn tactical(pos: Pos, decision: Decision, score: i32) -> Self {
        Self {
            best_move: Some(pos),
            score: Some(score),
            decision,
            candidate_count: 0,
            elapsed: Duration::ZERO,
            search: None,
        }
    }
}

/// Gomoku AI for one color at one difficulty.
///
/// `select_move` never mutates the caller's board: simulation runs on a
/// private copy that is restored after every trial placement.
pub struct AIEngine {
    difficulty: Difficulty,
    color: Stone,
    board_size: usize,
    limits: Limits,
    behavior: Behavior,
    rng: Box<dyn RngCore>,
    telemetry: Option<Box<dyn TelemetrySink>>,
}

impl AIEngine {
    /// Create an AI playing `color` at `difficulty`.
    ///
    /// Fails with [`AiError::InvalidColor`] for `Stone::Empty`.
    pub fn new(difficulty: Difficulty, color: Stone, options: AiOptions) -> Result<Self, AiError> {
        if !color.is_player() {
            return Err(AiError::InvalidColor);
        }
        let AiOptions {
            board_size,
            rng,
            telemetry,
            behavior,
        } = options;

        Ok(Self {
            difficulty,
            color,
            board_size,
            limits: Limits::resolve(difficulty, &behavior),
            behavior,
            rng,
            telemetry,
        })
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    #[inline]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Select a move for the AI's color.
    ///
    /// Returns `Ok(None)` only when the board is full.
    pub fn select_move(&mut self, board: &Board) -> Result<Option<Pos>, AiError> {
        Ok(self.select_move_with_stats(board)?.best_move)
    }

    /// Select a move and report how it was chosen.
    pub fn select_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, AiError> {
        if board.size() != self.board_size {
            return Err(AiError::BoardSizeMismatch {
                expected: self.board_size,
                actual: board.size(),
            });
        }

        let start = Instant::now();
        let mut work = board.clone();

        let mut result = match self.find_tactical_move(&work) {
            Some(result) => result,
            None => match self.difficulty {
                Difficulty::Easy => self.select_easy(&mut work),
                Difficulty::Medium => self.select_medium(&mut work),
                Difficulty::Hard => self.select_hard(&mut work),
            },
        };
        result.elapsed = start.elapsed();
        debug_assert_eq!(&work, board, "simulation left stones on the board");

        log::debug!(
            "{} ({}) chose {:?} via {:?} in {:?}",
            self.difficulty,
            self.color,
            result.best_move,
            result.decision,
            result.elapsed
        );

        self.emit_telemetry(&result);
        Ok(result)
    }

    /// Immediate win, then block of the opponent's immediate win.
    fn find_tactical_move(&self, board: &Board) -> Option<MoveResult> {
        if let Some(pos) = find_winning_cell(board, self.color) {
            return Some(MoveResult::tactical(pos, Decision::ImmediateWin, PatternScore::FIVE));
        }
        find_winning_cell(board, self.color.opponent())
            .map(|pos| MoveResult::tactical(pos, Decision::BlockThreat, -PatternScore::FIVE))
    }

    /// Uniform choice among the best few ranked candidates.
    fn select_easy(&mut self, board: &mut Board) -> MoveResult {
        let candidates = ranked(board, self.color, self.color, self.limits.candidate_limit);
        if candidates.is_empty() {
            return self.random_fallback(board);
        }

        let pool = candidates.len().min(self.limits.random_pool);
        let pick = candidates[self.rng.gen_range(0..pool)];
        MoveResult {
            best_move: Some(pick.pos),
            score: Some(pick.score),
            decision: Decision::Candidate,
            candidate_count: candidates.len(),
            elapsed: Duration::ZERO,
            search: None,
        }
    }

    fn select_medium(&mut self, board: &mut Board) -> MoveResult {
        let searcher = LookaheadSearcher::new(self.limits.candidate_limit, self.limits.reply_limit);
        let result = searcher.search(board, self.color);
        match result.best_move {
            Some(pos) => MoveResult {
                best_move: Some(pos),
                score: Some(result.score),
                decision: Decision::Candidate,
                candidate_count: result.candidates,
                elapsed: Duration::ZERO,
                search: None,
            },
            None => self.random_fallback(board),
        }
    }

    fn select_hard(&mut self, board: &mut Board) -> MoveResult {
        let mut searcher = Searcher::new(self.limits.search_depth, self.limits.candidate_limit);
        let result = searcher.search(board, self.color);

        if let Some(pos) = result.best_move {
            return MoveResult {
                best_move: Some(pos),
                score: Some(result.score),
                decision: Decision::Search,
                candidate_count: result.candidates,
                elapsed: Duration::ZERO,
                search: Some(result.stats),
            };
        }

        // Alpha-beta only comes back empty when the board has no candidates,
        // so the lookahead below normally ends in its random fallback and the
        // `MediumFallback` relabel applies only if candidate generation changes.
        log::debug!("alpha-beta found no move, falling back to lookahead");
        let mut fallback = self.select_medium(board);
        if fallback.decision == Decision::Candidate {
            fallback.decision = Decision::MediumFallback;
        }
        fallback.search = Some(result.stats);
        fallback
    }

    /// Uniform choice among every empty cell.
    fn random_fallback(&mut self, board: &Board) -> MoveResult {
        let empty: Vec<Pos> = board.empty_positions().collect();
        let best_move = if empty.is_empty() {
            None
        } else {
            Some(empty[self.rng.gen_range(0..empty.len())])
        };
        MoveResult {
            best_move,
            score: None,
            decision: Decision::RandomFallback,
            candidate_count: empty.len(),
            elapsed: Duration::ZERO,
            search: None,
        }
    }

    fn emit_telemetry(&mut self, result: &MoveResult) {
        let Some(sink) = self.telemetry.as_mut() else {
            return;
        };

        let search = (self.difficulty == Difficulty::Hard).then(|| {
            let stats = result.search.unwrap_or_default();
            SearchTelemetry {
                nodes_evaluated: stats.nodes_evaluated,
                max_depth_reached: stats.max_depth_reached,
                pruned_branches: stats.pruned_branches,
                search_depth: self.limits.search_depth,
                profile: self.behavior.profile.clone(),
            }
        });

        let record = TelemetryRecord {
            difficulty: self.difficulty,
            player: self.color,
            strategy: self.difficulty.strategy(),
            candidate_count: result.candidate_count,
            decision: result.decision,
            chosen: result.best_move,
            score: result.score,
            elapsed_ms: result.elapsed.as_secs_f64() * 1_000.0,
            search,
        };
        telemetry::emit(&mut **sink, &record);
    }
}
