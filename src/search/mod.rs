//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation restricted to the neighbourhood of stones
//! - Immediate win / block detection
//! - Bounded one-ply lookahead
//! - Depth-limited alpha-beta search

pub mod alphabeta;
pub mod candidates;
pub mod lookahead;
pub mod tactics;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use candidates::{neighborhood, ranked, Candidate};
pub use lookahead::{LookaheadResult, LookaheadSearcher};
pub use tactics::find_winning_cell;
