//! Search module
//!
//! Contains:
//! - Depth-limited minimax with a heuristic at the horizon
//! - A uniformly random move agent

pub mod minimax;
pub mod random;

pub use minimax::{SearchResult, Searcher};
pub use random::random_move;
