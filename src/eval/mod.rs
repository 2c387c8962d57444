//! Evaluation for positions where the search stops
//!
//! - [`score`]: the +100 / -100 / 0 score scale
//! - [`heuristic`]: move choice at depth zero

pub mod heuristic;
pub mod score;

pub use heuristic::{candidate_moves, heuristic, ScoredMove};
pub use score::Score;
