//! Score scale shared by the heuristic and the search
//!
//! Scores are always from X's point of view: X maximizes, O minimizes.

/// Score constants
pub struct Score;

impl Score {
    /// X completed a line
    pub const X_WIN: i32 = 100;
    /// O completed a line
    pub const O_WIN: i32 = -100;
    pub const DRAW: i32 = 0;

    /// Below anything the maximizer can reach
    pub const MIN_BOUND: i32 = -5000;
    /// Above anything the minimizer can reach
    pub const MAX_BOUND: i32 = 5000;
}
