//! Game rules for N x N tic-tac-toe
//!
//! This module implements:
//! - Line enumeration (rows, columns, both diagonals)
//! - Win and draw detection
//! - Move generation and checked state transitions

pub mod lines;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use lines::{is_live, uniform_mark, win_lines, Line};
pub use moves::{apply_move, legal_moves};
pub use win::{evaluate_outcome, Outcome};
