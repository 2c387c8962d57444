//! Tic-tac-toe search engine for N x N boards
//!
//! A small game-search engine:
//! - Board of any size N (3x3 by default)
//! - A line is a row, a column or one of the two diagonals; filling one wins
//! - A full board with no complete line is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Marks, moves, immutable boards and game states
//! - [`rules`]: Line enumeration, win/draw detection, move generation and transitions
//! - [`eval`]: Score scale and the depth-zero heuristic
//! - [`search`]: Depth-limited minimax and a random agent
//! - [`engine`]: Configuration and the turn loop driving a whole game
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{apply_move, evaluate_outcome, Mark, Searcher, State};
//!
//! let mut state = State::new(3);
//! let mut searcher = Searcher::seeded(42);
//! let mut player = Mark::X;
//!
//! while !evaluate_outcome(&state).is_terminal {
//!     let result = searcher.search(&state, 9, player);
//!     let mv = result.best_move.expect("live game has a move");
//!     state = apply_move(&state, mv).unwrap();
//!     player = player.opponent();
//! }
//!
//! // Perfect play on 3x3 is a draw
//! assert!(evaluate_outcome(&state).is_draw());
//! ```
//!
//! # Scores
//!
//! Scores are from X's point of view: +100 X wins, -100 O wins, 0 draw. At
//! the search horizon the heuristic only recognises moves that end the game
//! and scores the rest at random.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Move, Pos, State, DEFAULT_SIZE};
pub use engine::{Agent, Engine, EngineConfig, GameRecord};
pub use error::{Error, InvalidMoveError, Result};
pub use eval::{heuristic, Score};
pub use rules::{apply_move, evaluate_outcome, legal_moves, Outcome};
pub use search::{random_move, SearchResult, Searcher};
