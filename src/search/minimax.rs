//! Depth-limited minimax search
//!
//! Plain minimax over the full move list, X maximizing and O minimizing.
//! Every node first checks whether the game is already over, then whether
//! the depth budget is spent (handing over to the heuristic), and only then
//! expands its children.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Mark, Searcher, State};
//!
//! let mut searcher = Searcher::seeded(1);
//! let state: State = "XX./OO./...".parse().unwrap();
//!
//! let result = searcher.search(&state, 2, Mark::X);
//! assert_eq!(result.best_move.map(|m| (m.row, m.col)), Some((0, 2)));
//! assert_eq!(result.score, 100);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::board::{Mark, Move, State};
use crate::eval::{heuristic, Score};
use crate::rules::{evaluate_outcome, legal_moves};

/// Search result: the chosen move and its value from X's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move to play; `None` when the state is already terminal
    pub best_move: Option<Move>,
    /// +100 X wins, -100 O wins, 0 draw; heuristic guesses in between
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Owns the random source used by the depth-zero heuristic, so a seeded
/// searcher replays the same choices.
#[derive(Debug, Clone)]
pub struct Searcher<R = StdRng> {
    rng: R,
    nodes: u64,
}

impl Searcher<StdRng> {
    /// Searcher seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible searcher
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Random source, shared with callers that need one (e.g. the random agent)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Choose a move for `player` looking `depth` plies ahead.
    ///
    /// A terminal state yields no move and the outcome's score, whatever the
    /// depth. At depth 0 the heuristic decides. Otherwise each legal move is
    /// tried in row-major order; only a strictly better score replaces the
    /// running best, and a move reaching the player's best possible score
    /// ends the loop early.
    #[instrument(skip(self, state), fields(turns = state.turn_count()))]
    pub fn search(&mut self, state: &State, depth: u32, player: Mark) -> SearchResult {
        debug_assert!(!player.is_empty(), "search needs a player mark");

        self.nodes = 0;
        let (best_move, score) = self.minimax(state, depth, player);
        let result = SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        };

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "search finished"
        );
        result
    }

    fn minimax(&mut self, state: &State, depth: u32, player: Mark) -> (Option<Move>, i32) {
        self.nodes += 1;

        let outcome = evaluate_outcome(state);
        if outcome.is_terminal {
            return (None, outcome.score());
        }

        if depth == 0 {
            return match heuristic(state, player, &mut self.rng) {
                Some(scored) => (Some(scored.mv), scored.score),
                // Not terminal, so the board has an empty cell
                None => (None, Score::DRAW),
            };
        }

        let maximizing = player == Mark::X;
        let best_possible = player.score();
        let mut best_move = None;
        let mut best_score = if maximizing {
            Score::MIN_BOUND
        } else {
            Score::MAX_BOUND
        };

        for candidate in legal_moves(state) {
            let mv = candidate.with_mark(player);
            let child = state.place(mv.pos(), mv.mark);
            let (_, value) = self.minimax(&child, depth - 1, player.opponent());

            if value == best_possible {
                return (Some(mv), value);
            }

            let improves = if maximizing {
                value > best_score
            } else {
                value < best_score
            };
            if improves {
                best_move = Some(mv);
                best_score = value;
            }
        }

        (best_move, best_score)
    }
}
