//! Game driver integrating search and rules
//!
//! The engine owns the configuration and a [`Searcher`], picks moves for
//! each side with that side's [`Agent`], and runs the turn loop:
//!
//! 1. **Check**: stop once the state is terminal
//! 2. **Choose**: the side to move asks its agent for a move
//! 3. **Apply**: the move goes through the checked transition
//!
//! # Example
//!
//! ```
//! use tictactoe::{Agent, Engine, EngineConfig, Mark};
//!
//! let config = EngineConfig::default()
//!     .with_agents(Agent::Random, Agent::Random)
//!     .with_seed(7);
//! let mut engine = Engine::new(config).unwrap();
//!
//! let record = engine.play_game().unwrap();
//! assert!(record.outcome.is_terminal);
//! assert_eq!(record.moves.len(), record.final_state.turn_count());
//! println!("Winner: {}", record.outcome.winner);
//! ```

use tracing::{debug, info, instrument, warn};

use crate::board::{Mark, Move, State, DEFAULT_SIZE};
use crate::error::{Error, Result};
use crate::rules::{apply_move, evaluate_outcome, Outcome};
use crate::search::{random_move, Searcher};

/// Move source for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Agent {
    /// Depth-limited minimax at the configured depth
    #[default]
    Minimax,
    /// Uniformly random legal move
    Random,
}

/// Engine configuration.
///
/// Defaults: 3x3 board, depth 9 (the whole game), minimax for both sides,
/// random seed from the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side length
    pub size: usize,
    /// Plies searched before the heuristic takes over
    pub depth: u32,
    pub x_agent: Agent,
    pub o_agent: Agent,
    /// Seed for the heuristic and the random agent; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            depth: 9,
            x_agent: Agent::Minimax,
            o_agent: Agent::Minimax,
            seed: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_agents(mut self, x_agent: Agent, o_agent: Agent) -> Self {
        self.x_agent = x_agent;
        self.o_agent = o_agent;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Agent playing `mark`
    pub fn agent_for(&self, mark: Mark) -> Agent {
        match mark {
            Mark::O => self.o_agent,
            _ => self.x_agent,
        }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the board size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }

        let minimax = self.x_agent == Agent::Minimax || self.o_agent == Agent::Minimax;
        if minimax && self.size > DEFAULT_SIZE && self.depth > 4 {
            warn!(
                size = self.size,
                depth = self.depth,
                "search cost grows with empty cells ^ depth; expect a long wait"
            );
        }
        Ok(())
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves in the order they were played
    pub moves: Vec<Move>,
    pub final_state: State,
    pub outcome: Outcome,
}

/// Main engine.
///
/// # Example
///
/// ```
/// use tictactoe::{Engine, EngineConfig, Mark, State};
///
/// let mut engine = Engine::new(EngineConfig::default().with_seed(1)).unwrap();
/// let state: State = "XX./OO./...".parse().unwrap();
///
/// let mv = engine.choose_move(&state, Mark::X).unwrap();
/// assert_eq!((mv.row, mv.col), (0, 2));
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    searcher: Searcher,
}

impl Engine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the error from [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let searcher = match config.seed {
            Some(seed) => Searcher::seeded(seed),
            None => Searcher::new(),
        };
        Ok(Self { config, searcher })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Empty board of the configured size
    pub fn new_game(&self) -> State {
        State::new(self.config.size)
    }

    /// Move for `player` from its configured agent, or `None` if the game is
    /// already over.
    #[must_use]
    pub fn choose_move(&mut self, state: &State, player: Mark) -> Option<Move> {
        match self.config.agent_for(player) {
            Agent::Minimax => {
                let result = self.searcher.search(state, self.config.depth, player);
                debug!(score = result.score, nodes = result.nodes, "minimax choice");
                result.best_move
            }
            Agent::Random => {
                // A won board can still have empty cells
                if evaluate_outcome(state).is_terminal {
                    return None;
                }
                random_move(state, player, self.searcher.rng_mut())
            }
        }
    }

    /// Play a full game from an empty board.
    pub fn play_game(&mut self) -> Result<GameRecord> {
        let start = self.new_game();
        self.play(start)
    }

    /// Play from `start` until the game ends.
    pub fn play(&mut self, start: State) -> Result<GameRecord> {
        self.play_observed(start, |_, _| {})
    }

    /// Play from `start`, calling `observer` after every applied move.
    ///
    /// The side to move is derived from the turn count, X first.
    ///
    /// # Errors
    ///
    /// - [`Error::NoValidMoves`] if an agent finds no move in a live game
    /// - [`Error::InvalidMove`] if an agent produces an illegal move
    #[instrument(skip(self, start, observer), fields(size = start.size(), turns = start.turn_count()))]
    pub fn play_observed<F>(&mut self, start: State, mut observer: F) -> Result<GameRecord>
    where
        F: FnMut(&Move, &State),
    {
        let mut state = start;
        let mut moves = Vec::new();

        let outcome = loop {
            let outcome = evaluate_outcome(&state);
            if outcome.is_terminal {
                break outcome;
            }

            let player = state.to_move();
            let mv = self
                .choose_move(&state, player)
                .ok_or(Error::NoValidMoves)?;
            state = apply_move(&state, mv)?;
            debug!(%mv, turns = state.turn_count(), "move played");

            observer(&mv, &state);
            moves.push(mv);
        };

        info!(winner = %outcome.winner, moves = moves.len(), "game over");
        Ok(GameRecord {
            moves,
            final_state: state,
            outcome,
        })
    }
}
