//! Win and draw detection
//!
//! A game ends when some line is filled with one player's mark, or when
//! every cell has been played.

use crate::board::{Mark, State};

use super::lines::{uniform_mark, win_lines};

/// Result of examining a state. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Winning mark; `Mark::Empty` when nobody has won
    pub winner: Mark,
    pub is_terminal: bool,
}

impl Outcome {
    pub const IN_PROGRESS: Outcome = Outcome {
        winner: Mark::Empty,
        is_terminal: false,
    };

    pub const DRAW: Outcome = Outcome {
        winner: Mark::Empty,
        is_terminal: true,
    };

    #[inline]
    pub fn win(mark: Mark) -> Self {
        Self {
            winner: mark,
            is_terminal: true,
        }
    }

    #[inline]
    pub fn is_draw(self) -> bool {
        self.is_terminal && self.winner.is_empty()
    }

    /// Score of the winner (+100 X, -100 O, 0 otherwise)
    #[inline]
    pub fn score(self) -> i32 {
        self.winner.score()
    }
}

/// Examine a state for a win or a draw.
///
/// Lines are scanned rows first, then columns, then the two diagonals; the
/// first uniform line decides the winner. With no winner, the game is a
/// draw once `turn_count` reaches `size²`.
pub fn evaluate_outcome(state: &State) -> Outcome {
    let board = state.board();
    let size = board.size();

    for line in win_lines(size) {
        if let Some(mark) = uniform_mark(board, &line) {
            return Outcome::win(mark);
        }
    }

    if state.turn_count() == size * size {
        return Outcome::DRAW;
    }

    Outcome::IN_PROGRESS
}
