//! Board representation for N x N tic-tac-toe

pub mod board;
pub mod state;


// Re-exports
pub use board::Board;
pub use state::State;

use std::fmt;

use crate::eval::Score;

/// Board size of the classic game (3x3)
pub const DEFAULT_SIZE: usize = 3;

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// First player, maximizes the score
    X,
    /// Second player, minimizes the score
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Score of a game won by this mark (`Empty` scores as a draw)
    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Mark::X => Score::X_WIN,
            Mark::O => Score::O_WIN,
            Mark::Empty => Score::DRAW,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Character used in board strings
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    /// Parse a board-string character (`.`, `-` and `_` are empty)
    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '-' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "nobody"),
            mark => write!(f, "{}", mark.symbol()),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    #[inline]
    pub fn is_valid(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

// Row-major, independent of board size
impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A mark placed at a cell.
///
/// The move generator hands out moves carrying `Mark::Empty`; the caller
/// tags them with the mover's mark via [`Move::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

impl Move {
    #[inline]
    pub fn new(row: usize, col: usize, mark: Mark) -> Self {
        Self { row, col, mark }
    }

    #[inline]
    pub fn at(pos: Pos, mark: Mark) -> Self {
        Self::new(pos.row, pos.col, mark)
    }

    /// Same cell, different mark
    #[inline]
    #[must_use]
    pub fn with_mark(self, mark: Mark) -> Self {
        Self { mark, ..self }
    }

    #[inline]
    pub fn pos(self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.mark.symbol(), self.row, self.col)
    }
}
