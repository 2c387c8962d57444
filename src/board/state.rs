//! Game state: a board plus the number of moves played on it

use std::fmt;
use std::str::FromStr;

use super::{Board, Mark, Pos};
use crate::error::Error;

/// Snapshot of a game.
///
/// `turn_count` always equals the number of marks on the board. States are
/// values: a transition produces a new `State` and the old one stays valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    turn_count: usize,
}

impl State {
    /// Empty `size` x `size` board with no moves played
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn_count: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Mark of the side to move, assuming X opened and turns alternated
    #[inline]
    pub fn to_move(&self) -> Mark {
        if self.turn_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Successor state with `mark` at `pos`. Caller guarantees the cell is
    /// on the board and empty and that `mark` is a player mark.
    #[inline]
    pub(crate) fn place(&self, pos: Pos, mark: Mark) -> Self {
        debug_assert!(self.board.is_empty(pos));
        debug_assert!(!mark.is_empty());
        Self {
            board: self.board.with_mark(pos, mark),
            turn_count: self.turn_count + 1,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

impl FromStr for State {
    type Err = Error;

    /// Parse rows of `X`, `O` and `.` separated by `/` or newlines,
    /// e.g. `"XO./.X./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidBoardLength {
                expected: 1,
                got: 0,
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in &rows {
            let len = row.chars().count();
            if len != size {
                return Err(Error::InvalidBoardLength {
                    expected: size,
                    got: len,
                    context: s.to_string(),
                });
            }
            for character in row.chars() {
                let mark = Mark::from_symbol(character).ok_or_else(|| {
                    Error::InvalidCellCharacter {
                        character,
                        position: cells.len(),
                        context: s.to_string(),
                    }
                })?;
                cells.push(mark);
            }
        }

        let board = Board::from_cells(size, cells);
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(Self {
            turn_count: x_count + o_count,
            board,
        })
    }
}
