//! Immutable N x N grid of marks

use std::fmt;

use super::{Mark, Pos, DEFAULT_SIZE};

/// Game board.
///
/// Cells are stored row-major. A `Board` is never changed in place: placing a
/// mark returns a new board and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Build a board from row-major cells. `cells.len()` must be `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Mark>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get mark at position (`None` when out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        if pos.is_valid(self.size) {
            Some(self.cells[pos.to_index(self.size)])
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Copy of this board with `mark` at `pos`.
    ///
    /// No validation here; `rules::apply_move` is the checked entry point.
    #[inline]
    #[must_use]
    pub(crate) fn with_mark(&self, pos: Pos, mark: Mark) -> Self {
        let mut cells = self.cells.clone();
        cells[pos.to_index(self.size)] = mark;
        Self {
            size: self.size,
            cells,
        }
    }

    /// All cells, row-major
    #[inline]
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterate `(pos, mark)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &mark)| (Pos::from_index(idx, size), mark))
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}
