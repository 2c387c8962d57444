//! Winning line enumeration
//!
//! An N x N board has exactly `2N + 2` lines: N rows, N columns, the main
//! diagonal and the anti-diagonal, produced in that order.

use crate::board::{Board, Mark, Pos};

/// Cells of one row, column or diagonal
pub type Line = Vec<Pos>;

/// All lines of a `size` x `size` board: rows, columns, main diagonal,
/// anti-diagonal.
pub fn win_lines(size: usize) -> impl Iterator<Item = Line> {
    let rows = (0..size).map(move |r| (0..size).map(|c| Pos::new(r, c)).collect::<Line>());
    let cols = (0..size).map(move |c| (0..size).map(|r| Pos::new(r, c)).collect::<Line>());
    let main_diag = std::iter::once((0..size).map(|i| Pos::new(i, i)).collect::<Line>());
    let anti_diag = std::iter::once((0..size).map(|i| Pos::new(i, size - 1 - i)).collect::<Line>());

    rows.chain(cols).chain(main_diag).chain(anti_diag)
}

/// Mark shared by every cell of `line`, if the line is uniform and non-empty.
pub fn uniform_mark(board: &Board, line: &[Pos]) -> Option<Mark> {
    let (&first, rest) = line.split_first()?;
    let mark = board.get(first)?;
    if mark.is_empty() {
        return None;
    }
    rest.iter()
        .all(|&pos| board.get(pos) == Some(mark))
        .then_some(mark)
}

/// A line is live while it does not hold both players' marks; a line with
/// both can never be completed by either side.
pub fn is_live(board: &Board, line: &[Pos]) -> bool {
    let mut has_x = false;
    let mut has_o = false;
    for &pos in line {
        match board.get(pos) {
            Some(Mark::X) => has_x = true,
            Some(Mark::O) => has_o = true,
            _ => {}
        }
    }
    !(has_x && has_o)
}
