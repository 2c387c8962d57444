//! Move generation and state transition

use tracing::{instrument, trace};

use crate::board::{Mark, Move, State};
use crate::error::InvalidMoveError;

/// Every empty cell as a candidate move, row-major.
///
/// Moves carry `Mark::Empty`; the caller assigns the mover's mark. The
/// result is empty exactly when the board is full.
pub fn legal_moves(state: &State) -> Vec<Move> {
    state
        .board()
        .iter()
        .filter(|(_, mark)| mark.is_empty())
        .map(|(pos, _)| Move::at(pos, Mark::Empty))
        .collect()
}

/// Apply `mv` and return the successor state.
///
/// # Errors
///
/// - [`InvalidMoveError::OutOfBounds`] if the row or column is not on the board
/// - [`InvalidMoveError::Occupied`] if the target cell already holds a mark
/// - [`InvalidMoveError::NoMark`] if the move carries `Mark::Empty`
///
/// # Example
///
/// ```
/// use tictactoe::{apply_move, Mark, Move, State};
///
/// let start = State::new(3);
/// let next = apply_move(&start, Move::new(1, 1, Mark::X)).unwrap();
/// assert_eq!(next.turn_count(), 1);
/// assert_eq!(start.turn_count(), 0);
/// assert!(apply_move(&next, Move::new(1, 1, Mark::O)).is_err());
/// ```
#[instrument(level = "trace", skip(state), fields(turns = state.turn_count()))]
pub fn apply_move(state: &State, mv: Move) -> Result<State, InvalidMoveError> {
    let size = state.size();
    let pos = mv.pos();

    let occupant = state
        .board()
        .get(pos)
        .ok_or(InvalidMoveError::OutOfBounds {
            row: mv.row,
            col: mv.col,
            size,
        })?;

    if !occupant.is_empty() {
        return Err(InvalidMoveError::Occupied {
            row: mv.row,
            col: mv.col,
            occupant,
        });
    }

    if mv.mark.is_empty() {
        return Err(InvalidMoveError::NoMark {
            row: mv.row,
            col: mv.col,
        });
    }

    let next = state.place(pos, mv.mark);
    trace!(%mv, turns = next.turn_count(), "move applied");
    Ok(next)
}
