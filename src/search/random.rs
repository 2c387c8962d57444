//! Random move agent

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Mark, Move, State};
use crate::rules::legal_moves;

/// Uniformly random legal move for `player`, or `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(state: &State, player: Mark, rng: &mut R) -> Option<Move> {
    legal_moves(state)
        .choose(rng)
        .map(|mv| mv.with_mark(player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_move_is_legal() {
        let state: State = "XO./.X./...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let mv = random_move(&state, Mark::O, &mut rng).unwrap();
            assert_eq!(mv.mark, Mark::O);
            assert!(state.board().is_empty(mv.pos()));
        }
    }

    #[test]
    fn test_random_move_covers_all_cells() {
        let state = State::new(3);
        let mut rng = StdRng::seed_from_u64(9);
        let seen: HashSet<_> = (0..500)
            .filter_map(|_| random_move(&state, Mark::X, &mut rng))
            .map(|mv| mv.pos())
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_random_move_full_board() {
        let state: State = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_move(&state, Mark::O, &mut rng), None);
    }
}
