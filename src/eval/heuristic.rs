//! Heuristic move choice at the search horizon
//!
//! Called when the search runs out of depth on a game that is still going.
//! Only immediate results are recognised:
//! - A candidate that ends the game (win or draw) is returned at once with
//!   its true score
//! - Every other candidate gets a uniform random score in `[-100, 100]`
//!
//! Candidates are the empty cells of lines that can still be completed by
//! someone. Positional strength beyond that is not measured, so the choice
//! between quiet moves is effectively a coin toss.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::trace;

use crate::board::{Mark, Move, Pos, State};
use crate::rules::{evaluate_outcome, is_live, legal_moves, win_lines};

use super::Score;

/// A move with the score it was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl ScoredMove {
    #[inline]
    pub fn new(mv: Move, score: i32) -> Self {
        Self { mv, score }
    }
}

/// Empty cells lying on at least one live line, row-major, tagged with
/// `player`'s mark.
// TODO: tell blocking moves (cells on lines only the opponent can still
// complete) apart from attacking ones instead of tagging every cell alike.
pub fn candidate_moves(state: &State, player: Mark) -> Vec<Move> {
    let board = state.board();
    let mut cells = BTreeSet::new();

    for line in win_lines(board.size()) {
        if !is_live(board, &line) {
            continue;
        }
        cells.extend(line.into_iter().filter(|&pos| board.is_empty(pos)));
    }

    cells
        .into_iter()
        .map(|pos: Pos| Move::at(pos, player))
        .collect()
}

/// Pick a move for `player` without looking further ahead.
///
/// X keeps the highest score and O the lowest; on equal scores the earlier
/// candidate stays. With no live line left the first legal move is returned
/// with a draw score. Returns `None` only on a full board.
pub fn heuristic<R: Rng + ?Sized>(state: &State, player: Mark, rng: &mut R) -> Option<ScoredMove> {
    debug_assert!(!player.is_empty(), "heuristic needs a player mark");

    let candidates = candidate_moves(state, player);
    if candidates.is_empty() {
        trace!("no live lines, falling back to first legal move");
        return legal_moves(state)
            .first()
            .map(|mv| ScoredMove::new(mv.with_mark(player), Score::DRAW));
    }

    let mut best: Option<ScoredMove> = None;
    for mv in candidates {
        let outcome = evaluate_outcome(&state.place(mv.pos(), mv.mark));
        if outcome.is_terminal {
            trace!(%mv, score = outcome.score(), "candidate ends the game");
            return Some(ScoredMove::new(mv, outcome.score()));
        }

        let score = rng.gen_range(Score::O_WIN..=Score::X_WIN);
        trace!(%mv, score, "candidate scored at random");

        let improves = match best {
            None => true,
            Some(current) if player == Mark::X => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(ScoredMove::new(mv, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_candidates_empty_board_all_cells() {
        let moves = candidate_moves(&State::new(3), Mark::O);
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| m.mark == Mark::O));
        assert_eq!(moves[0].pos(), Pos::new(0, 0));
        assert_eq!(moves[8].pos(), Pos::new(2, 2));
    }

    #[test]
    fn test_candidates_skip_dead_lines() {
        // Every line through the last empty cell (1, 2) is dead
        //   X O X
        //   O X .
        //   O X O
        // Row 1: O X . dead; column 2: X . O dead; (1, 2) is on no diagonal.
        let state: State = "XOX/OX./OXO".parse().unwrap();
        assert!(candidate_moves(&state, Mark::X).is_empty());
    }

    #[test]
    fn test_candidates_row_major_and_deduplicated() {
        let state: State = "XO./.../...".parse().unwrap();
        let moves = candidate_moves(&state, Mark::X);
        let mut sorted = moves.clone();
        sorted.sort_by_key(|m| m.pos());
        sorted.dedup();
        assert_eq!(moves, sorted);
        // (0, 2) is on the dead top row but also on its column and the anti-diagonal
        assert!(moves.contains(&Move::new(0, 2, Mark::X)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_fallback_to_first_legal_move() {
        let state: State = "XOX/OX./OXO".parse().unwrap();
        let result = heuristic(&state, Mark::X, &mut rng()).unwrap();
        // Placing X at (1, 2) fills the board without a line: a draw
        assert_eq!(result.mv, Move::new(1, 2, Mark::X));
        assert_eq!(result.score, Score::DRAW);
    }

    #[test]
    fn test_immediate_win_x() {
        let state: State = "XX./OO./...".parse().unwrap();
        let result = heuristic(&state, Mark::X, &mut rng()).unwrap();
        assert_eq!(result.mv, Move::new(0, 2, Mark::X));
        assert_eq!(result.score, Score::X_WIN);
    }

    #[test]
    fn test_immediate_win_o() {
        let state: State = "XX./OO./X..".parse().unwrap();
        let result = heuristic(&state, Mark::O, &mut rng()).unwrap();
        assert_eq!(result.mv, Move::new(1, 2, Mark::O));
        assert_eq!(result.score, Score::O_WIN);
    }

    #[test]
    fn test_scores_within_range() {
        let state = State::new(3);
        let mut rng = rng();
        for player in [Mark::X, Mark::O] {
            for _ in 0..50 {
                let result = heuristic(&state, player, &mut rng).unwrap();
                assert!((Score::O_WIN..=Score::X_WIN).contains(&result.score));
                assert_eq!(result.mv.mark, player);
                assert!(state.board().is_empty(result.mv.pos()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let state: State = "X../.O./...".parse().unwrap();
        let a = heuristic(&state, Mark::X, &mut StdRng::seed_from_u64(42));
        let b = heuristic(&state, Mark::X, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_x_keeps_max_and_o_keeps_min() {
        // No candidate ends the game on an empty 4x4 board, so every one
        // draws exactly one random score in candidate order
        let state = State::new(4);
        for seed in 0..8 {
            let mut replay = StdRng::seed_from_u64(seed);
            let candidates = candidate_moves(&state, Mark::X);
            let scores: Vec<i32> = candidates
                .iter()
                .map(|_| replay.gen_range(Score::O_WIN..=Score::X_WIN))
                .collect();

            let max = *scores.iter().max().unwrap();
            let first_max = scores.iter().position(|&s| s == max).unwrap();
            let result = heuristic(&state, Mark::X, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(result.mv, candidates[first_max]);
            assert_eq!(result.score, max);

            let min = *scores.iter().min().unwrap();
            let first_min = scores.iter().position(|&s| s == min).unwrap();
            let result = heuristic(&state, Mark::O, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(result.mv, candidates[first_min].with_mark(Mark::O));
            assert_eq!(result.score, min);
        }
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // A constant source scores every candidate -100
        let state: State = "X../.O./...".parse().unwrap();
        for player in [Mark::X, Mark::O] {
            let mut rng = StepRng::new(0, 0);
            let result = heuristic(&state, player, &mut rng).unwrap();
            assert_eq!(result.mv, Move::new(0, 1, player));
            assert_eq!(result.score, Score::O_WIN);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let state: State = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(heuristic(&state, Mark::O, &mut rng()), None);
    }
}
