//! Whole-game behaviour through the public API

use rand::rngs::StdRng;
use rand::SeedableRng;

use tictactoe::{
    apply_move, evaluate_outcome, legal_moves, random_move, Agent, Engine, EngineConfig, Mark,
    Move, Outcome, Searcher, State,
};

#[test]
fn top_row_win_scenario() {
    let mut state = State::new(3);
    for col in 0..3 {
        state = apply_move(&state, Move::new(0, col, Mark::X)).unwrap();
    }
    assert_eq!(
        evaluate_outcome(&state),
        Outcome {
            winner: Mark::X,
            is_terminal: true
        }
    );
}

#[test]
fn alternating_fill_draw_scenario() {
    // X O X
    // X X O
    // O X O
    let cells = [(0, 0), (0, 1), (0, 2), (1, 2), (1, 0), (2, 0), (1, 1), (2, 2), (2, 1)];
    let mut state = State::new(3);
    let mut player = Mark::X;
    for (row, col) in cells {
        state = apply_move(&state, Move::new(row, col, player)).unwrap();
        player = player.opponent();
    }
    let outcome = evaluate_outcome(&state);
    assert!(outcome.is_terminal);
    assert_eq!(outcome.winner, Mark::Empty);
}

#[test]
fn legal_moves_shrink_by_one_per_turn() {
    let mut rng = StdRng::seed_from_u64(17);
    for size in 1..=5 {
        let mut state = State::new(size);
        let mut player = Mark::X;
        while !evaluate_outcome(&state).is_terminal {
            assert_eq!(legal_moves(&state).len(), size * size - state.turn_count());
            let mv = random_move(&state, player, &mut rng).unwrap();
            let next = apply_move(&state, mv).unwrap();
            assert_eq!(next.turn_count(), state.turn_count() + 1);
            state = next;
            player = player.opponent();
        }
        let outcome = evaluate_outcome(&state);
        let full = state.turn_count() == size * size;
        if outcome.winner == Mark::Empty {
            assert!(full, "a draw requires a full board");
        }
    }
}

#[test]
fn perfect_play_from_empty_board_is_a_draw() {
    let mut searcher = Searcher::seeded(0);
    let result = searcher.search(&State::new(3), 9, Mark::X);
    assert_eq!(result.score, 0);

    // The chosen opening must not lose against any reply
    let opening = result.best_move.unwrap();
    let after = apply_move(&State::new(3), opening).unwrap();
    for reply in legal_moves(&after) {
        let next = apply_move(&after, reply.with_mark(Mark::O)).unwrap();
        let value = searcher.search(&next, 9, Mark::X).score;
        assert!(value >= 0, "O reply {reply:?} forces a loss");
    }
}

#[test]
fn minimax_x_never_loses_to_random_o() {
    for seed in 0..3 {
        let config = EngineConfig::default()
            .with_agents(Agent::Minimax, Agent::Random)
            .with_seed(seed);
        let record = Engine::new(config).unwrap().play_game().unwrap();
        assert_ne!(record.outcome.winner, Mark::O, "seed {seed}");
    }
}

#[test]
fn minimax_o_never_loses_to_random_x() {
    for seed in 0..4 {
        let config = EngineConfig::default()
            .with_agents(Agent::Random, Agent::Minimax)
            .with_seed(seed);
        let record = Engine::new(config).unwrap().play_game().unwrap();
        assert_ne!(record.outcome.winner, Mark::X, "seed {seed}");
    }
}

#[test]
fn shallow_search_still_plays_legal_games_on_larger_boards() {
    let config = EngineConfig::default()
        .with_size(4)
        .with_depth(1)
        .with_seed(8);
    let record = Engine::new(config).unwrap().play_game().unwrap();
    assert!(record.outcome.is_terminal);
    assert_eq!(record.final_state.turn_count(), record.moves.len());
    assert_eq!(record.final_state.board().mark_count(), record.moves.len());
}

#[test]
fn rejected_move_leaves_state_usable() {
    let state: State = "X../.O./...".parse().unwrap();
    let before = state.clone();
    assert!(apply_move(&state, Move::new(0, 0, Mark::X)).is_err());
    assert!(apply_move(&state, Move::new(5, 5, Mark::X)).is_err());
    assert_eq!(state, before);
    let next = apply_move(&state, Move::new(2, 2, Mark::X)).unwrap();
    assert_eq!(next.turn_count(), 3);
}
