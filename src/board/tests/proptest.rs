//! Property-based tests using proptest.

use super::pseudo_legal_moves;
use crate::board::{Board, Color, PositionKey};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves.
fn random_game(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let side = board.turn();
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(&mv).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: apply followed by undo restores board and history exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_game(seed, num_moves);
        let before = board.clone();
        let side = board.turn();

        for mv in board.legal_moves(side) {
            board.apply_move(&mv).unwrap();
            prop_assert_eq!(board.history().len(), before.history().len() + 1);
            board.undo_move();
            prop_assert_eq!(&board, &before);
        }
    }

    /// Property: apply/undo is an identity for pseudo-legal moves of
    /// either side, including those that leave the mover in check
    #[test]
    fn prop_pseudo_legal_apply_undo(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_game(seed, num_moves);
        let before = board.clone();

        for color in Color::BOTH {
            for mv in pseudo_legal_moves(&board, color) {
                board.apply_move(&mv).unwrap();
                prop_assert_eq!(board.history().len(), before.history().len() + 1);
                prop_assert!(board.undo_move().is_some());
                prop_assert_eq!(&board, &before);
            }
        }
    }

    /// Property: decoding a key reproduces the grid
    #[test]
    fn prop_key_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_game(seed, num_moves);
        let key = board.hash();

        let rebuilt = Board::from_key(&key).unwrap();
        prop_assert_eq!(rebuilt.grid(), board.grid());
        prop_assert!(rebuilt.history().is_empty());

        let text = key.to_string();
        prop_assert_eq!(text.parse::<PositionKey>().unwrap(), key);
    }

    /// Property: undoing everything returns to the initial position
    #[test]
    fn prop_full_unwind(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = random_game(seed, num_moves);
        while board.undo_move().is_some() {}
        prop_assert_eq!(board, Board::new());
    }
}
