//! Property-based tests using proptest.

use crate::board::{Color, MoveCandidate, PieceKind, Square};
use crate::game::GameState;
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves, calling `check` with the position
/// before and after each one.
fn random_playout<F>(seed: u64, plies: usize, mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&GameState, &GameState, MoveCandidate) -> Result<(), TestCaseError>,
{
    let mut game = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..plies {
        let moves = game.get_all_legal_moves(game.current_player()).unwrap();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let before = game.clone();
        game.play_move(mv).unwrap();
        check(&before, &game, mv)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: make_move followed by unmake_move restores the board exactly
    #[test]
    fn prop_make_unmake_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |before, _, _| {
            let mut scratch = before.clone();
            for mv in before.get_all_legal_moves(before.current_player()).unwrap() {
                let info = scratch.make_move(mv.from, mv.to, mv.promotion).unwrap();
                scratch.unmake_move(&info);
                prop_assert_eq!(scratch.board(), before.board());
            }
            Ok(())
        })?;
    }

    /// Property: no accepted move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |before, after, _| {
            prop_assert!(!after.is_in_check(before.current_player()).unwrap());
            Ok(())
        })?;
    }

    /// Property: each color always has exactly one king
    #[test]
    fn prop_one_king_per_color(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |_, after, _| {
            for color in Color::BOTH {
                prop_assert_eq!(after.board().king_count(color), 1);
            }
            Ok(())
        })?;
    }

    /// Property: the en-passant target exists only right after a double push
    #[test]
    fn prop_en_passant_target_lifetime(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |before, after, mv| {
            let moved = before.board().get_piece(mv.from).unwrap();
            let double_push = moved.kind == PieceKind::Pawn
                && mv.from.rank().abs_diff(mv.to.rank()) == 2;
            let expected = double_push
                .then(|| Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()));
            prop_assert_eq!(after.en_passant_target(), expected);
            Ok(())
        })?;
    }

    /// Property: castling rights are only ever removed
    #[test]
    fn prop_castling_rights_monotonic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |before, after, _| {
            prop_assert!(after.castling_rights().is_subset_of(before.castling_rights()));
            Ok(())
        })?;
    }

    /// Property: history grows by one and the turn flips on every move
    #[test]
    fn prop_history_and_turn(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |before, after, mv| {
            prop_assert_eq!(after.history().len(), before.history().len() + 1);
            prop_assert_eq!(after.current_player(), before.current_player().opponent());
            let record = after.history().last().unwrap();
            prop_assert_eq!(record.from, mv.from);
            prop_assert_eq!(record.to, mv.to);
            Ok(())
        })?;
    }
}
