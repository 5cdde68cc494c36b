//! Attack set and square-attack detection tests.

use super::{board_from, sorted, squares};
use crate::board::{Board, Color, Square};

#[test]
fn test_pawn_attacks_diagonals_only() {
    let board = board_from("4k3/8/8/8/8/8/3P4/4K3");
    assert_eq!(
        sorted(board.attack_squares("d2".parse().unwrap())),
        squares(&["c3", "e3"])
    );
}

#[test]
fn test_edge_pawn_attacks_one_square() {
    let board = board_from("4k3/p7/8/8/8/8/8/4K3");
    assert_eq!(
        board.attack_squares("a7".parse().unwrap()),
        squares(&["b6"])
    );
}

#[test]
fn test_ray_includes_first_blocker_of_either_color() {
    let board = board_from("4k3/8/8/8/R2N4/8/8/4K3");
    let attacked = board.attack_squares("a4".parse().unwrap());
    assert!(attacked.contains(&"d4".parse().unwrap()));
    assert!(!attacked.contains(&"e4".parse().unwrap()));
}

#[test]
fn test_empty_square_attacks_nothing() {
    assert!(Board::new().attack_squares(Square(3, 3)).is_empty());
}

#[test]
fn test_square_attacked() {
    let board = Board::new();
    assert!(board.is_square_attacked("f3".parse().unwrap(), Color::White));
    assert!(!board.is_square_attacked("e4".parse().unwrap(), Color::White));
    assert!(board.is_square_attacked("f6".parse().unwrap(), Color::Black));
}

#[test]
fn test_king_attacked() {
    let board = board_from("4k3/8/8/8/8/8/8/4K2r");
    assert_eq!(board.king_attacked(Color::White), Ok(true));
    assert_eq!(board.king_attacked(Color::Black), Ok(false));

    let kingless = board_from("8/8/8/8/8/8/8/4K3");
    assert!(kingless.king_attacked(Color::Black).is_err());
}
