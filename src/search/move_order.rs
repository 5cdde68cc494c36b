//! Move ordering utilities for search.

use std::cmp::Reverse;

use crate::board::{Board, MoveCandidate};

/// Ordering key: value of the piece on the destination plus the value of
/// the promotion piece.
///
/// En passant lands on an empty square and so scores like a quiet move.
#[must_use]
pub fn order_score(board: &Board, mv: MoveCandidate) -> i32 {
    let captured = board.get_piece(mv.to).map_or(0, |p| p.kind.value());
    let promoted = mv.promotion.map_or(0, |kind| kind.value());
    captured + promoted
}

/// Sort highest score first. Equal scores keep their generation order.
pub fn order_moves(board: &Board, moves: &mut [MoveCandidate]) {
    moves.sort_by_key(|&mv| Reverse(order_score(board, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Square};
    use crate::game::GameState;

    #[test]
    fn test_captures_first_and_stable() {
        let mut game = GameState::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            game.play(from, to).unwrap();
        }
        let mut moves = game.get_all_legal_moves(game.current_player()).unwrap();
        let quiet_before: Vec<_> = moves
            .iter()
            .copied()
            .filter(|&m| order_score(game.board(), m) == 0)
            .collect();

        order_moves(game.board(), &mut moves);

        assert_eq!(moves[0].from, Square(3, 4));
        assert_eq!(moves[0].to, Square(4, 3));
        assert_eq!(&moves[1..], &quiet_before[..]);
    }

    #[test]
    fn test_promotion_value_counts() {
        let board = Board::new();
        let queen = MoveCandidate::with_promotion(Square(6, 0), Square(7, 1), PieceKind::Queen);
        let knight = MoveCandidate::with_promotion(Square(6, 0), Square(7, 1), PieceKind::Knight);
        assert_eq!(order_score(&board, queen), 320 + 900);
        assert_eq!(order_score(&board, knight), 320 + 320);
    }
}
