//! Material evaluation.

use crate::board::Board;

/// Material balance from White's point of view.
///
/// Sums the fixed piece values, positive for White and negative for Black.
/// Kings are included, so the two kings cancel in any legal position.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece.kind.value())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, PieceKind, Square};

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_sign_follows_color() {
        let mut board = Board::new();
        board.set_piece(Square(6, 3), None);
        assert_eq!(evaluate(&board), 100);

        board.set_piece(Square(0, 3), None);
        assert_eq!(evaluate(&board), 100 - 900);

        board.set_piece(Square(4, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(evaluate(&board), 100 - 900 - 320);
    }

    #[test]
    fn test_lone_kings() {
        assert_eq!(evaluate(&Board::empty()), 0);
        let mut board = Board::empty();
        board.set_piece(Square(0, 4), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(evaluate(&board), 20000);
    }
}
