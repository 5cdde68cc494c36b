//! Attack sets and square-attack detection.
//!
//! Unlike pseudo-legal targets, an attack set ignores who occupies the
//! attacked square: pawns attack diagonally only and sliders include the
//! first blocker of either color.

use super::attack_tables::{
    king_targets, knight_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::error::MoveError;
use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Squares threatened by the piece on `from`. Empty when `from` is empty.
    #[must_use]
    pub fn attack_squares(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.get_piece(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => {
                let dir = piece.color.pawn_direction();
                [-1, 1]
                    .iter()
                    .filter_map(|&df| from.offset(dir, df))
                    .collect()
            }
            PieceKind::Knight => knight_targets(from).to_vec(),
            PieceKind::King => king_targets(from).to_vec(),
            PieceKind::Rook => self.ray_attacks(from, &ROOK_DIRECTIONS),
            PieceKind::Bishop => self.ray_attacks(from, &BISHOP_DIRECTIONS),
            PieceKind::Queen => self.ray_attacks(from, &QUEEN_DIRECTIONS),
        }
    }

    fn ray_attacks(&self, from: Square, directions: &[(isize, isize)]) -> Vec<Square> {
        let mut attacked = Vec::new();
        for &(dr, df) in directions {
            let mut next = from.offset(dr, df);
            while let Some(sq) = next {
                attacked.push(sq);
                if !self.is_empty(sq) {
                    break;
                }
                next = sq.offset(dr, df);
            }
        }
        attacked
    }

    /// True if any piece of `by_color` attacks `target`
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by_color: Color) -> bool {
        self.pieces()
            .filter(|(_, p)| p.color == by_color)
            .any(|(sq, _)| self.attack_squares(sq).contains(&target))
    }

    /// True if the king of `color` is attacked by the other color
    pub fn king_attacked(&self, color: Color) -> Result<bool, MoveError> {
        let king = self.find_king(color)?;
        Ok(self.is_square_attacked(king, color.opponent()))
    }
}
