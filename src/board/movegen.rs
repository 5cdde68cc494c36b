//! Pseudo-legal target generation.
//!
//! Targets follow piece geometry and occupancy only. They never include
//! en passant or castling, and may leave the mover's king attacked.

use super::attack_tables::{
    king_targets, knight_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Squares the piece on `from` may move to by its basic geometry.
    ///
    /// Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.get_piece(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Rook => self.sliding_targets(from, piece.color, &ROOK_DIRECTIONS),
            PieceKind::Bishop => self.sliding_targets(from, piece.color, &BISHOP_DIRECTIONS),
            PieceKind::Queen => self.sliding_targets(from, piece.color, &QUEEN_DIRECTIONS),
            PieceKind::Knight => self.step_targets(knight_targets(from), piece.color),
            PieceKind::King => self.step_targets(king_targets(from), piece.color),
            PieceKind::Pawn => self.pawn_targets(from, piece.color),
        }
    }

    fn sliding_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(dr, df) in directions {
            let mut next = from.offset(dr, df);
            while let Some(sq) = next {
                if self.is_empty(sq) {
                    targets.push(sq);
                } else {
                    if self.is_enemy(sq, color) {
                        targets.push(sq);
                    }
                    break;
                }
                next = sq.offset(dr, df);
            }
        }
        targets
    }

    fn step_targets(&self, candidates: &[Square], color: Color) -> Vec<Square> {
        candidates
            .iter()
            .copied()
            .filter(|&sq| !self.is_ally(sq, color))
            .collect()
    }

    fn pawn_targets(&self, from: Square, color: Color) -> Vec<Square> {
        let mut targets = Vec::new();
        let dir = color.pawn_direction();

        if let Some(one_step) = from.offset(dir, 0) {
            if self.is_empty(one_step) {
                targets.push(one_step);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two_step) = from.offset(2 * dir, 0) {
                        if self.is_empty(two_step) {
                            targets.push(two_step);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(capture) = from.offset(dir, df) {
                if self.is_enemy(capture, color) {
                    targets.push(capture);
                }
            }
        }

        targets
    }
}
