use log::trace;

use super::GameState;
use crate::board::{Board, CastleSide, Color, Move, MoveError, Piece, PieceKind, Square};

/// Everything needed to reverse one board mutation.
///
/// Each variant carries exactly the squares and pieces its undo touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnmakeInfo {
    Simple {
        from: Square,
        to: Square,
        moved: Piece,
    },
    Capture {
        from: Square,
        to: Square,
        moved: Piece,
        captured: Piece,
    },
    EnPassantCapture {
        from: Square,
        to: Square,
        moved: Piece,
        captured: Piece,
        captured_square: Square,
    },
    Castling {
        king_from: Square,
        king_to: Square,
        king: Piece,
        rook_from: Square,
        rook_to: Square,
        rook: Piece,
    },
    Promotion {
        from: Square,
        to: Square,
        pawn: Piece,
        promoted: PieceKind,
        captured: Option<Piece>,
    },
}

impl UnmakeInfo {
    /// The captured piece and the square it was removed from
    #[must_use]
    pub fn captured(&self) -> Option<(Square, Piece)> {
        match *self {
            UnmakeInfo::Simple { .. } | UnmakeInfo::Castling { .. } => None,
            UnmakeInfo::Capture { to, captured, .. } => Some((to, captured)),
            UnmakeInfo::EnPassantCapture {
                captured,
                captured_square,
                ..
            } => Some((captured_square, captured)),
            UnmakeInfo::Promotion { to, captured, .. } => captured.map(|p| (to, p)),
        }
    }

    /// History record for this change
    #[must_use]
    pub fn record(&self) -> Move {
        let captured = self.captured().map(|(_, p)| p);
        match *self {
            UnmakeInfo::Simple { from, to, moved }
            | UnmakeInfo::Capture {
                from, to, moved, ..
            } => Move {
                from,
                to,
                piece: moved,
                captured,
                promotion: None,
                is_en_passant: false,
                is_castling: false,
            },
            UnmakeInfo::EnPassantCapture {
                from, to, moved, ..
            } => Move {
                from,
                to,
                piece: moved,
                captured,
                promotion: None,
                is_en_passant: true,
                is_castling: false,
            },
            UnmakeInfo::Castling {
                king_from,
                king_to,
                king,
                ..
            } => Move {
                from: king_from,
                to: king_to,
                piece: king,
                captured: None,
                promotion: None,
                is_en_passant: false,
                is_castling: true,
            },
            UnmakeInfo::Promotion {
                from,
                to,
                pawn,
                promoted,
                ..
            } => Move {
                from,
                to,
                piece: pawn,
                captured,
                promotion: Some(promoted),
                is_en_passant: false,
                is_castling: false,
            },
        }
    }
}

impl GameState {
    /// Apply a move to the board, detecting en passant, castling and
    /// promotion. Bookkeeping (turn, rights, en-passant target, history) is
    /// left to the caller.
    ///
    /// Nothing is mutated when an error is returned.
    pub(crate) fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<UnmakeInfo, MoveError> {
        self.board
            .make_change(from, to, promotion, self.en_passant_target)
    }

    /// Reverse a change produced by `make_move`
    pub(crate) fn unmake_move(&mut self, info: &UnmakeInfo) {
        self.board.unmake_change(info);
    }
}

impl Board {
    /// Board-level half of `GameState::make_move`; `en_passant_target` is the
    /// square a pawn may capture onto this move, if any.
    pub(crate) fn make_change(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        en_passant_target: Option<Square>,
    ) -> Result<UnmakeInfo, MoveError> {
        let moved = self
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        let target = self.get_piece(to);

        let info = match moved.kind {
            PieceKind::Pawn
                if from.file() != to.file()
                    && target.is_none()
                    && en_passant_target == Some(to) =>
            {
                let captured_square = Square(from.rank(), to.file());
                let captured = self
                    .get_piece(captured_square)
                    .ok_or(MoveError::IllegalDestination { from, to })?;
                UnmakeInfo::EnPassantCapture {
                    from,
                    to,
                    moved,
                    captured,
                    captured_square,
                }
            }
            PieceKind::Pawn if to.rank() == moved.color.pawn_promotion_rank() => {
                UnmakeInfo::Promotion {
                    from,
                    to,
                    pawn: moved,
                    promoted: promotion.unwrap_or(PieceKind::Queen),
                    captured: target,
                }
            }
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
                self.castling_info(moved, from, to)?
            }
            _ => match target {
                Some(captured) => UnmakeInfo::Capture {
                    from,
                    to,
                    moved,
                    captured,
                },
                None => UnmakeInfo::Simple { from, to, moved },
            },
        };

        self.apply_change(&info);
        trace!("make {:?}", info);
        Ok(info)
    }

    fn castling_info(
        &self,
        king: Piece,
        king_from: Square,
        king_to: Square,
    ) -> Result<UnmakeInfo, MoveError> {
        let side = CastleSide::from_king_target(king_to.file());
        let rank = king_from.rank();
        let rook_from = Square(rank, side.rook_file());
        let rook_to = Square(rank, side.rook_target_file());

        let rook = Piece::new(PieceKind::Rook, king.color);
        if self.get_piece(rook_from) != Some(rook) {
            return Err(MoveError::IllegalCastlingRookState { square: rook_from });
        }
        if !self.is_empty(rook_to) || !self.is_empty(king_to) {
            return Err(MoveError::IllegalCastlingRookState { square: rook_to });
        }

        Ok(UnmakeInfo::Castling {
            king_from,
            king_to,
            king,
            rook_from,
            rook_to,
            rook,
        })
    }

    fn apply_change(&mut self, info: &UnmakeInfo) {
        match *info {
            UnmakeInfo::Simple { from, to, moved }
            | UnmakeInfo::Capture {
                from, to, moved, ..
            } => {
                self.set_piece(from, None);
                self.set_piece(to, Some(moved));
            }
            UnmakeInfo::EnPassantCapture {
                from,
                to,
                moved,
                captured_square,
                ..
            } => {
                self.set_piece(from, None);
                self.set_piece(captured_square, None);
                self.set_piece(to, Some(moved));
            }
            UnmakeInfo::Castling {
                king_from,
                king_to,
                king,
                rook_from,
                rook_to,
                rook,
            } => {
                self.set_piece(king_from, None);
                self.set_piece(rook_from, None);
                self.set_piece(king_to, Some(king));
                self.set_piece(rook_to, Some(rook));
            }
            UnmakeInfo::Promotion {
                from,
                to,
                pawn,
                promoted,
                ..
            } => {
                self.set_piece(from, None);
                self.set_piece(to, Some(Piece::new(promoted, pawn.color)));
            }
        }
    }

    pub(crate) fn unmake_change(&mut self, info: &UnmakeInfo) {
        match *info {
            UnmakeInfo::Simple { from, to, moved } => {
                self.set_piece(to, None);
                self.set_piece(from, Some(moved));
            }
            UnmakeInfo::Capture {
                from,
                to,
                moved,
                captured,
            } => {
                self.set_piece(to, Some(captured));
                self.set_piece(from, Some(moved));
            }
            UnmakeInfo::EnPassantCapture {
                from,
                to,
                moved,
                captured,
                captured_square,
            } => {
                self.set_piece(to, None);
                self.set_piece(captured_square, Some(captured));
                self.set_piece(from, Some(moved));
            }
            UnmakeInfo::Castling {
                king_from,
                king_to,
                king,
                rook_from,
                rook_to,
                rook,
            } => {
                self.set_piece(king_to, None);
                self.set_piece(rook_to, None);
                self.set_piece(king_from, Some(king));
                self.set_piece(rook_from, Some(rook));
            }
            UnmakeInfo::Promotion {
                from,
                to,
                pawn,
                captured,
                ..
            } => {
                self.set_piece(to, captured);
                self.set_piece(from, Some(pawn));
            }
        }
        trace!("unmake {:?}", info);
    }
}

/// Square of the pawn removed by an en-passant capture onto `target`
#[must_use]
pub(crate) fn en_passant_victim(target: Square, capturer: Color) -> Option<Square> {
    target.offset(-capturer.pawn_direction(), 0)
}
