//! Special-move generation, the king-safety filter and game status.

use super::make_unmake::en_passant_victim;
use super::{GameState, GameStatus};
use crate::board::{
    king_origin, Board, CastleSide, Color, MoveCandidate, MoveError, Piece, PieceKind, Square,
    PROMOTION_PIECES,
};

impl GameState {
    /// True if the king of `color` is attacked by the opponent
    pub fn is_in_check(&self, color: Color) -> Result<bool, MoveError> {
        self.board.king_attacked(color)
    }

    /// Status of `color` as if it were the side to move
    pub fn get_status_for(&self, color: Color) -> Result<GameStatus, MoveError> {
        let in_check = self.is_in_check(color)?;
        self.status_given_check(color, in_check)
    }

    pub(crate) fn status_given_check(
        &self,
        color: Color,
        in_check: bool,
    ) -> Result<GameStatus, MoveError> {
        let has_moves = self.has_legal_move(color)?;
        Ok(match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        })
    }

    /// Pseudo-legal targets of the piece on `from` plus its en-passant and
    /// castling destinations. King safety is not checked here.
    pub(crate) fn candidate_targets(&self, from: Square) -> Result<Vec<Square>, MoveError> {
        let Some(piece) = self.board.get_piece(from) else {
            return Ok(Vec::new());
        };

        let mut targets = self.board.pseudo_legal_targets(from);
        match piece.kind {
            PieceKind::Pawn => targets.extend(self.en_passant_target_for(from, piece)),
            PieceKind::King if from == king_origin(piece.color) => {
                targets.extend(self.castling_targets(piece.color)?);
            }
            _ => {}
        }
        Ok(targets)
    }

    fn en_passant_target_for(&self, from: Square, pawn: Piece) -> Option<Square> {
        let target = self.en_passant_target?;
        let dir = pawn.color.pawn_direction();
        if from.offset(dir, 0)?.rank() != target.rank() || from.file().abs_diff(target.file()) != 1
        {
            return None;
        }
        let victim = en_passant_victim(target, pawn.color)?;
        let expected = Piece::new(PieceKind::Pawn, pawn.color.opponent());
        (self.board.get_piece(victim) == Some(expected) && self.board.is_empty(target))
            .then_some(target)
    }

    /// Castling destinations the king of `color` is entitled to right now
    fn castling_targets(&self, color: Color) -> Result<Vec<Square>, MoveError> {
        let mut targets = Vec::new();
        let home = king_origin(color);
        if self.board.get_piece(home) != Some(Piece::new(PieceKind::King, color))
            || self.is_in_check(color)?
        {
            return Ok(targets);
        }

        let rank = color.back_rank();
        let enemy = color.opponent();
        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            if self.board.get_piece(side.rook_origin(color))
                != Some(Piece::new(PieceKind::Rook, color))
            {
                continue;
            }

            let between: &[usize] = match side {
                CastleSide::Kingside => &[5, 6],
                CastleSide::Queenside => &[1, 2, 3],
            };
            if !between.iter().all(|&f| self.board.is_empty(Square(rank, f))) {
                continue;
            }

            let crossed = [
                Square(rank, side.rook_target_file()),
                Square(rank, side.king_target_file()),
            ];
            if crossed
                .iter()
                .any(|&sq| self.board.is_square_attacked(sq, enemy))
            {
                continue;
            }

            targets.push(Square(rank, side.king_target_file()));
        }
        Ok(targets)
    }

    /// Tentatively apply `candidate` on `scratch`, test the mover's king,
    /// and undo
    fn leaves_king_safe(
        &self,
        scratch: &mut Board,
        color: Color,
        candidate: MoveCandidate,
    ) -> Result<bool, MoveError> {
        let info = scratch.make_change(
            candidate.from,
            candidate.to,
            candidate.promotion,
            self.en_passant_target,
        )?;
        let in_check = scratch.king_attacked(color);
        scratch.unmake_change(&info);
        Ok(!in_check?)
    }

    /// Visit every legal move of `color` in generation order until `visit`
    /// returns false
    fn for_each_legal_move<F>(&self, color: Color, mut visit: F) -> Result<(), MoveError>
    where
        F: FnMut(MoveCandidate) -> bool,
    {
        let mut scratch = self.board.clone();
        for from in self.board.positions_of(color) {
            let Some(piece) = self.board.get_piece(from) else {
                continue;
            };
            for to in self.candidate_targets(from)? {
                for candidate in expand_promotions(from, to, piece) {
                    if self.leaves_king_safe(&mut scratch, color, candidate)? && !visit(candidate)
                    {
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }

    /// Every legal move of `color` as (from, to, promotion) triples.
    ///
    /// Order is deterministic: source squares a1..h8, then each piece's
    /// pseudo-legal targets, en passant, castling. A promotion expands into
    /// queen, rook, bishop and knight, each checked separately.
    pub fn get_all_legal_moves(&self, color: Color) -> Result<Vec<MoveCandidate>, MoveError> {
        let mut moves = Vec::new();
        self.for_each_legal_move(color, |candidate| {
            moves.push(candidate);
            true
        })?;
        Ok(moves)
    }

    /// True if `color` has at least one legal move
    pub fn has_legal_move(&self, color: Color) -> Result<bool, MoveError> {
        let mut found = false;
        self.for_each_legal_move(color, |_| {
            found = true;
            false
        })?;
        Ok(found)
    }
}

/// A pawn reaching the last rank yields one candidate per promotion piece
fn expand_promotions(from: Square, to: Square, piece: Piece) -> Vec<MoveCandidate> {
    if piece.kind == PieceKind::Pawn && to.rank() == piece.color.pawn_promotion_rank() {
        PROMOTION_PIECES
            .iter()
            .map(|&kind| MoveCandidate::with_promotion(from, to, kind))
            .collect()
    } else {
        vec![MoveCandidate::new(from, to)]
    }
}
