use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board knows piece geometry but nothing about turn order, check,
/// castling rights or en passant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Some(Piece::new(*kind, Color::White)));
            board.set_piece(Square(7, file), Some(Piece::new(*kind, Color::Black)));
            board.set_piece(Square(1, file), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set_piece(Square(6, file), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        }
        board
    }

    /// Board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    /// Overwrite a square. No validation.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.0][sq.1] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get_piece(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_ally(&self, sq: Square, color: Color) -> bool {
        self.get_piece(sq).is_some_and(|p| p.color == color)
    }

    #[inline]
    #[must_use]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.get_piece(sq).is_some_and(|p| p.color != color)
    }

    /// All occupied squares with their pieces, in a1..h8 order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get_piece(sq).map(|p| (sq, p)))
    }

    /// Squares holding pieces of `color`, in a1..h8 order
    #[must_use]
    pub fn positions_of(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Number of kings of `color` on the board
    #[must_use]
    pub fn king_count(&self, color: Color) -> usize {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().filter(|(_, p)| *p == king).count()
    }

    /// Locate the king of `color`
    pub fn find_king(&self, color: Color) -> Result<Square, MoveError> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, p)| *p == king)
            .map(|(sq, _)| sq)
            .ok_or(MoveError::KingNotFound { color })
    }

    /// Relocate a piece using its basic movement geometry only.
    ///
    /// Checks that `from` is occupied, that `to` is not held by an ally and
    /// that `to` is a pseudo-legal target. Turn order, check, castling, en
    /// passant and promotion are the caller's concern.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if self.is_ally(to, piece.color) {
            return Err(MoveError::DestinationOccupiedByAlly { square: to });
        }
        if !self.pseudo_legal_targets(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        self.set_piece(to, Some(piece));
        self.set_piece(from, None);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file].map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
