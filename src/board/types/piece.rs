//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Parse a piece kind from its letter, ignoring case (k, q, r, b, n, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Uppercase type letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Get the standard material value in centipawns.
    ///
    /// Pawn=100, Knight=320, Bishop=330, Rook=500, Queen=900, King=20000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Promotion piece choices in enumeration order (queen first)
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A colored piece. Plain value, compared by kind and color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Display symbol: type letter, uppercase for White and lowercase for Black
    #[must_use]
    pub fn symbol(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parse a piece from a symbol; case selects the color
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
