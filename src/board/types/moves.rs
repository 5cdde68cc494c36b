//! Move types: the history record and the coordinate-pair candidate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;
use crate::board::error::MoveError;

/// A move as recorded in game history.
///
/// Records are immutable once appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` (a pawn for promotions)
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl Move {
    /// The coordinate triple that reproduces this move
    #[must_use]
    pub const fn candidate(&self) -> MoveCandidate {
        MoveCandidate {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.piece.symbol(), self.candidate())
    }
}

/// A (from, to, optional promotion) triple.
///
/// This is what the legal-move query returns and what the move entrypoint and
/// the search engine consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveCandidate {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveCandidate {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveCandidate {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        MoveCandidate {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Parse a source square and a destination token.
    ///
    /// The destination is two characters (`e4`) or three with a trailing
    /// promotion letter (`a8q`, case-insensitive).
    pub fn parse(from: &str, to: &str) -> Result<Self, MoveError> {
        let from_sq: Square = from.parse()?;

        let len = to.chars().count();
        if !(2..=3).contains(&len) || !to.is_ascii() {
            return Err(MoveError::InvalidDestinationTokenFormat {
                token: to.to_string(),
            });
        }
        let to_sq: Square = to[..2].parse()?;

        let promotion = match to[2..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveError::InvalidPromotion { char: c }),
            },
        };

        Ok(MoveCandidate {
            from: from_sq,
            to: to_sq,
            promotion,
        })
    }

    /// Parse a concatenated `fromto[promo]` token such as `e2e4` or `a7a8Q`
    pub fn parse_coordinate(token: &str) -> Result<Self, MoveError> {
        if token.len() < 4 || !token.is_ascii() {
            return Err(MoveError::InvalidDestinationTokenFormat {
                token: token.to_string(),
            });
        }
        let (from, to) = token.split_at(2);
        MoveCandidate::parse(from, to)
    }

    /// Destination text with the promotion letter appended, as accepted by
    /// [`MoveCandidate::parse`]
    #[must_use]
    pub fn destination_token(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}", self.to, kind.to_char()),
            None => self.to.to_string(),
        }
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.destination_token())
    }
}
