//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File the rook starts on (h or a)
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the king lands on (g or c)
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the rook lands on, the square the king passes over (f or d)
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Side implied by a king move onto `target_file`
    #[inline]
    #[must_use]
    pub const fn from_king_target(target_file: usize) -> Self {
        if target_file > KING_START_FILE {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    /// Original rook square for `color`
    #[inline]
    #[must_use]
    pub const fn rook_origin(self, color: Color) -> Square {
        Square(color.back_rank(), self.rook_file())
    }
}

/// File the king starts on (e)
pub const KING_START_FILE: usize = 4;

/// Original king square for `color`
#[inline]
#[must_use]
pub const fn king_origin(color: Color) -> Square {
    Square(color.back_rank(), KING_START_FILE)
}

/// Castling availability for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideRights {
    #[inline]
    const fn get(self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside,
            CastleSide::Queenside => self.queenside,
        }
    }
}

/// Castling rights for both colors.
///
/// Rights can only be removed; once a right is cleared it stays cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    white: SideRights,
    black: SideRights,
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        let cleared = SideRights {
            kingside: false,
            queenside: false,
        };
        CastlingRights {
            white: cleared,
            black: cleared,
        }
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        let full = SideRights {
            kingside: true,
            queenside: true,
        };
        CastlingRights {
            white: full,
            black: full,
        }
    }

    /// Build from explicit per-color records
    #[must_use]
    pub const fn from_sides(white: SideRights, black: SideRights) -> Self {
        CastlingRights { white, black }
    }

    /// Rights for one color
    #[inline]
    #[must_use]
    pub const fn for_color(self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.for_color(color).get(side)
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        let rights = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        match side {
            CastleSide::Kingside => rights.kingside = false,
            CastleSide::Queenside => rights.queenside = false,
        }
    }

    /// Remove both rights for a color
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// True if every right held by `self` is also held by `earlier`
    #[must_use]
    pub fn is_subset_of(self, earlier: CastlingRights) -> bool {
        Color::BOTH.iter().all(|&color| {
            CastleSide::BOTH
                .iter()
                .all(|&side| !self.has(color, side) || earlier.has(color, side))
        })
    }
}
