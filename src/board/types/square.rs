//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Both coordinates are zero-based: `Square(0, 0)` is a1, `Square(7, 7)` is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by a (rank, file) delta, returning `None` when it leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Square> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in rank-major order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => (c - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
