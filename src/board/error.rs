//! Error types for board and game operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected or impossible moves.
///
/// The first group are input validation failures: the state is left
/// untouched. `KingNotFound` and `IllegalCastlingRookState` mean the board
/// itself is corrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    NoPieceAtSource { square: Square },
    /// The piece on the source square belongs to the side not to move
    NotCurrentPlayersTurn { square: Square, to_move: Color },
    /// The destination is not among the piece's candidate targets
    IllegalDestination { from: Square, to: Square },
    /// The destination holds a piece of the mover's color
    DestinationOccupiedByAlly { square: Square },
    /// The move would leave the mover's king attacked
    MoveLeavesKingInCheck { from: Square, to: Square },
    /// A square reference could not be parsed
    InvalidSquare(SquareError),
    /// Destination token is not 2 or 3 characters
    InvalidDestinationTokenFormat { token: String },
    /// Promotion letter is not one of q, r, b, n
    InvalidPromotion { char: char },
    /// No king of this color on the board
    KingNotFound { color: Color },
    /// Castling found the rook missing or the rook's target square occupied
    IllegalCastlingRookState { square: Square },
}

impl MoveError {
    /// True for errors that indicate a corrupted board rather than bad input
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            MoveError::KingNotFound { .. } | MoveError::IllegalCastlingRookState { .. }
        )
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::NotCurrentPlayersTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move: it is {to_move}'s turn")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal destination {to} for piece on {from}")
            }
            MoveError::DestinationOccupiedByAlly { square } => {
                write!(f, "Destination {square} is occupied by an allied piece")
            }
            MoveError::MoveLeavesKingInCheck { from, to } => {
                write!(f, "Move {from}{to} would leave the king in check")
            }
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::InvalidDestinationTokenFormat { token } => {
                write!(f, "Destination token '{token}' must be 2 or 3 characters")
            }
            MoveError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveError::KingNotFound { color } => {
                write!(f, "King not found for {color}")
            }
            MoveError::IllegalCastlingRookState { square } => {
                write!(f, "Castling rook state is corrupt around {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquare(e)
    }
}

/// Error type for custom position construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A color has no king or more than one
    KingCount { color: Color, found: usize },
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck { color: Color },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            BuildError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not to move")
            }
        }
    }
}

impl std::error::Error for BuildError {}
