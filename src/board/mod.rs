//! Chess board representation and piece geometry.
//!
//! The board is a plain 8x8 grid of optional pieces. It generates
//! pseudo-legal targets and attack sets, but knows nothing about turn
//! order, castling rights, en passant or check; those live in
//! [`crate::game`].
//!
//! # Example
//! ```
//! use chess_game::{Board, Square};
//!
//! let board = Board::new();
//! let targets = board.pseudo_legal_targets(Square(0, 6));
//! println!("The g1 knight has {} targets", targets.len());
//! ```

mod attack_tables;
mod attacks;
mod error;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{BuildError, MoveError, SquareError};
pub use state::Board;
pub use types::{
    king_origin, CastleSide, CastlingRights, Color, Move, MoveCandidate, Piece, PieceKind,
    SideRights, Square, KING_START_FILE, PROMOTION_PIECES,
};
