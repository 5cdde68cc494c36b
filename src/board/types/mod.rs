//! Core chess types.
//!
//! This module contains the value types shared by the board, the rules
//! orchestrator and the search:
//! - `PieceKind`, `Color` and `Piece` - piece identity and display symbol
//! - `Square` - (rank, file) coordinates with algebraic notation
//! - `Move` and `MoveCandidate` - history records and coordinate triples
//! - `CastlingRights` - monotonic per-color castling flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_origin, CastleSide, CastlingRights, SideRights, KING_START_FILE};
pub use moves::{Move, MoveCandidate};
pub use piece::{Color, Piece, PieceKind, PROMOTION_PIECES};
pub use square::Square;
