//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece.
//!
//! # Example
//! ```
//! use chess_game::{Color, GameBuilder, PieceKind, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.get_all_legal_moves(Color::White).unwrap().len(), 9);
//! ```

use super::GameState;
use crate::board::{Board, BuildError, CastlingRights, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder: no pieces, White to move, no castling.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::new(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, Some(Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set_piece(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game. Fails unless each color has exactly one king.
    pub fn build(self) -> Result<GameState, BuildError> {
        GameState::from_board(
            self.board,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
        )
    }
}
