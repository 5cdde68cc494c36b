//! Chess rules engine with a material-only minimax player.
//!
//! - [`board`]: the piece grid, pseudo-legal targets and attack detection
//! - [`game`]: turn order, castling, en passant, promotion, check safety
//!   and game status
//! - [`search`]: fixed-depth alpha-beta search
//! - [`record`] and [`replay`]: the move-record text format and a
//!   forward/back stepper
//! - [`cli`]: the text play loop behind the `chess_game` binary

pub mod board;
pub mod cli;
pub mod game;
pub mod record;
pub mod replay;
pub mod search;

pub use board::{
    Board, BuildError, CastleSide, CastlingRights, Color, Move, MoveCandidate, MoveError, Piece,
    PieceKind, SideRights, Square, SquareError,
};
pub use game::{GameBuilder, GameState, GameStatus, MoveOutcome, Snapshot};
pub use record::RecordError;
pub use replay::Replay;
pub use search::{SearchConfig, SearchEngine, SearchResult};
