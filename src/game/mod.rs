//! Rules orchestrator.
//!
//! `GameState` owns a [`Board`] plus everything the board does not know:
//! side to move, castling rights, the en-passant target and the move
//! history. It layers castling, en passant and promotion on top of the
//! board's pseudo-legal moves, filters every candidate through a king-safety
//! test, and reports check, checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_game::{Color, GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! game.play("f2", "f3").unwrap();
//! game.play("e7", "e5").unwrap();
//! game.play("g2", "g4").unwrap();
//! let outcome = game.play("d8", "h4").unwrap();
//! assert_eq!(outcome.status, GameStatus::Checkmate);
//! assert_eq!(game.get_status_for(Color::White).unwrap(), GameStatus::Checkmate);
//! ```

mod builder;
mod legality;
mod make_unmake;
mod perft;
mod snapshot;

#[cfg(test)]
mod tests;

use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, BuildError, CastleSide, CastlingRights, Color, Move, MoveCandidate, MoveError, Piece,
    PieceKind, Square,
};

pub use builder::GameBuilder;
pub use make_unmake::UnmakeInfo;
pub use snapshot::Snapshot;

/// Check and terminal state for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Result of an accepted move, seen from the side now to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub opponent_in_check: bool,
    pub status: GameStatus,
}

/// A game in progress.
///
/// Not reentrant: search mutates it in place and restores it through
/// [`GameState::snapshot`] / [`GameState::restore`]. Clone it to evaluate
/// positions independently.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<Move>,
    /// Position the game started from; `None` for the standard start
    pub(crate) origin: Option<Box<Snapshot>>,
}

impl GameState {
    /// Standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            history: Vec::new(),
            origin: None,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// Each color needs exactly one king, and the side not to move must not
    /// be in check.
    pub fn from_board(
        board: Board,
        current_player: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Result<Self, BuildError> {
        for color in Color::BOTH {
            let found = board.king_count(color);
            if found != 1 {
                return Err(BuildError::KingCount { color, found });
            }
        }
        let waiting = current_player.opponent();
        if matches!(board.king_attacked(waiting), Ok(true)) {
            return Err(BuildError::OpponentInCheck { color: waiting });
        }
        let mut game = GameState {
            board,
            current_player,
            castling_rights,
            en_passant_target,
            history: Vec::new(),
            origin: None,
        };
        game.origin = Some(Box::new(game.snapshot()));
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play a move given as text, e.g. `play("e2", "e4")` or
    /// `play("a7", "a8q")`.
    pub fn play(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let candidate = MoveCandidate::parse(from, to)?;
        self.play_move(candidate)
    }

    /// The only legal mutation entrypoint.
    ///
    /// On error the game is unchanged.
    pub fn play_move(&mut self, candidate: MoveCandidate) -> Result<MoveOutcome, MoveError> {
        let MoveCandidate { from, to, promotion } = candidate;
        Square::try_from((from.rank(), from.file()))?;
        Square::try_from((to.rank(), to.file()))?;

        let piece = self
            .board
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.color != self.current_player {
            return Err(MoveError::NotCurrentPlayersTurn {
                square: from,
                to_move: self.current_player,
            });
        }
        if self.board.is_ally(to, piece.color) {
            return Err(MoveError::DestinationOccupiedByAlly { square: to });
        }
        if !self.candidate_targets(from)?.contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        if let Some(kind) = promotion {
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion {
                    char: kind.to_char(),
                });
            }
        }

        let info = self.make_move(from, to, promotion)?;
        match self.is_in_check(piece.color) {
            Ok(false) => {}
            Ok(true) => {
                self.unmake_move(&info);
                debug!("rejected {candidate}: king left in check");
                return Err(MoveError::MoveLeavesKingInCheck { from, to });
            }
            Err(e) => {
                self.unmake_move(&info);
                return Err(e);
            }
        }

        let rights_before = self.castling_rights;
        let en_passant_before = self.en_passant_target;

        self.update_castling_rights(piece, from, to, info.captured());

        self.en_passant_target = None;
        if piece.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant_target = Some(Square((from.rank() + to.rank()) / 2, from.file()));
        }

        self.history.push(info.record());
        self.current_player = piece.color.opponent();

        match self.outcome_for(self.current_player) {
            Ok(outcome) => {
                debug!(
                    "played {candidate}, {} to move, status {}",
                    self.current_player, outcome.status
                );
                Ok(outcome)
            }
            Err(e) => {
                self.history.pop();
                self.current_player = piece.color;
                self.castling_rights = rights_before;
                self.en_passant_target = en_passant_before;
                self.unmake_move(&info);
                debug!("rolled back {candidate}: {e}");
                Err(e)
            }
        }
    }

    fn outcome_for(&self, color: Color) -> Result<MoveOutcome, MoveError> {
        let opponent_in_check = self.is_in_check(color)?;
        let status = self.status_given_check(color, opponent_in_check)?;
        Ok(MoveOutcome {
            opponent_in_check,
            status,
        })
    }

    fn update_castling_rights(
        &mut self,
        moved: Piece,
        from: Square,
        to: Square,
        captured: Option<(Square, Piece)>,
    ) {
        let color = moved.color;
        match moved.kind {
            PieceKind::King => self.castling_rights.remove_all(color),
            PieceKind::Rook => {
                for side in CastleSide::BOTH {
                    if from == side.rook_origin(color) {
                        self.castling_rights.remove(color, side);
                    }
                }
            }
            _ => {}
        }

        if let Some((square, piece)) = captured {
            if piece.kind == PieceKind::Rook && square == to {
                for side in CastleSide::BOTH {
                    if square == side.rook_origin(piece.color) {
                        self.castling_rights.remove(piece.color, side);
                    }
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
