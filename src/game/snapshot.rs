use super::GameState;
use crate::board::{Board, CastlingRights, Color, Square};

/// Captured game position.
///
/// Holds piece values rather than references, so a plain copy of the grid
/// is a complete snapshot. History is captured by length only: restoring
/// truncates back to it and cannot bring back later entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    current_player: Color,
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
    history_len: usize,
}

impl Snapshot {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history_len
    }
}

impl GameState {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
            history_len: self.history.len(),
        }
    }

    /// Snapshot of the position this game started from
    #[must_use]
    pub fn starting_snapshot(&self) -> Snapshot {
        match &self.origin {
            Some(origin) => Snapshot::clone(origin),
            None => GameState::new().snapshot(),
        }
    }

    /// Return to a snapshot taken earlier from this game.
    ///
    /// Must not be used to move forward past the current history.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug_assert!(
            snapshot.history_len <= self.history.len(),
            "restore cannot recover history entries beyond the current point"
        );
        self.board.clone_from(&snapshot.board);
        self.current_player = snapshot.current_player;
        self.en_passant_target = snapshot.en_passant_target;
        self.castling_rights = snapshot.castling_rights;
        self.history.truncate(snapshot.history_len);
    }
}
