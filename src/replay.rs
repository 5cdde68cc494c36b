//! Step through a finished game one move at a time.

use crate::board::{MoveCandidate, MoveError};
use crate::game::{GameState, Snapshot};

/// Forward/back replay of a recorded move sequence.
///
/// Stepping forward re-plays the next move through the normal move
/// pipeline; stepping back restores the snapshot taken before it.
#[derive(Clone, Debug)]
pub struct Replay {
    game: GameState,
    origin: Snapshot,
    moves: Vec<MoveCandidate>,
    snapshots: Vec<Snapshot>,
    index: usize,
}

impl Replay {
    /// Replay the history of `game` from the position it started in
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        let moves = game.history().iter().map(|mv| mv.candidate()).collect();
        let origin = game.starting_snapshot();
        let mut base = game.clone();
        base.restore(&origin);
        Replay {
            snapshots: vec![origin.clone()],
            game: base,
            origin,
            moves,
            index: 0,
        }
    }

    /// Back to the starting position
    pub fn rebuild(&mut self) {
        self.game.restore(&self.origin);
        self.snapshots = vec![self.origin.clone()];
        self.index = 0;
    }

    #[must_use]
    pub fn can_forward(&self) -> bool {
        self.index < self.moves.len()
    }

    #[must_use]
    pub fn can_back(&self) -> bool {
        self.index > 0
    }

    /// Apply the next move. `Ok(false)` when already at the end.
    pub fn forward(&mut self) -> Result<bool, MoveError> {
        let Some(&mv) = self.moves.get(self.index) else {
            return Ok(false);
        };
        self.game.play_move(mv)?;
        self.snapshots.push(self.game.snapshot());
        self.index += 1;
        Ok(true)
    }

    /// Undo the last applied move. `false` when already at the start.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.index -= 1;
        self.snapshots.truncate(self.index + 1);
        if let Some(snapshot) = self.snapshots.last() {
            self.game.restore(snapshot);
        }
        true
    }

    /// Position after the moves applied so far
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.game
    }

    /// Number of moves applied so far
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Total number of moves in the replay
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Square};

    fn finished_game() -> GameState {
        let mut game = GameState::new();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            game.play(from, to).unwrap();
        }
        game
    }

    #[test]
    fn test_steps_forward_to_end() {
        let source = finished_game();
        let mut replay = Replay::new(&source);
        assert_eq!(replay.len(), 3);
        assert!(!replay.can_back());

        while replay.can_forward() {
            assert!(replay.forward().unwrap());
        }
        assert!(!replay.forward().unwrap());
        assert_eq!(replay.current().board(), source.board());
        assert_eq!(replay.current().current_player(), Color::Black);
    }

    #[test]
    fn test_back_restores_previous_position() {
        let mut replay = Replay::new(&finished_game());
        replay.forward().unwrap();
        replay.forward().unwrap();
        assert!(replay.back());
        assert_eq!(replay.position(), 1);
        assert!(replay.current().board().get_piece(Square(4, 4)).is_none());
        assert_eq!(replay.current().en_passant_target(), Some(Square(2, 4)));
        assert_eq!(replay.current().history().len(), 1);

        assert!(replay.back());
        assert!(!replay.back());
        assert_eq!(replay.current().board(), GameState::new().board());
    }

    #[test]
    fn test_rebuild_resets() {
        let mut replay = Replay::new(&finished_game());
        replay.forward().unwrap();
        replay.rebuild();
        assert_eq!(replay.position(), 0);
        assert!(replay.can_forward());
        assert!(replay.current().history().is_empty());
    }

    #[test]
    fn test_replays_built_position() {
        use crate::board::PieceKind;
        use crate::game::GameBuilder;

        let mut source = GameBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .piece(Square(6, 0), Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        source.play("a7", "a8r").unwrap();
        source.play("e8", "d7").unwrap();

        let mut replay = Replay::new(&source);
        assert_eq!(
            replay.current().board().get_piece(Square(6, 0)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        while replay.can_forward() {
            assert!(replay.forward().unwrap());
        }
        assert_eq!(replay.current().board(), source.board());

        replay.rebuild();
        assert_eq!(replay.position(), 0);
        assert!(replay.current().board().get_piece(Square(0, 4)).is_some());
        assert!(replay.current().board().get_piece(Square(1, 4)).is_none());
        assert_eq!(replay.current().board().king_count(Color::White), 1);
    }

    #[test]
    fn test_empty_replay() {
        let replay = Replay::new(&GameState::new());
        assert!(replay.is_empty());
        assert!(!replay.can_forward());
    }
}
