use super::GameState;
use crate::board::MoveError;

impl GameState {
    /// Count legal move paths of length `depth` from the current position
    pub fn perft(&mut self, depth: usize) -> Result<u64, MoveError> {
        if depth == 0 {
            return Ok(1);
        }

        let moves = self.get_all_legal_moves(self.current_player)?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for mv in moves {
            let snapshot = self.snapshot();
            let played = self.play_move(mv);
            if played.is_ok() {
                nodes += self.perft(depth - 1)?;
            }
            self.restore(&snapshot);
            played?;
        }

        Ok(nodes)
    }
}
