//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Material-only evaluation from White's point of view
//! - Capture/promotion move ordering (stable)
//! - Mate scores that prefer the shortest forced mate
//!
//! The search drives a [`GameState`] in place through `play_move` and
//! returns it to its prior position with snapshot/restore after every trial
//! move.

mod eval;
mod log;
mod move_order;

#[cfg(test)]
mod tests;

use std::time::Instant;

use ::log::{debug, warn};

use crate::board::{Color, MoveCandidate, MoveError};
use crate::game::{GameState, GameStatus};

pub use self::log::{LogReporter, SearchInfo, SearchLogger, StdoutLogger};
pub use eval::evaluate;
pub use move_order::{order_moves, order_score};

/// Score of the side that has been checkmated at the root
pub const MATE_SCORE: i32 = 1_000_000;

/// Search configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search. Values below 1 are raised to 1.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 3 }
    }
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` in a terminal position
    pub best_move: Option<MoveCandidate>,
    /// Score of the best move from White's point of view
    pub score: i32,
    /// Positions visited below the root
    pub nodes: u64,
    /// Candidates that failed to apply and were left out. Always zero
    /// unless the legality pipeline is broken.
    pub skipped: u64,
}

/// Statistics tracked during search
#[derive(Default)]
struct SearchStats {
    nodes: u64,
    skipped: u64,
}

/// Chooses moves for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchEngine {
    depth: u32,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::from_config(SearchConfig::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        SearchEngine {
            depth: depth.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: SearchConfig) -> Self {
        Self::new(config.depth)
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Best move for the side to move, or `None` when the game is over
    pub fn choose_move(&self, game: &mut GameState) -> Result<Option<MoveCandidate>, MoveError> {
        Ok(self.search(game)?.best_move)
    }

    /// Search and report through the `log` facade
    pub fn search(&self, game: &mut GameState) -> Result<SearchResult, MoveError> {
        self.search_with(game, &LogReporter)
    }

    /// Search the current position to the configured depth.
    ///
    /// Every root move is searched with the full window. Among equally
    /// scored moves the first one in ordered sequence wins. The game is
    /// returned to its starting position before this returns, including on
    /// error.
    pub fn search_with(
        &self,
        game: &mut GameState,
        logger: &dyn SearchLogger,
    ) -> Result<SearchResult, MoveError> {
        let start = Instant::now();
        let color = game.current_player();
        let mut stats = SearchStats::default();

        let mut moves = game.get_all_legal_moves(color)?;
        if moves.is_empty() {
            let status = game.get_status_for(color)?;
            return Ok(SearchResult {
                best_move: None,
                score: terminal_score(status, color, 0).unwrap_or(0),
                nodes: 0,
                skipped: 0,
            });
        }
        order_moves(game.board(), &mut moves);

        let mut best: Option<(MoveCandidate, i32)> = None;
        for mv in moves {
            let Some(score) = self.trial(game, mv, 1, i32::MIN, i32::MAX, &mut stats)? else {
                continue;
            };
            debug!("root {mv} scores {score}");

            let improves = match (color, best) {
                (_, None) => true,
                (Color::White, Some((_, best_score))) => score > best_score,
                (Color::Black, Some((_, best_score))) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let best_move = best.map(|(mv, _)| mv);
        let result = SearchResult {
            best_move,
            score: best.map_or_else(|| evaluate(game.board()), |(_, score)| score),
            nodes: stats.nodes,
            skipped: stats.skipped,
        };
        logger.info(&SearchInfo {
            depth: self.depth,
            score: result.score,
            nodes: result.nodes,
            time_ms: start.elapsed().as_millis(),
            best_move: best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
        });
        Ok(result)
    }

    /// Play `mv`, search the reply position and restore.
    ///
    /// `ply` is the distance from the root after `mv` has been played.
    /// `None` means the move could not be applied.
    fn trial(
        &self,
        game: &mut GameState,
        mv: MoveCandidate,
        ply: u32,
        alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> Result<Option<i32>, MoveError> {
        let snapshot = game.snapshot();
        let outcome = game.play_move(mv);
        let score = match outcome {
            Ok(outcome) => self.minimax(game, ply, outcome.status, alpha, beta, stats),
            Err(err) if err.is_invariant_violation() => Err(err),
            Err(err) => {
                warn!("search skipped {mv}: {err}");
                stats.skipped += 1;
                game.restore(&snapshot);
                return Ok(None);
            }
        };
        game.restore(&snapshot);
        score.map(Some)
    }

    fn minimax(
        &self,
        game: &mut GameState,
        ply: u32,
        status: GameStatus,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Result<i32, MoveError> {
        stats.nodes += 1;
        let color = game.current_player();

        if let Some(score) = terminal_score(status, color, ply) {
            return Ok(score);
        }
        if ply >= self.depth {
            return Ok(evaluate(game.board()));
        }

        let mut moves = game.get_all_legal_moves(color)?;
        if moves.is_empty() {
            return Ok(evaluate(game.board()));
        }
        order_moves(game.board(), &mut moves);

        let mut best: Option<i32> = None;
        for mv in moves {
            let Some(score) = self.trial(game, mv, ply + 1, alpha, beta, stats)? else {
                continue;
            };
            let value = match (color, best) {
                (_, None) => score,
                (Color::White, Some(v)) => v.max(score),
                (Color::Black, Some(v)) => v.min(score),
            };
            best = Some(value);
            match color {
                Color::White => alpha = alpha.max(value),
                Color::Black => beta = beta.min(value),
            }
            if alpha >= beta {
                break;
            }
        }

        Ok(best.unwrap_or_else(|| evaluate(game.board())))
    }
}

/// Mate and stalemate scores from White's point of view.
///
/// The mated side scores `-MATE_SCORE + ply`, so a mate found nearer the
/// root is worth more to the winner.
fn terminal_score(status: GameStatus, to_move: Color, ply: u32) -> Option<i32> {
    match status {
        GameStatus::Checkmate => Some(to_move.sign() * (-MATE_SCORE + ply as i32)),
        GameStatus::Stalemate => Some(0),
        GameStatus::Normal | GameStatus::Check => None,
    }
}
