//! Simplified move-record text format.
//!
//! One line per full move: `1. e2e4 e7e5`. A trailing white move stands
//! alone (`2. g1f3`). Each move is the source square followed by the
//! destination, with the promotion letter appended uppercase for
//! promotions (`a7a8N`).
//!
//! Loading reads every whitespace-separated token, drops move numbers
//! (tokens ending in `.`) and anything shorter than four characters, and
//! replays the rest through [`GameState::play_move`] in order.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::board::{MoveCandidate, MoveError};
use crate::game::GameState;

/// Error type for saving and loading records
#[derive(Debug)]
pub enum RecordError {
    /// The file could not be read or written
    Io(io::Error),
    /// A recorded move was rejected while replaying
    Move(MoveError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Io(e) => write!(f, "Record I/O failed: {e}"),
            RecordError::Move(e) => write!(f, "Record replay failed: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io(e) => Some(e),
            RecordError::Move(e) => Some(e),
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(e: io::Error) -> Self {
        RecordError::Io(e)
    }
}

impl From<MoveError> for RecordError {
    fn from(e: MoveError) -> Self {
        RecordError::Move(e)
    }
}

/// Move tokens in play order, e.g. `["e2e4", "e7e5"]`
#[must_use]
pub fn export_moves_list(game: &GameState) -> Vec<String> {
    game.history()
        .iter()
        .map(|mv| mv.candidate().to_string())
        .collect()
}

/// Numbered record text, newline-terminated unless the history is empty
#[must_use]
pub fn export_record(game: &GameState) -> String {
    let tokens = export_moves_list(game);
    let mut out = String::new();
    for (i, pair) in tokens.chunks(2).enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, pair.join(" ")));
    }
    out
}

pub fn save_record(game: &GameState, path: impl AsRef<Path>) -> Result<(), RecordError> {
    let path = path.as_ref();
    fs::write(path, export_record(game))?;
    debug!("saved {} moves to {}", game.history().len(), path.display());
    Ok(())
}

/// Replay record text from the starting position.
///
/// The first rejected move aborts loading with its error.
pub fn load_record_str(text: &str) -> Result<GameState, MoveError> {
    let mut game = GameState::new();
    let tokens = text
        .split_whitespace()
        .filter(|tok| !tok.ends_with('.') && tok.chars().count() >= 4);
    for token in tokens {
        let mv = MoveCandidate::parse_coordinate(token)?;
        game.play_move(mv)?;
    }
    Ok(game)
}

pub fn load_record(path: impl AsRef<Path>) -> Result<GameState, RecordError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let game = load_record_str(&text)?;
    debug!("loaded {} moves from {}", game.history().len(), path.display());
    Ok(game)
}
