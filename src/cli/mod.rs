//! Line-oriented text play loop.
//!
//! Reads one command per line and writes replies to the given output.
//! The engine answers automatically when it plays the side to move.

pub mod command;
pub mod logger;
pub mod options;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{info, warn};

use crate::game::{GameState, GameStatus, Snapshot};
use crate::record::{load_record, save_record};
use crate::search::{SearchEngine, StdoutLogger};

use command::{parse_command, Command, HELP};
use options::{OptionAction, PlayOptions};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game plus the settings and undo stack of the play loop
pub struct Session {
    game: GameState,
    undo: Vec<Snapshot>,
    options: PlayOptions,
}

impl Session {
    #[must_use]
    pub fn new(options: PlayOptions) -> Self {
        Session {
            game: GameState::new(),
            undo: Vec::new(),
            options,
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &PlayOptions {
        &self.options
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        self.engine_turn(out)?;
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            if self.execute(cmd, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::Move(from, to) => {
                if self.play_human(&from, &to, out)? {
                    self.engine_turn(out)?;
                }
            }
            Command::Go => {
                self.engine_move(out)?;
            }
            Command::Board => writeln!(out, "{}", self.game.board())?,
            Command::Status => self.print_status(out)?,
            Command::Legal => {
                match self.game.get_all_legal_moves(self.game.current_player()) {
                    Ok(moves) => {
                        let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
                        writeln!(out, "{} legal: {}", list.len(), list.join(" "))?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Undo => match self.undo.pop() {
                Some(snapshot) => {
                    self.game.restore(&snapshot);
                    writeln!(out, "{}", self.game.board())?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Save(path) => {
                let path = path.map_or_else(|| self.options.record_path.clone(), Into::into);
                match save_record(&self.game, &path) {
                    Ok(()) => writeln!(out, "saved {}", path.display())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Load(path) => {
                let path = path.map_or_else(|| self.options.record_path.clone(), Into::into);
                match load_record(&path) {
                    Ok(game) => {
                        self.game = game;
                        self.undo.clear();
                        writeln!(out, "{}", self.game.board())?;
                        self.print_status(out)?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Perft(depth) => {
                let start = Instant::now();
                match self.game.perft(depth) {
                    Ok(nodes) => writeln!(
                        out,
                        "perft depth {depth} nodes {nodes} time_ms {}",
                        start.elapsed().as_millis()
                    )?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Set(name, value) => match self.options.apply(&name, value.as_deref()) {
                Ok(action) => {
                    if let Some(OptionAction::SetLogLevel(level)) = action {
                        logger::set_level(level);
                    }
                    writeln!(out, "{}", self.options.describe())?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::New => {
                self.game = GameState::new();
                self.undo.clear();
                writeln!(out, "{}", self.game.board())?;
                self.engine_turn(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(text) => writeln!(out, "unknown command: {text} (try 'help')")?,
        }
        Ok(Flow::Continue)
    }

    fn is_over(&self) -> bool {
        self.game
            .get_status_for(self.game.current_player())
            .map_or(true, GameStatus::is_terminal)
    }

    /// Returns true if the move was accepted
    fn play_human<W: Write>(&mut self, from: &str, to: &str, out: &mut W) -> io::Result<bool> {
        if self.is_over() {
            writeln!(out, "game over, start a new one with 'new'")?;
            return Ok(false);
        }
        let snapshot = self.game.snapshot();
        match self.game.play(from, to) {
            Ok(outcome) => {
                self.undo.push(snapshot);
                writeln!(out, "{}", self.game.board())?;
                writeln!(out, "{} to move: {}", self.game.current_player(), outcome.status)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(out, "illegal: {e}")?;
                Ok(false)
            }
        }
    }

    /// Let the engine move if it plays the side to move
    fn engine_turn<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.options.engine == Some(self.game.current_player()) {
            self.engine_move(out)?;
        }
        Ok(())
    }

    fn engine_move<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.is_over() {
            writeln!(out, "bestmove (none)")?;
            return Ok(());
        }
        let engine = SearchEngine::from_config(self.options.search);
        let result = match engine.search_with(&mut self.game, &StdoutLogger) {
            Ok(result) => result,
            Err(e) => {
                warn!("search failed: {e}");
                return writeln!(out, "error: {e}");
            }
        };
        let Some(mv) = result.best_move else {
            return writeln!(out, "bestmove (none)");
        };

        let snapshot = self.game.snapshot();
        match self.game.play_move(mv) {
            Ok(outcome) => {
                info!("engine played {mv}");
                self.undo.push(snapshot);
                writeln!(out, "bestmove {mv}")?;
                writeln!(out, "{}", self.game.board())?;
                writeln!(out, "{} to move: {}", self.game.current_player(), outcome.status)
            }
            Err(e) => writeln!(out, "error: {e}"),
        }
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let color = self.game.current_player();
        match self.game.get_status_for(color) {
            Ok(status) => writeln!(out, "{color} to move: {status}"),
            Err(e) => writeln!(out, "error: {e}"),
        }
    }
}
