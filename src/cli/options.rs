use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;

use crate::board::Color;
use crate::search::SearchConfig;

pub const DEFAULT_RECORD_PATH: &str = "game.txt";

/// Error type for command-line flags and `set` commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The option name is not recognized
    UnknownOption { name: String },
    /// The option needs a value
    MissingValue { name: String },
    /// The value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// What `set` changed, for effects the options cannot apply themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    SetLogLevel(LevelFilter),
}

/// Settings of the text play loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub search: SearchConfig,
    /// Color the engine plays, if any
    pub engine: Option<Color>,
    pub record_path: PathBuf,
    /// Level requested on the command line; `None` defers to the environment
    pub log_level: Option<LevelFilter>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        PlayOptions {
            search: SearchConfig::default(),
            engine: None,
            record_path: PathBuf::from(DEFAULT_RECORD_PATH),
            log_level: None,
        }
    }
}

impl PlayOptions {
    /// Parse `--depth N`, `--engine white|black|none`, `--log-level L` and
    /// `--record PATH`. The program name must already be stripped.
    pub fn from_args<I>(args: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = PlayOptions::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let name = flag.trim_start_matches('-').to_string();
            if name.len() == flag.len() {
                return Err(OptionError::UnknownOption { name: flag });
            }
            let value = args
                .next()
                .ok_or_else(|| OptionError::MissingValue { name: name.clone() })?;
            options.apply(&name, Some(&value))?;
        }
        Ok(options)
    }

    /// Apply one named option, as given to `set <name> <value>`
    pub fn apply(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<OptionAction>, OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim).ok_or_else(|| OptionError::MissingValue {
            name: normalized.clone(),
        })?;
        let invalid = || OptionError::InvalidValue {
            name: normalized.clone(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "depth" => {
                let depth = value.parse::<u32>().map_err(|_| invalid())?;
                self.search.depth = depth.max(1);
            }
            "engine" => {
                self.engine = match value.to_ascii_lowercase().as_str() {
                    "white" | "w" => Some(Color::White),
                    "black" | "b" => Some(Color::Black),
                    "none" | "off" => None,
                    _ => return Err(invalid()),
                };
            }
            "log" | "log-level" => {
                let level = value.parse::<LevelFilter>().map_err(|_| invalid())?;
                self.log_level = Some(level);
                return Ok(Some(OptionAction::SetLogLevel(level)));
            }
            "record" => self.record_path = PathBuf::from(value),
            _ => return Err(OptionError::UnknownOption { name: normalized }),
        }
        Ok(None)
    }

    /// Current settings, one per line
    #[must_use]
    pub fn describe(&self) -> String {
        let engine = self.engine.map_or_else(|| "none".to_string(), |c| c.to_string());
        let log = self
            .log_level
            .map_or_else(|| "env".to_string(), |l| l.to_string().to_ascii_lowercase());
        format!(
            "option depth {}\noption engine {}\noption log {}\noption record {}",
            self.search.depth,
            engine.to_ascii_lowercase(),
            log,
            self.record_path.display()
        )
    }
}
