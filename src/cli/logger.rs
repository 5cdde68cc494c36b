//! stderr log output for the play loop.
//!
//! The library logs through the `log` facade. `tracing-subscriber` picks
//! those records up and prints them to stderr, filtered by `--log-level`
//! or the `CHESS_LOG` directive string (e.g. `debug` or
//! `chess_game::search=trace`).

use log::LevelFilter;
use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Environment variable consulted when no level is given on the command line
pub const LOG_ENV: &str = "CHESS_LOG";

static FILTER: OnceCell<reload::Handle<EnvFilter, Registry>> = OnceCell::new();

fn level_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(level.to_string().to_ascii_lowercase())
}

/// Filter from `CHESS_LOG`, falling back to `warn`
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the subscriber. `None` reads the filter from the environment.
///
/// Fails if a global subscriber or `log` logger is already installed.
pub fn init(level: Option<LevelFilter>) -> Result<(), TryInitError> {
    let filter = level.map_or_else(env_filter, level_filter);
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    FILTER.get_or_init(|| handle);
    Ok(())
}

/// Change the level at runtime
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
    if let Some(handle) = FILTER.get() {
        if let Err(e) = handle.reload(level_filter(level)) {
            log::warn!("log level unchanged: {e}");
        }
    }
}
