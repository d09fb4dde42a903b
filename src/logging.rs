//! Minimal `log` backend writing to stderr.
//!
//! Only records from this crate are printed. The level comes from the
//! `TSCAT_LOG` environment variable (`off`, `error`, `warn`, `info`, `debug`,
//! `trace`) and defaults to `warn`.

use std::io::{self, Write};
use std::sync::OnceLock;

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub const LOG_ENV_VAR: &str = "TSCAT_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct Logger {
    level: LevelFilter,
}

impl Logger {
    fn is_app_target(target: &str) -> bool {
        target == "tscat" || target.starts_with("tscat::")
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && Self::is_app_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".blue(),
            Level::Trace => "trace".dimmed(),
        };
        let line = format!("[{}] {}\n", level, record.args());
        let _ = io::stderr().lock().write_all(line.as_bytes());
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Parse a level name, case-insensitive. Unknown names yield `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Install the logger. `verbose` raises the level to at least `debug`.
///
/// Calling this more than once keeps the first logger.
pub fn init(verbose: bool) {
    let mut level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(DEFAULT_LEVEL);
    if verbose && level < LevelFilter::Debug {
        level = LevelFilter::Debug;
    }

    let logger = LOGGER.get_or_init(|| Logger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
