#![cfg(feature = "std")]

use std::env;
use std::fmt::Arguments;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV;

// Writes to stderr; stdout carries the board.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

// `WARN tictactoe::console: rejected move`, with the crate prefix dropped.
fn format_line(level: Level, target: &str, args: &Arguments) -> String {
    let module = target
        .strip_prefix("tictactoe::")
        .unwrap_or(target);
    format!("{:<5} {}: {}", level, module, args)
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. The filter comes from `TICTACTOE_LOG`
/// (`off`, `error` .. `trace`, case-insensitive) and falls back to `warn`.
/// Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
