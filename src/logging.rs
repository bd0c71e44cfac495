// src/logging.rs

//! Logging setup for `jobflow` using `tracing` + `tracing-subscriber`.
//!
//! The level comes from `--log-level` if given, else from `JOBFLOW_LOG`
//! (anything `tracing::Level` parses, e.g. "debug" or "WARN"), else `info`.
//!
//! Logs go to STDERR; `--dry-run` output is printed on stdout.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "JOBFLOW_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Level {
    if let Some(level) = cli_level {
        return level.into();
    }
    env_value
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
