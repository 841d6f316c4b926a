//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Quieter run
/// book_pipeline --log-level warn
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=book_pipeline=debug,sqlx=info book_pipeline
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    // CLI level takes precedence over RUST_LOG
    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, *cap);
    }
    builder.filter_module(env!("CARGO_PKG_NAME"), level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Dependencies that log every statement or connection at info level.
/// Module filters match by prefix, so `hyper` also covers `hyper_util`.
const QUIET_MODULES: &[(&str, LevelFilter)] =
    &[("sqlx", LevelFilter::Warn), ("hyper", LevelFilter::Warn)];

fn json_line(record: &log::Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn plain_line(record: &log::Record<'_>) -> String {
    let level = record.level();
    let (emoji, colored_level) = match level {
        log::Level::Error => ("❌", level.as_str().red()),
        log::Level::Warn => ("⚠️", level.as_str().yellow()),
        log::Level::Info => ("✔️", level.as_str().green()),
        log::Level::Debug => ("🔍", level.as_str().blue()),
        log::Level::Trace => ("🔬", level.as_str().purple()),
    };
    format!(
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}
