//! Logging utilities for the Armin Shopfitting API.
//!
//! This module provides a standardized approach to logging across all crates
//! in the workspace. It includes functions for initializing the tracing
//! subscriber from the `logging` section of the configuration.

use armin_config::LoggingConfig;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "armin-api.log";

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// # Examples
///
/// ```
/// use armin_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level, stdout only.
pub fn init_with_level(level: Level) {
    let config = LoggingConfig {
        level: level.to_string(),
        ..LoggingConfig::default()
    };
    // No file layer, so there is no guard to keep.
    let _ = init_with_config(&config);
}

/// Initialize the tracing subscriber from the logging configuration.
///
/// Always logs to stdout. When `directory` is set, a daily rolling file is
/// written through a non-blocking writer; the returned guard must be kept
/// alive for as long as logs should be flushed. When `journald` is set (Linux
/// only), records are also sent to the systemd journal.
///
/// Initialisation uses `try_init`, so calling this more than once (as tests
/// do) leaves the first subscriber in place.
pub fn init_with_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let level = parse_level(&config.level);

    let mut filter = EnvFilter::from_default_env();
    for target in ["armin", "tower_http"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let (file_layer, guard) = match config.directory.as_deref() {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(file_layer)
        .with(journald_layer(config.journald))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }

    guard
}

#[cfg(target_os = "linux")]
fn journald_layer(enabled: bool) -> Option<tracing_journald::Layer> {
    if !enabled {
        return None;
    }
    match tracing_journald::layer() {
        Ok(layer) => Some(layer),
        Err(e) => {
            eprintln!("journald logging requested but unavailable: {}", e);
            None
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn journald_layer(enabled: bool) -> Option<tracing_subscriber::layer::Identity> {
    if enabled {
        eprintln!("journald logging is only available on Linux");
    }
    None
}

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}
