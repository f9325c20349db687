//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)
//! - Level filtering via `EnvFilter` directives

pub mod config;
pub mod error;

// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).map_err(|e| LoggerError::InvalidLevel {
        level: config.level.clone(),
        message: e.to_string(),
    })?;

    match (config.console.enabled, config.file.enabled) {
        (true, true) => init_both(&config, filter),
        (true, false) => init_console_only(&config.console, filter),
        (false, true) => init_file_only(&config.file, filter),
        (false, false) => Err(LoggerError::NoOutputEnabled),
    }
}

fn init_console_only(config: &ConsoleConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = config.colored && is_tty;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

fn init_file_only(config: &FileConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let writer = open_log_file(config)?;

    match config.format {
        LogFormat::Full => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .compact()
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).json().with_writer(writer))
            .try_init(),
    }
    .map_err(|e| LoggerError::Init(e.to_string()))
}

fn init_both(config: &LoggerConfig, filter: EnvFilter) -> Result<(), LoggerError> {
    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = config.console.colored && is_tty;
    let writer = open_log_file(&config.file)?;

    // File layer must be added BEFORE the console layer so ANSI codes from
    // span field formatting do not leak into file output.
    match config.file.format {
        LogFormat::Full => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .try_init()
        }
        LogFormat::Compact => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .compact()
                .with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .try_init()
        }
        LogFormat::Json => {
            let file_layer = fmt::layer().with_ansi(false).json().with_writer(writer);

            let console_layer = fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .try_init()
        }
    }
    .map_err(|e| LoggerError::Init(e.to_string()))
}

/// Open the configured log file, creating parent directories as needed.
fn open_log_file(config: &FileConfig) -> Result<Arc<std::fs::File>, LoggerError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| LoggerError::FileOpen {
            path: config.path.clone(),
            source: e,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(config.append)
        .truncate(!config.append)
        .write(true)
        .open(&config.path)
        .map_err(|e| LoggerError::FileOpen {
            path: config.path.clone(),
            source: e,
        })?;

    Ok(Arc::new(file))
}
