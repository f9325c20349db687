//! Error types for the logger module

use std::path::PathBuf;
use thiserror::Error;

/// Logger error types
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured log level could not be parsed
    #[error("Invalid log level '{level}': {message}")]
    InvalidLevel { level: String, message: String },

    /// The configured log format is not recognized
    #[error("Invalid log format '{0}'. Valid formats are: full, compact, json")]
    InvalidFormat(String),

    /// File logging is enabled but the path is empty
    #[error("Log file path cannot be empty when file logging is enabled")]
    EmptyFilePath,

    /// Neither console nor file output is enabled
    #[error("At least one output (console or file) must be enabled")]
    NoOutputEnabled,

    /// The log file (or its parent directory) could not be opened
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The global subscriber could not be installed
    #[error("Failed to initialize logger: {0}")]
    Init(String),
}
