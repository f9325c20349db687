//! Configuration types for the logger module

use std::path::PathBuf;
use std::str::FromStr;

use crate::logger::error::LoggerError;

/// Output format for file logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Default human-readable format
    Full,
    /// Condensed single-line format
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Whether console output is enabled
    pub enabled: bool,
    /// Whether to use colored output (only applied when stdout is a TTY)
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Whether file output is enabled
    pub enabled: bool,
    /// Path to the log file
    pub path: PathBuf,
    /// Whether to append to an existing file
    pub append: bool,
    /// Output format for file entries
    pub format: LogFormat,
}

impl FileConfig {
    /// Create a new file configuration
    ///
    /// # Errors
    /// Returns an error when file output is enabled with an empty path.
    pub fn new(
        enabled: bool,
        path: PathBuf,
        append: bool,
        format: LogFormat,
    ) -> Result<Self, LoggerError> {
        if enabled && path.as_os_str().is_empty() {
            return Err(LoggerError::EmptyFilePath);
        }

        Ok(Self {
            enabled,
            path,
            append,
            format,
        })
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/app.log"),
            append: true,
            format: LogFormat::Json,
        }
    }
}

/// Complete logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Log level directive, e.g. "info" or "confview_rs=debug"
    pub level: String,
    /// Console output configuration
    pub console: ConsoleConfig,
    /// File output configuration
    pub file: FileConfig,
}

impl LoggerConfig {
    /// Create a new logger configuration
    ///
    /// # Errors
    /// Returns an error when neither console nor file output is enabled.
    pub fn new(
        console: ConsoleConfig,
        file: FileConfig,
        level: String,
    ) -> Result<Self, LoggerError> {
        let config = Self {
            level,
            console,
            file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the logger configuration
    pub fn validate(&self) -> Result<(), LoggerError> {
        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::NoOutputEnabled);
        }

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(LoggerError::EmptyFilePath);
        }

        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_invalid() {
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Full.to_string(), "full");
        assert_eq!(LogFormat::Compact.to_string(), "compact");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_file_config_enabled_empty_path() {
        let result = FileConfig::new(true, PathBuf::new(), true, LogFormat::Json);
        assert!(matches!(result, Err(LoggerError::EmptyFilePath)));
    }

    #[test]
    fn test_file_config_disabled_empty_path_allowed() {
        let result = FileConfig::new(false, PathBuf::new(), true, LogFormat::Json);
        assert!(result.is_ok());
    }

    #[test]
    fn test_logger_config_no_output() {
        let console = ConsoleConfig::new(false, false);
        let file = FileConfig::default();
        let result = LoggerConfig::new(console, file, "info".to_string());
        assert!(matches!(result, Err(LoggerError::NoOutputEnabled)));
    }

    #[test]
    fn test_logger_config_console_only() {
        let console = ConsoleConfig::new(true, false);
        let file = FileConfig::default();
        let config = LoggerConfig::new(console, file, "debug".to_string()).unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
    }

    #[test]
    fn test_logger_config_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Json);
    }
}
