//! Configuration settings structures for confview-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables. The ambient sections (`application`,
//! `server`, `logger`) carry defaults; the `[app]` snapshot section does not.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "confview-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Application Snapshot Configuration
// ============================================================================

/// Downstream credentials carried in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Identity used against downstream services
    pub username: String,

    /// Secret paired with the identity
    pub secret: String,
}

/// Storage connection and location settings carried in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage connection URL
    pub url: String,

    /// Storage location (bucket or root path)
    pub bucket: String,
}

/// The configuration snapshot exposed over `GET /configuration`.
///
/// Loaded once at startup from the `[app]` section and immutable afterwards.
/// None of these fields has a default: a missing section or leaf aborts
/// startup instead of producing a partially populated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network port number advertised to consumers
    pub port: u16,

    /// Downstream credentials
    pub credentials: CredentialsConfig,

    /// Named downstream service endpoints (name -> base URL)
    pub services: BTreeMap<String, String>,

    /// Storage connection and location settings
    pub storage: StorageConfig,
}

// ============================================================================
// Logger Settings (compatible with the runtime LoggerConfig)
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = self.console.into_console_config();
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl ConsoleSettings {
    /// Convert ConsoleSettings to ConsoleConfig
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig::new(self.enabled, self.colored)
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.parse_format()?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }

    /// Parse the format string into LogFormat enum
    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables. There is no `Default` impl:
/// the `[app]` snapshot must always come from a configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// The configuration snapshot served over HTTP (required)
    pub app: AppConfig,
}
