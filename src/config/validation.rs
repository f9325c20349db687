//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.
//! Validation runs once at startup; any failure aborts before the HTTP
//! listener opens.

use crate::config::error::ConfigError;
use crate::config::settings::{
    AppConfig, FileSettings, LoggerSettings, ServerConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    /// - Keep-alive timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate port range (1-65535)
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        // Validate request timeout
        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        // Validate keep-alive timeout
        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    /// Validate the configuration snapshot
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Credentials username and secret must not be empty
    /// - Every named service endpoint must have a non-empty URL
    /// - Storage URL and bucket must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "app.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.credentials.username.trim().is_empty() {
            return Err(ConfigError::validation(
                "app.credentials.username",
                "Credentials username is required and cannot be empty.",
            ));
        }

        if self.credentials.secret.trim().is_empty() {
            return Err(ConfigError::validation(
                "app.credentials.secret",
                "Credentials secret is required and cannot be empty.",
            ));
        }

        for (name, endpoint) in &self.services {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: format!("app.services.{}", name),
                    message: "Service endpoint URL cannot be empty.".to_string(),
                });
            }
        }

        if self.storage.url.trim().is_empty() {
            return Err(ConfigError::validation(
                "app.storage.url",
                "Storage URL is required and cannot be empty.",
            ));
        }

        if self.storage.bucket.trim().is_empty() {
            return Err(ConfigError::validation(
                "app.storage.bucket",
                "Storage bucket is required and cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        // If file logging is enabled, path must not be empty
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        // Validate log format
        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate log level
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        // Validate file settings
        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// This method validates all sub-configurations and returns the first
    /// validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.app.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{ApplicationConfig, CredentialsConfig, StorageConfig};
    use std::collections::BTreeMap;

    fn valid_app_config() -> AppConfig {
        AppConfig {
            port: 8080,
            credentials: CredentialsConfig {
                username: "svc".to_string(),
                secret: "abc".to_string(),
            },
            services: BTreeMap::from([(
                "billing".to_string(),
                "http://billing.internal:9000".to_string(),
            )]),
            storage: StorageConfig {
                url: "s3://storage.internal:9000".to_string(),
                bucket: "confview".to_string(),
            },
        }
    }

    fn valid_settings() -> Settings {
        Settings {
            application: ApplicationConfig::default(),
            server: ServerConfig::default(),
            logger: LoggerSettings::default(),
            app: valid_app_config(),
        }
    }

    // ========================================================================
    // ServerConfig validation tests
    // ========================================================================

    #[test]
    fn test_server_config_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "server.port")
        );
    }

    #[test]
    fn test_server_config_valid_port_boundaries() {
        // Port 1 should be valid
        let config = ServerConfig {
            port: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        // Port 65535 should be valid
        let config = ServerConfig {
            port: 65535,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_request_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "server.request_timeout"
        ));
    }

    #[test]
    fn test_server_config_invalid_keep_alive_timeout() {
        let config = ServerConfig {
            keep_alive_timeout: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "server.keep_alive_timeout"
        ));
    }

    // ========================================================================
    // AppConfig (snapshot) validation tests
    // ========================================================================

    #[test]
    fn test_app_config_valid() {
        assert!(valid_app_config().validate().is_ok());
    }

    #[test]
    fn test_app_config_invalid_port_zero() {
        let config = AppConfig {
            port: 0,
            ..valid_app_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.port"
        ));
    }

    #[test]
    fn test_app_config_empty_username() {
        let mut config = valid_app_config();
        config.credentials.username = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.credentials.username"
        ));
    }

    #[test]
    fn test_app_config_empty_secret() {
        let mut config = valid_app_config();
        config.credentials.secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.credentials.secret"
        ));
    }

    #[test]
    fn test_app_config_empty_service_endpoint() {
        let mut config = valid_app_config();
        config
            .services
            .insert("ledger".to_string(), String::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.services.ledger"
        ));
    }

    #[test]
    fn test_app_config_empty_services_map_is_valid() {
        let mut config = valid_app_config();
        config.services.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_config_empty_storage_url() {
        let mut config = valid_app_config();
        config.storage.url = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.storage.url"
        ));
    }

    #[test]
    fn test_app_config_empty_storage_bucket() {
        let mut config = valid_app_config();
        config.storage.bucket = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "app.storage.bucket"
        ));
    }

    // ========================================================================
    // LoggerSettings validation tests
    // ========================================================================

    #[test]
    fn test_logger_settings_valid() {
        let settings = LoggerSettings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "logger.level"
        ));
    }

    #[test]
    fn test_logger_settings_level_case_insensitive() {
        let settings = LoggerSettings {
            level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_settings_enabled_empty_path() {
        let settings = LoggerSettings {
            file: FileSettings {
                enabled: true,
                path: "   ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "logger.file.path"
        ));
    }

    #[test]
    fn test_file_settings_invalid_format() {
        let settings = LoggerSettings {
            file: FileSettings {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "logger.file.format"
        ));
    }

    // ========================================================================
    // Settings validation tests
    // ========================================================================

    #[test]
    fn test_settings_valid() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_settings_first_error_wins() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        settings.app.port = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "server.port"
        ));
    }

    #[test]
    fn test_settings_snapshot_error_propagates() {
        let mut settings = valid_settings();
        settings.app.credentials.secret = String::new();
        assert!(settings.validate().is_err());
    }
}
