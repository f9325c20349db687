use thiserror::Error;

use crate::config::error::ConfigError;

/// Application-wide error type that represents all possible errors in the system.
///
/// Runtime request handling has no error path in this service; these
/// variants cover startup and CLI command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValidationError { field, message } => AppError::Validation {
                field,
                reason: message,
            },
            other => AppError::Configuration {
                key: "configuration".to_string(),
                source: anyhow::Error::new(other),
            },
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation_error_maps_to_validation() {
        let config_err = ConfigError::validation("app.port", "Port must be between 1 and 65535.");
        let app_err = AppError::from(config_err);
        assert!(matches!(
            app_err,
            AppError::Validation { field, .. } if field == "app.port"
        ));
    }

    #[test]
    fn test_config_parse_error_maps_to_configuration() {
        let config_err = ConfigError::ParseError("bad value".to_string());
        let app_err = AppError::from(config_err);
        assert!(matches!(app_err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_anyhow_error_maps_to_internal() {
        let app_err = AppError::from(anyhow::anyhow!("boom"));
        assert!(matches!(app_err, AppError::Internal { .. }));
    }
}
