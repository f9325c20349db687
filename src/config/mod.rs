//! Configuration management module for confview-rs
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//! - Multiple environment configurations (development, test, staging, production)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local development overrides (not committed to version control)
//! 4. `CONFVIEW_*` environment variables
//!
//! The `[app]` section is the configuration snapshot served over HTTP. It
//! carries no defaults: every field must be supplied by one of the sources
//! above or loading fails before the server starts.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{AppConfig, CredentialsConfig, StorageConfig};
