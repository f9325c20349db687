//! CLI module for confview-rs
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation
//! - Command handlers for the serve operation

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load and merge configuration from CLI arguments
///
/// This function handles the complete configuration loading process:
/// 1. Export the `--env` override so the loader picks the right layer
/// 2. Load base configuration from files and environment variables
/// 3. Merge CLI argument overrides
/// 4. Validate the final configuration
///
/// Any failure is a startup failure: the error is printed to stderr and the
/// process exits with a non-zero code before the HTTP listener opens.
pub fn load_and_merge_config(cli: &Cli) -> Settings {
    if let Some(env) = cli.env.clone() {
        let environment: crate::config::Environment = env.into();
        unsafe {
            std::env::set_var(crate::config::Environment::ENV_VAR, environment.as_str());
        }
    }

    let merger = match ConfigurationMerger::from_config_path(cli.config.as_ref()) {
        Ok(merger) => merger,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match merger.merge_cli_args(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration merge error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logger from settings
///
/// # Arguments
/// * `settings` - Application settings containing logger configuration
///
/// Logger failures are startup failures as well: printed to stderr followed
/// by a non-zero exit.
pub fn init_logger_from_settings(settings: &Settings) {
    let logger_config = match settings.logger.clone().into_logger_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Logger configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logger(logger_config) {
        eprintln!("Logger initialization error: {}", e);
        std::process::exit(1);
    }
}
