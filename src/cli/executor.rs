//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// This function dispatches to the appropriate command handler based on
/// the parsed CLI arguments.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
///
/// # Returns
/// Returns Ok(()) on success, or AppError on failure
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    // Validate CLI arguments and configuration
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => {
            // Return Ok to signal that server should start
            // Actual server startup is handled in main.rs
            Ok(())
        }
    }
}

/// Validate command arguments before execution
///
/// This function performs validation of CLI argument combinations beyond
/// what clap enforces, providing specific error messages for failures.
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(crate::error::AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    if let Some(Commands::Serve {
        host,
        port,
        log_level: _,
        dry_run: _,
    }) = &cli.command
    {
        validate_serve_args(host.as_ref(), *port);
    }

    Ok(())
}

/// Validate serve command arguments
fn validate_serve_args(host: Option<&String>, port: Option<u16>) {
    if let (Some(host_addr), Some(port_num)) = (host, port) {
        // Warn about privileged ports
        if port_num < 1024 && host_addr == "0.0.0.0" {
            eprintln!(
                "Warning: Binding to 0.0.0.0 on port {} requires root privileges",
                port_num
            );
        }

        if host_addr == "localhost" && port_num == 80 {
            eprintln!("Warning: Using port 80 with localhost may conflict with other services");
        }
    }
}
