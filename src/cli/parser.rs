//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// A read-only configuration snapshot service
#[derive(Parser, Debug)]
#[command(name = "confview-rs")]
#[command(about = "A read-only configuration snapshot service")]
#[command(long_about = "
Confview-rs loads application configuration from layered TOML files and
environment variables at startup and exposes the resulting snapshot as
read-only JSON over HTTP.

EXAMPLES:
    # Start the server with default configuration
    confview-rs serve

    # Start server on custom host and port
    confview-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    confview-rs --config /path/to/config.toml serve

    # Run in development mode with verbose logging
    confview-rs --env development --verbose serve

    # Check configuration without starting server
    confview-rs serve --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the default
    /// layered loading. The file should be in TOML format and contain valid
    /// configuration sections, including a complete [app] snapshot.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/confview-rs/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// This affects which configuration files are loaded and default settings.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, showing detailed information
    /// about application operations. Useful for troubleshooting.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only, hiding informational messages.
    /// Useful for production deployments or automated scripts.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the configured settings. The server
    /// binds to the specified host and port, loads the configuration
    /// snapshot, and begins serving it on GET /configuration.
    ///
    /// Examples:
    ///   confview-rs serve                           # Start with defaults
    ///   confview-rs serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   confview-rs serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// The network interface address where the server will listen for connections.
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections from any interface.
        /// Must be a valid IPv4 address, hostname, or 'localhost'.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// The TCP port where the server will accept HTTP connections.
        /// Must be between 1 and 65535. Ports below 1024 typically require root privileges.
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Set the logging verbosity for this server instance.
        /// This overrides both configuration file settings and global --verbose/--quiet flags.
        ///
        /// Available levels: error, warn, info, debug, trace
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Performs a complete configuration validation check without starting the server.
        /// Useful for testing configuration changes or deployment validation.
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate CLI arguments and provide detailed error messages
    ///
    /// This method performs additional validation beyond what clap provides,
    /// ensuring that all argument combinations are valid and providing
    /// specific error messages for validation failures.
    pub fn validate(&self) -> Result<(), String> {
        // Validate command-specific arguments
        if let Some(Commands::Serve {
            host,
            port,
            log_level: _,
            dry_run: _,
        }) = &self.command
        {
            if let (Some(host_addr), Some(port_num)) = (host, port)
                && host_addr == "0.0.0.0"
                && *port_num < 1024
            {
                return Err(
                    "Warning: Binding to 0.0.0.0 on a privileged port (< 1024) typically requires root privileges"
                        .to_string(),
                );
            }
        }

        // Validate global argument combinations
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
