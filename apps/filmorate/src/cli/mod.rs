//! # Filmorate CLI Module
//!
//! This module implements the CLI interface for Filmorate.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server (default when no command is given)
//! - `check-seed` - Validate a seed file against a fresh catalog
//! - `config` - Print the effective configuration

mod commands;

use crate::config::ServerConfig;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Filmorate - films, likes and friends
///
/// An in-memory catalog where users like films and befriend each other,
/// served over a JSON HTTP API.
#[derive(Parser, Debug)]
#[command(name = "filmorate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config and FILMORATE_HOST)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config and FILMORATE_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON seed file to load before serving
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Load a seed file into an empty catalog and report the result
    CheckSeed {
        /// Path to the seed file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments and the loaded configuration.
pub async fn execute(cli: Cli, mut config: ServerConfig) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port, seed }) => {
            config.apply_overrides(host, port);
            cmd_server(&config, seed.as_deref(), cli.quiet).await
        }
        Some(Commands::CheckSeed { file }) => cmd_check_seed(&file, json_mode),
        Some(Commands::Config) => cmd_config(&config, json_mode),
        None => cmd_server(&config, None, cli.quiet).await,
    }
}
