//! keytar command-line interface.

pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use keytar_core::config::BackendPreference;
use keytar_core::{Config, ConfigError};
use std::path::PathBuf;

/// Exit status for command-line usage errors (`EX_USAGE`).
///
/// Kept apart from the keychain error codes, which start at 1.
pub const USAGE_EXIT_CODE: u8 = 64;

/// keytar - passwords in the OS credential store
#[derive(Parser)]
#[command(name = "keytar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured backend
    #[arg(long, global = true, value_parser = parse_backend)]
    pub backend: Option<BackendPreference>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_backend(value: &str) -> Result<BackendPreference, String> {
    value.parse()
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Store a password (prompts when no value is given)
    Add(commands::password::SetArgs),

    /// Print a stored password
    Get(commands::password::LookupArgs),

    /// Delete a stored password
    Delete(commands::password::LookupArgs),

    /// Delete any existing password, then store a new one
    Replace(commands::password::SetArgs),

    /// Check configuration and backend availability
    Doctor,

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments and the already-resolved config.
pub fn run(cli: Cli, config: Result<Config, ConfigError>) -> anyhow::Result<()> {
    let Cli {
        config: config_path,
        backend,
        command,
        ..
    } = cli;

    match command {
        Commands::Add(args) => {
            commands::password::add(&commands::password::keychain(config?, backend), args)
        }
        Commands::Get(args) => {
            commands::password::get(&commands::password::keychain(config?, backend), args)
        }
        Commands::Delete(args) => {
            commands::password::delete(&commands::password::keychain(config?, backend), args)
        }
        Commands::Replace(args) => {
            commands::password::replace(&commands::password::keychain(config?, backend), args)
        }
        Commands::Doctor => commands::doctor::run(config, config_path.as_deref(), backend),
        Commands::Config(args) => commands::config::run(args, config, config_path.as_deref()),
        Commands::Version => {
            println!("keytar {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
