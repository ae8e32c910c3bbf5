//! Configuration management commands.

use clap::Args;
use keytar_core::{paths, Config, ConfigError};
use std::path::{Path, PathBuf};

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration
    Validate,
}

/// The config file in use: `--config`, else the default location.
pub fn config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(paths::config_file()?),
    }
}

/// Run the config command.
pub fn run(
    args: ConfigArgs,
    config: Result<Config, ConfigError>,
    explicit_path: Option<&Path>,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = config?;
            println!("{}", config.to_json5()?);
        }

        ConfigCommand::Init { force } => {
            let path = config_path(explicit_path)?;

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {:?}. Use --force to overwrite.",
                    path
                );
            }

            Config::default().save(&path)?;
            println!("Created config file: {:?}", path);
        }

        ConfigCommand::Path => {
            let path = config_path(explicit_path)?;
            println!("{}", path.display());
        }

        ConfigCommand::Validate => match config {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => anyhow::bail!("Configuration error: {}", e),
        },
    }

    Ok(())
}
