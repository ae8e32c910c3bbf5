//! Diagnostic command.

use console::{style, Emoji};
use keytar::Keychain;
use keytar_core::config::BackendPreference;
use keytar_core::{Config, ConfigError};
use std::path::Path;

use super::config::config_path;

static CHECK: Emoji = Emoji("✓", "+");
static CROSS: Emoji = Emoji("✗", "x");
static WARN: Emoji = Emoji("⚠", "!");

/// Run the doctor command.
///
/// Fails only when no usable backend could be selected.
pub fn run(
    config: Result<Config, ConfigError>,
    explicit_path: Option<&Path>,
    backend: Option<BackendPreference>,
) -> anyhow::Result<()> {
    println!("keytar doctor\n");

    println!("Checking configuration...");

    match config_path(explicit_path) {
        Ok(path) if path.exists() => {
            println!("  {} Config file: {}", style(CHECK).green(), path.display());
        }
        Ok(path) => {
            println!(
                "  {} No config file at {} (using defaults)",
                style(WARN).yellow(),
                path.display()
            );
        }
        Err(e) => {
            println!("  {} Cannot determine config path: {}", style(CROSS).red(), e);
        }
    }

    let mut config = match config {
        Ok(config) => {
            println!("  {} Configuration valid", style(CHECK).green());
            config
        }
        Err(e) => {
            println!("  {} Configuration error: {}", style(CROSS).red(), e);
            println!("    Falling back to defaults for the backend check");
            Config::default()
        }
    };
    if let Some(pref) = backend {
        config.keychain.backend = pref;
    }

    println!("\nChecking credential store...");
    println!(
        "  Requested backend: {} (collection alias: {})",
        config.keychain.backend, config.keychain.collection
    );

    let keychain = Keychain::from_config(&config.keychain);
    match keychain.backend_kind() {
        Some(kind) if kind.is_persistent() => {
            println!("  {} Backend available: {}", style(CHECK).green(), kind);
            Ok(())
        }
        Some(kind) => {
            println!(
                "  {} Backend available: {} (passwords are not persisted)",
                style(WARN).yellow(),
                kind
            );
            Ok(())
        }
        None => {
            println!("  {} No credential store available", style(CROSS).red());
            if cfg!(target_os = "linux") {
                println!("    Is a Secret Service provider (gnome-keyring, KWallet) running?");
            }
            Err(keytar::KeychainError::Unsupported.into())
        }
    }
}
