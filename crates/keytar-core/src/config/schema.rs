//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main keytar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Credential store selection.
    #[serde(default)]
    pub keychain: KeychainConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Keychain configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeychainConfig {
    /// Which native store to use.
    #[serde(default)]
    pub backend: BackendPreference,

    /// Secret Service collection alias that new items are created in.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for KeychainConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::default(),
            collection: default_collection(),
        }
    }
}

fn default_collection() -> String {
    "default".to_string()
}

/// Requested credential store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendPreference {
    /// Probe the platform's native store.
    #[default]
    Auto,
    /// freedesktop Secret Service (Linux).
    SecretService,
    /// Keychain Services (macOS).
    MacosKeychain,
    /// Process-local, non-persistent store.
    Memory,
    /// No backend; every operation fails as unsupported.
    None,
}

impl BackendPreference {
    pub const ALL: [BackendPreference; 5] = [
        BackendPreference::Auto,
        BackendPreference::SecretService,
        BackendPreference::MacosKeychain,
        BackendPreference::Memory,
        BackendPreference::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendPreference::Auto => "auto",
            BackendPreference::SecretService => "secret-service",
            BackendPreference::MacosKeychain => "macos-keychain",
            BackendPreference::Memory => "memory",
            BackendPreference::None => "none",
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.as_str()).collect();
                format!("unknown backend '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
