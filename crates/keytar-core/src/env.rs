//! Environment variable handling.

use std::env;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Environment variable names read by keytar.
pub mod vars {
    /// Base directory override (default `~/.keytar`).
    pub const KEYTAR_HOME: &str = "KEYTAR_HOME";

    /// Config file override.
    pub const KEYTAR_CONFIG: &str = "KEYTAR_CONFIG";

    /// Backend override, same values as `keychain.backend`.
    pub const KEYTAR_BACKEND: &str = "KEYTAR_BACKEND";

    /// Log filter, `EnvFilter` syntax.
    pub const KEYTAR_LOG: &str = "KEYTAR_LOG";
}
