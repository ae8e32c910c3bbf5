//! # keytar-core
//!
//! Shared plumbing for the keytar crates:
//!
//! - **Configuration**: JSON5 config schema, loading, and validation
//! - **Secrets**: a zeroizing password container
//! - **Utilities**: path resolution and environment handling

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use secret::SecretString;
