//! Platform adapters and startup selection.
//!
//! Each supported platform gets one [`Backend`] implementation:
//! - Linux: freedesktop Secret Service over D-Bus
//! - macOS: Keychain Services
//! - All platforms: a process-local [`MemoryBackend`]
//!
//! Backends receive arguments that already passed validation.

use std::fmt;
use std::sync::Arc;

use keytar_core::config::{BackendPreference, KeychainConfig};
use keytar_core::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::error::Result;

pub mod memory;

#[cfg(target_os = "linux")]
pub mod secret_service;

#[cfg(target_os = "macos")]
pub mod macos;

pub use memory::MemoryBackend;

#[cfg(target_os = "linux")]
pub use secret_service::SecretServiceBackend;

#[cfg(target_os = "macos")]
pub use macos::MacosKeychainBackend;

/// A native credential store.
///
/// Implementations collapse native failures to [`KeychainError::Unknown`]
/// and report misses as [`KeychainError::NotFound`].
///
/// [`KeychainError::Unknown`]: crate::KeychainError::Unknown
/// [`KeychainError::NotFound`]: crate::KeychainError::NotFound
pub trait Backend: Send + Sync {
    /// Which store this is.
    fn kind(&self) -> BackendKind;

    /// Create or overwrite the item identified by `attributes`.
    fn add_password(&self, attributes: &Attributes<'_>, password: &str) -> Result<()>;

    /// Read the secret of the first item matching `attributes`.
    fn get_password(&self, attributes: &Attributes<'_>) -> Result<SecretString>;

    /// Delete the first item matching `attributes`.
    fn delete_password(&self, attributes: &Attributes<'_>) -> Result<()>;
}

/// Identifies a backend implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    SecretService,
    MacosKeychain,
    Memory,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::SecretService => "secret-service",
            BackendKind::MacosKeychain => "macos-keychain",
            BackendKind::Memory => "memory",
        }
    }

    /// Whether items outlive the process.
    pub fn is_persistent(&self) -> bool {
        !matches!(self, BackendKind::Memory)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick a backend for `config`, probing the native store where needed.
///
/// Returns `None` when the requested store does not exist on this platform
/// or cannot be reached.
pub fn select(config: &KeychainConfig) -> Option<Arc<dyn Backend>> {
    let selected = match config.backend {
        BackendPreference::Auto => probe_platform(&config.collection),
        BackendPreference::SecretService => probe_secret_service(&config.collection),
        BackendPreference::MacosKeychain => probe_macos(),
        BackendPreference::Memory => Some(Arc::new(MemoryBackend::new()) as Arc<dyn Backend>),
        BackendPreference::None => None,
    };

    match &selected {
        Some(backend) => debug!(backend = %backend.kind(), "selected keychain backend"),
        None if config.backend == BackendPreference::None => {
            debug!("keychain backend disabled by configuration")
        }
        None => warn!(
            requested = %config.backend,
            "no keychain backend available; all operations will fail as unsupported"
        ),
    }

    selected
}

/// The platform's native store, if it is reachable.
pub fn probe_platform(collection: &str) -> Option<Arc<dyn Backend>> {
    if cfg!(target_os = "macos") {
        probe_macos()
    } else {
        probe_secret_service(collection)
    }
}

#[cfg(target_os = "linux")]
fn probe_secret_service(collection: &str) -> Option<Arc<dyn Backend>> {
    SecretServiceBackend::probe(collection).map(|b| Arc::new(b) as Arc<dyn Backend>)
}

#[cfg(not(target_os = "linux"))]
fn probe_secret_service(_collection: &str) -> Option<Arc<dyn Backend>> {
    debug!("secret service is only available on Linux");
    None
}

#[cfg(target_os = "macos")]
fn probe_macos() -> Option<Arc<dyn Backend>> {
    Some(Arc::new(MacosKeychainBackend::new()))
}

#[cfg(not(target_os = "macos"))]
fn probe_macos() -> Option<Arc<dyn Backend>> {
    debug!("keychain services are only available on macOS");
    None
}
