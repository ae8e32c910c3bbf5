//! Dispatch layer in front of the active backend.
//!
//! A [`Keychain`] holds at most one backend, chosen once. Every operation
//! checks that a backend exists, validates its arguments, and only then
//! reaches the native store.
//!
//! Construct one explicitly and pass it to call sites where possible. For
//! code that wants a process-wide default, [`init`] sets one and [`global`]
//! returns it, probing the platform on first use if `init` was never called.

use std::fmt;
use std::sync::Arc;

use keytar_core::config::KeychainConfig;
use keytar_core::SecretString;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::attributes::Attributes;
use crate::backend::{self, Backend, BackendKind};
use crate::error::{KeychainError, Result};
use crate::validate::validate_all;

static GLOBAL: OnceCell<Keychain> = OnceCell::new();

/// Entry point for storing, reading, and deleting passwords.
#[derive(Clone)]
pub struct Keychain {
    backend: Option<Arc<dyn Backend>>,
}

impl Keychain {
    /// Use `backend` for every operation.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self::from_backend(Arc::new(backend))
    }

    /// Share an existing backend.
    pub fn from_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A keychain with no backend. Every operation fails with
    /// [`KeychainError::Unsupported`].
    pub fn unsupported() -> Self {
        Self { backend: None }
    }

    /// Probe the platform's native store.
    pub fn detect() -> Self {
        Self::from_config(&KeychainConfig::default())
    }

    /// Select a backend according to `config`.
    pub fn from_config(config: &KeychainConfig) -> Self {
        Self {
            backend: backend::select(config),
        }
    }

    /// Whether a backend is registered.
    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    /// The registered backend's kind, if any.
    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.backend.as_ref().map(|b| b.kind())
    }

    fn backend(&self) -> Result<&dyn Backend> {
        self.backend.as_deref().ok_or(KeychainError::Unsupported)
    }

    /// Store `password` for `(service, account)`, overwriting any existing
    /// value.
    pub fn add_password(&self, service: &str, account: &str, password: &str) -> Result<()> {
        let backend = self.backend()?;
        validate_all(&[service, account, password])?;

        debug!(service, account, backend = %backend.kind(), "add password");
        backend.add_password(&Attributes::new(service, account), password)
    }

    /// Read the password stored for `(service, account)`.
    pub fn get_password(&self, service: &str, account: &str) -> Result<SecretString> {
        let backend = self.backend()?;
        validate_all(&[service, account])?;

        debug!(service, account, backend = %backend.kind(), "get password");
        backend.get_password(&Attributes::new(service, account))
    }

    /// Delete the password stored for `(service, account)`.
    ///
    /// Returns [`KeychainError::NotFound`] if nothing is stored, so a second
    /// consecutive delete fails the same way a lookup would.
    pub fn delete_password(&self, service: &str, account: &str) -> Result<()> {
        let backend = self.backend()?;
        validate_all(&[service, account])?;

        debug!(service, account, backend = %backend.kind(), "delete password");
        backend.delete_password(&Attributes::new(service, account))
    }

    /// Delete any existing password for `(service, account)`, then store
    /// `password`.
    pub fn replace_password(&self, service: &str, account: &str, password: &str) -> Result<()> {
        let backend = self.backend()?;
        validate_all(&[service, account, password])?;

        debug!(service, account, backend = %backend.kind(), "replace password");
        let attributes = Attributes::new(service, account);
        match backend.delete_password(&attributes) {
            Ok(()) | Err(KeychainError::NotFound) => {}
            Err(e) => return Err(e),
        }
        backend.add_password(&attributes, password)
    }
}

impl fmt::Debug for Keychain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keychain")
            .field("backend", &self.backend_kind())
            .finish()
    }
}

/// Register the process-wide default keychain.
///
/// Succeeds at most once; later calls hand the rejected keychain back.
pub fn init(keychain: Keychain) -> std::result::Result<(), Keychain> {
    GLOBAL.set(keychain)
}

/// The process-wide default keychain, detected on first use if [`init`] was
/// never called.
pub fn global() -> &'static Keychain {
    GLOBAL.get_or_init(Keychain::detect)
}
