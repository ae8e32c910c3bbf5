//! Store, retrieve, and delete passwords in the operating system's native
//! credential store.
//!
//! A password is identified by a `(service, account)` pair. The platform's
//! store does the actual storage, encryption, and access control; this crate
//! validates input, picks a backend at startup, and maps every outcome onto
//! [`KeychainError`].
//!
//! ```no_run
//! use keytar::{Keychain, KeychainError};
//!
//! let keychain = Keychain::detect();
//! keychain.add_password("mail", "alice@example.com", "s3cr3t")?;
//! let password = keychain.get_password("mail", "alice@example.com")?;
//! assert_eq!(password.expose_secret(), "s3cr3t");
//! keychain.delete_password("mail", "alice@example.com")?;
//! # Ok::<(), KeychainError>(())
//! ```

pub mod attributes;
pub mod backend;
pub mod error;
pub mod keychain;
pub mod validate;

pub use attributes::Attributes;
pub use backend::{Backend, BackendKind, MemoryBackend};
pub use error::{KeychainError, Result};
pub use keychain::{global, init, Keychain};
pub use keytar_core::SecretString;
pub use validate::{is_valid_non_null_utf8, is_valid_non_null_utf8_bytes};
