//! Error types for keychain operations.

use thiserror::Error;

/// Outcome of a failed keychain operation.
///
/// Native failures are deliberately collapsed into [`KeychainError::Unknown`];
/// adapters log the underlying cause before returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeychainError {
    #[error("keychain not supported on this platform")]
    Unsupported,

    #[error("invalid value")]
    InvalidValue,

    #[error("password not found")]
    NotFound,

    #[error("unknown keychain error")]
    Unknown,
}

impl KeychainError {
    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            KeychainError::Unknown => 1,
            KeychainError::NotFound => 2,
            KeychainError::InvalidValue => 3,
            KeychainError::Unsupported => 4,
        }
    }
}

/// Convenience result alias for keychain operations.
pub type Result<T> = std::result::Result<T, KeychainError>;
