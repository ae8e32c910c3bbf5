//! Input validation shared by every backend.
//!
//! Native stores take NUL-terminated strings, so an embedded NUL would
//! silently truncate a value. Everything is checked here before any backend
//! is reached.

use crate::error::{KeychainError, Result};
use tracing::debug;

/// Returns true if `value` is non-empty and contains no NUL characters.
///
/// A `&str` is UTF-8 by construction; use
/// [`is_valid_non_null_utf8_bytes`] for raw input.
pub fn is_valid_non_null_utf8(value: &str) -> bool {
    !value.is_empty() && !value.contains('\0')
}

/// Returns true if `bytes` decode as UTF-8 and satisfy
/// [`is_valid_non_null_utf8`].
pub fn is_valid_non_null_utf8_bytes(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok_and(is_valid_non_null_utf8)
}

/// Check every argument, failing with [`KeychainError::InvalidValue`] if any
/// one is invalid.
pub fn validate_all(values: &[&str]) -> Result<()> {
    match values.iter().position(|v| !is_valid_non_null_utf8(v)) {
        Some(index) => {
            debug!(argument = index, "rejected invalid keychain argument");
            Err(KeychainError::InvalidValue)
        }
        None => Ok(()),
    }
}
