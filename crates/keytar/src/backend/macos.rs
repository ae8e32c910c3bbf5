//! macOS Keychain Services backend.
//!
//! Generic passwords keyed by service and account. The Keychain derives its
//! own item label, so `service@account` is not recorded here.

use keytar_core::SecretString;
use security_framework::base::Error as SfError;
use security_framework::passwords::{
    delete_generic_password, get_generic_password, set_generic_password,
};
use tracing::{debug, warn};

use super::{Backend, BackendKind};
use crate::attributes::Attributes;
use crate::error::{KeychainError, Result};

/// `errSecItemNotFound`.
const ERR_SEC_ITEM_NOT_FOUND: i32 = -25300;

/// Backend storing generic passwords in the user's default keychain.
#[derive(Debug, Clone, Default)]
pub struct MacosKeychainBackend;

impl MacosKeychainBackend {
    pub fn new() -> Self {
        Self
    }
}

fn is_not_found(e: &SfError) -> bool {
    e.code() == ERR_SEC_ITEM_NOT_FOUND
}

impl Backend for MacosKeychainBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::MacosKeychain
    }

    fn add_password(&self, attributes: &Attributes<'_>, password: &str) -> Result<()> {
        set_generic_password(
            attributes.service(),
            attributes.account(),
            password.as_bytes(),
        )
        .map_err(|e| {
            warn!("keychain write failed: {}", e);
            KeychainError::Unknown
        })
    }

    fn get_password(&self, attributes: &Attributes<'_>) -> Result<SecretString> {
        match get_generic_password(attributes.service(), attributes.account()) {
            Ok(data) => SecretString::from_utf8(data).ok_or_else(|| {
                warn!("keychain data is not valid UTF-8");
                KeychainError::Unknown
            }),
            Err(e) if is_not_found(&e) => Err(KeychainError::NotFound),
            Err(e) => {
                // Lookup failures other than a miss still read as "not found".
                debug!("keychain read failed: {}", e);
                Err(KeychainError::NotFound)
            }
        }
    }

    fn delete_password(&self, attributes: &Attributes<'_>) -> Result<()> {
        match delete_generic_password(attributes.service(), attributes.account()) {
            Ok(()) => Ok(()),
            Err(e) if is_not_found(&e) => Err(KeychainError::NotFound),
            Err(e) => {
                warn!("keychain delete failed: {}", e);
                Err(KeychainError::Unknown)
            }
        }
    }
}
