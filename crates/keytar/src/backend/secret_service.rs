//! freedesktop Secret Service backend (gnome-keyring, KWallet).
//!
//! Items are generic secrets tagged with `service` and `account`
//! attributes and labelled `service@account`. New items land in the
//! collection with the configured alias; searches span every collection.
//! A D-Bus session is opened per operation and closed when it returns.

use dbus_secret_service::{Collection, EncryptionType, Error as SsError, Item, SecretService};
use keytar_core::SecretString;
use tracing::{debug, warn};

use super::{Backend, BackendKind};
use crate::attributes::Attributes;
use crate::error::{KeychainError, Result};

const CONTENT_TYPE: &str = "text/plain";
const DEFAULT_ALIAS: &str = "default";

/// Backend talking to the Secret Service daemon on the session bus.
#[derive(Debug, Clone)]
pub struct SecretServiceBackend {
    collection: String,
}

impl SecretServiceBackend {
    /// Connect once to check a Secret Service provider is reachable.
    ///
    /// Returns `None` if the session bus or the service is unavailable.
    pub fn probe(collection: impl Into<String>) -> Option<Self> {
        match connect() {
            Ok(_) => Some(Self {
                collection: collection.into(),
            }),
            Err(e) => {
                debug!("secret service unavailable: {}", e);
                None
            }
        }
    }

    fn target_collection<'a>(
        &self,
        ss: &'a SecretService,
    ) -> std::result::Result<Collection<'a>, SsError> {
        let collection = if self.collection == DEFAULT_ALIAS {
            ss.get_default_collection()?
        } else {
            match ss.get_collection_by_alias(&self.collection) {
                Ok(c) => c,
                Err(SsError::NoResult) => {
                    debug!(alias = %self.collection, "creating secret service collection");
                    ss.create_collection(&self.collection, &self.collection)?
                }
                Err(e) => return Err(e),
            }
        };
        if collection.is_locked()? {
            collection.unlock()?;
        }
        Ok(collection)
    }
}

fn connect() -> std::result::Result<SecretService, SsError> {
    SecretService::connect(EncryptionType::Dh)
}

fn open_session() -> Result<SecretService> {
    connect().map_err(|e| {
        warn!("secret service connect failed: {}", e);
        KeychainError::Unknown
    })
}

/// First item matching `attributes`, unlocking it if needed.
///
/// `Ok(None)` means the search succeeded with zero matches.
fn find_first<'a>(
    ss: &'a SecretService,
    attributes: &Attributes<'_>,
) -> std::result::Result<Option<Item<'a>>, SsError> {
    let found = ss.search_items(attributes.to_map())?;
    if let Some(item) = found.unlocked.into_iter().next() {
        return Ok(Some(item));
    }
    match found.locked.into_iter().next() {
        Some(item) => {
            item.unlock()?;
            Ok(Some(item))
        }
        None => Ok(None),
    }
}

impl Backend for SecretServiceBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::SecretService
    }

    fn add_password(&self, attributes: &Attributes<'_>, password: &str) -> Result<()> {
        let ss = open_session()?;
        let collection = self.target_collection(&ss).map_err(|e| {
            warn!(alias = %self.collection, "secret service collection unavailable: {}", e);
            KeychainError::Unknown
        })?;

        collection
            .create_item(
                &attributes.label(),
                attributes.to_map(),
                password.as_bytes(),
                true,
                CONTENT_TYPE,
            )
            .map_err(|e| {
                warn!("secret service create_item failed: {}", e);
                KeychainError::Unknown
            })?;
        Ok(())
    }

    fn get_password(&self, attributes: &Attributes<'_>) -> Result<SecretString> {
        let ss = open_session()?;
        let item = lookup_match(find_first(&ss, attributes))?;

        let bytes = item.get_secret().map_err(|e| {
            warn!("secret service get_secret failed: {}", e);
            KeychainError::Unknown
        })?;
        decode_secret(bytes)
    }

    fn delete_password(&self, attributes: &Attributes<'_>) -> Result<()> {
        let ss = open_session()?;
        let item = delete_match(find_first(&ss, attributes))?;

        item.delete().map_err(|e| {
            warn!("secret service delete failed: {}", e);
            KeychainError::Unknown
        })
    }
}

/// Outcome of the search behind a read. A failed search reads as a miss.
fn lookup_match<T>(found: std::result::Result<Option<T>, SsError>) -> Result<T> {
    match found {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(KeychainError::NotFound),
        Err(e) => {
            debug!("secret service search failed: {}", e);
            Err(KeychainError::NotFound)
        }
    }
}

/// Outcome of the search behind a delete. The item may still exist when
/// the search fails, so that is not reported as a miss.
fn delete_match<T>(found: std::result::Result<Option<T>, SsError>) -> Result<T> {
    match found {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(KeychainError::NotFound),
        Err(e) => {
            warn!("secret service search failed: {}", e);
            Err(KeychainError::Unknown)
        }
    }
}

fn decode_secret(bytes: Vec<u8>) -> Result<SecretString> {
    SecretString::from_utf8(bytes).ok_or_else(|| {
        warn!("stored secret is not valid UTF-8");
        KeychainError::Unknown
    })
}
