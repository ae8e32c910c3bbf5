//! Process-local backend.
//!
//! Nothing is persisted. Useful on headless hosts where no keyring daemon
//! runs, and as a stand-in native layer in tests: [`MemoryBackend::native_calls`]
//! reports how many times the dispatch layer reached it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use keytar_core::SecretString;
use parking_lot::Mutex;
use tracing::debug;

use super::{Backend, BackendKind};
use crate::attributes::Attributes;
use crate::error::{KeychainError, Result};

struct MemoryItem {
    label: String,
    secret: SecretString,
}

/// In-memory credential store keyed by `(service, account)`.
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<(String, String), MemoryItem>>,
    calls: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of backend operations invoked so far.
    pub fn native_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Label recorded for an item, if present.
    pub fn label(&self, service: &str, account: &str) -> Option<String> {
        self.items
            .lock()
            .get(&key(&Attributes::new(service, account)))
            .map(|item| item.label.clone())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn key(attributes: &Attributes<'_>) -> (String, String) {
    (
        attributes.service().to_string(),
        attributes.account().to_string(),
    )
}

impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn add_password(&self, attributes: &Attributes<'_>, password: &str) -> Result<()> {
        self.record_call();
        let item = MemoryItem {
            label: attributes.label(),
            secret: SecretString::new(password),
        };
        let replaced = self.items.lock().insert(key(attributes), item).is_some();
        debug!(replaced, "stored in-memory item");
        Ok(())
    }

    fn get_password(&self, attributes: &Attributes<'_>) -> Result<SecretString> {
        self.record_call();
        self.items
            .lock()
            .get(&key(attributes))
            .map(|item| item.secret.clone())
            .ok_or(KeychainError::NotFound)
    }

    fn delete_password(&self, attributes: &Attributes<'_>) -> Result<()> {
        self.record_call();
        match self.items.lock().remove(&key(attributes)) {
            Some(_) => Ok(()),
            None => Err(KeychainError::NotFound),
        }
    }
}
