//! Lookup attributes attached to every stored item.

use std::collections::HashMap;

/// Attribute key holding the service name.
pub const SERVICE_ATTRIBUTE: &str = "service";

/// Attribute key holding the account name.
pub const ACCOUNT_ATTRIBUTE: &str = "account";

/// The `(service, account)` pair that tags an item at creation and finds it
/// again later. Built right before a native call and dropped right after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes<'a> {
    service: &'a str,
    account: &'a str,
}

impl<'a> Attributes<'a> {
    pub fn new(service: &'a str, account: &'a str) -> Self {
        Self { service, account }
    }

    pub fn service(&self) -> &'a str {
        self.service
    }

    pub fn account(&self) -> &'a str {
        self.account
    }

    /// Display label shown by keyring UIs: `service@account`.
    pub fn label(&self) -> String {
        format!("{}@{}", self.service, self.account)
    }

    /// The attribute map in the shape the Secret Service API takes.
    pub fn to_map(&self) -> HashMap<&'a str, &'a str> {
        HashMap::from([
            (SERVICE_ATTRIBUTE, self.service),
            (ACCOUNT_ATTRIBUTE, self.account),
        ])
    }
}
