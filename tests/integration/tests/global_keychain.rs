//! Process-wide default keychain.
//!
//! Kept in its own test binary: the default can be set only once per
//! process.

use keytar::{Keychain, KeychainError, MemoryBackend};

#[test]
fn test_init_once_then_global() {
    assert!(keytar::init(Keychain::new(MemoryBackend::new())).is_ok());

    let rejected = keytar::init(Keychain::unsupported());
    assert!(rejected.is_err());

    let keychain = keytar::global();
    assert_eq!(keychain.backend_kind(), Some(keytar::BackendKind::Memory));

    keychain.add_password("mail", "alice", "s3cr3t").unwrap();
    assert_eq!(
        keytar::global()
            .get_password("mail", "alice")
            .unwrap()
            .expose_secret(),
        "s3cr3t"
    );
    assert_eq!(
        keytar::global().delete_password("mail", "bob"),
        Err(KeychainError::NotFound)
    );
}
