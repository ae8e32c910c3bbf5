//! Config save/load roundtrip integration tests.
//!
//! These verify that configuration can be serialized, written to disk,
//! loaded back, and turned into a working keychain.

use keytar::{BackendKind, Keychain};
use keytar_core::config::BackendPreference;
use keytar_core::Config;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keytar.json5");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.keychain, config.keychain);
    assert_eq!(loaded.logging.level, config.logging.level);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keytar.json5");

    let mut config = Config::default();
    config.keychain.backend = BackendPreference::Memory;
    config.keychain.collection = "session".to_string();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.keychain.backend, BackendPreference::Memory);
    assert_eq!(loaded.keychain.collection, "session");
}

#[test]
fn test_loaded_config_builds_keychain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keytar.json5");
    std::fs::write(&path, r#"{ keychain: { backend: "memory" } }"#).unwrap();

    let config = Config::load(&path).unwrap();
    let keychain = Keychain::from_config(&config.keychain);
    assert_eq!(keychain.backend_kind(), Some(BackendKind::Memory));
    keychain.add_password("mail", "alice", "pw").unwrap();
}

#[test]
fn test_disabled_backend_builds_unsupported_keychain() {
    let config = Config::parse(r#"{ keychain: { backend: "none" } }"#).unwrap();
    let keychain = Keychain::from_config(&config.keychain);
    assert!(!keychain.is_supported());
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/keytar.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}
