// tests/config_tests.rs
//! TOML loading and startup key validation
//!
//! File parsing goes through `load_from`, which never reads the process
//! environment; overrides are exercised with an injected lookup.

mod common;

use std::collections::HashMap;
use std::fs;

use common::random_key_b64;
use encrypted_todo_vault::config::{load_from, Config};
use encrypted_todo_vault::aliases::{DbPassphrase, EncodedKey};
use encrypted_todo_vault::consts::{
    DEFAULT_BIND_ADDR, DEFAULT_IDENTITY_HEADER, ENV_BIND_ADDR, ENV_DB_KEY, ENV_ENCRYPTION_KEY,
};
use encrypted_todo_vault::KeyError;
use tempfile::tempdir;

#[test]
fn test_toml_file_populates_all_sections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo-vault.toml");
    let key = random_key_b64();
    fs::write(
        &path,
        format!(
            r#"
            [crypto]
            encryption_key = "{key}"

            [storage]
            db_path = "/var/lib/todos/todos.db"
            db_key = "db-secret"

            [server]
            bind_addr = "0.0.0.0:8080"
            identity_header = "x-auth-user"
            "#
        ),
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(
        config
            .crypto
            .encryption_key
            .as_ref()
            .map(|k| k.expose_secret().as_str()),
        Some(key.as_str())
    );
    assert_eq!(
        config.storage.db_path.to_str(),
        Some("/var/lib/todos/todos.db")
    );
    assert!(config.db_passphrase().is_some());
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.server.identity_header, "x-auth-user");
    assert!(config.field_codec().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[server]\nbind_addr = \"127.0.0.1:9999\"\n").unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
    assert_eq!(config.server.identity_header, DEFAULT_IDENTITY_HEADER);
    assert!(config.storage.db_key.is_none());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nbind_addr = ").unwrap();

    assert!(load_from(&path).is_err());
}

#[test]
fn test_defaults_have_no_key_and_fail_startup() {
    let config = Config::default();
    assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR);
    assert!(matches!(config.field_codec(), Err(KeyError::Missing)));
}

#[test]
fn test_debug_output_redacts_secrets() {
    let mut config = Config::default();
    config.crypto.encryption_key = Some(EncodedKey::new::<String>("c2VjcmV0LWtleS1tYXRlcmlhbA==".into()));
    config.storage.db_key = Some(DbPassphrase::new::<String>("hunter2".into()));

    let rendered = format!("{config:?}");
    assert!(!rendered.contains("c2VjcmV0"));
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("REDACTED"));
}

#[test]
fn test_overrides_take_precedence_over_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo-vault.toml");
    let file_key = random_key_b64();
    let env_key = random_key_b64();
    fs::write(
        &path,
        format!(
            "[crypto]\nencryption_key = \"{file_key}\"\n\n[server]\nbind_addr = \"127.0.0.1:4000\"\nidentity_header = \"x-from-file\"\n"
        ),
    )
    .unwrap();

    let env: HashMap<&str, String> = HashMap::from([
        (ENV_ENCRYPTION_KEY, env_key.clone()),
        (ENV_BIND_ADDR, "0.0.0.0:5000".to_string()),
        (ENV_DB_KEY, "env-db-secret".to_string()),
    ]);

    let mut config = load_from(&path).unwrap();
    config.apply_overrides(|name| env.get(name).cloned());

    let expected = common::codec_from(&env_key);
    let codec = config.field_codec().unwrap();
    assert_eq!(expected.decrypt(&codec.encrypt("check")).unwrap(), "check");
    assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
    // Unset names leave the file values alone
    assert_eq!(config.server.identity_header, "x-from-file");
    assert_eq!(
        config.db_passphrase().map(|p| p.expose_secret().as_str()),
        Some("env-db-secret")
    );
}

#[test]
fn test_load_from_ignores_overrides_until_applied() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("todo-vault.toml");
    fs::write(&path, "[server]\nbind_addr = \"127.0.0.1:4000\"\n").unwrap();

    let mut config = load_from(&path).unwrap();
    assert_eq!(config.server.bind_addr, "127.0.0.1:4000");

    config.apply_overrides(|_| None);
    assert_eq!(config.server.bind_addr, "127.0.0.1:4000");
    assert!(config.crypto.encryption_key.is_none());
}
