// src/consts.rs
//! Shared constants: security parameters and defaults

/// AES-256 key size in bytes
pub const KEY_LEN: usize = 32;

/// AES block size, which is also the CBC IV length
pub const IV_LEN: usize = 16;

/// Separates the hex IV from the hex ciphertext in a stored envelope
pub const ENVELOPE_DELIMITER: char = ':';

/// KDF iterations applied when a SQLCipher passphrase is configured
pub const DB_KDF_ITERATIONS: u32 = 256_000;

// Environment overrides
pub const ENV_CONFIG_PATH: &str = "ETV_CONFIG";
pub const ENV_ENCRYPTION_KEY: &str = "ETV_ENCRYPTION_KEY";
pub const ENV_DB_PATH: &str = "ETV_DB_PATH";
pub const ENV_DB_KEY: &str = "ETV_DB_KEY";
pub const ENV_BIND_ADDR: &str = "ETV_BIND_ADDR";
pub const ENV_IDENTITY_HEADER: &str = "ETV_IDENTITY_HEADER";

/// Config file looked up when `ETV_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "todo-vault.toml";

pub const DEFAULT_DB_PATH: &str = "data/todos.db";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Header populated by the upstream auth proxy with the caller's user id
pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";
