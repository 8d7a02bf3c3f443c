// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::consts::{ENV_ENCRYPTION_KEY, IV_LEN, KEY_LEN};

/// Startup-only failures while loading the field encryption key
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("encryption key is missing (set {} or [crypto].encryption_key)", ENV_ENCRYPTION_KEY)]
    Missing,

    #[error("encryption key is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("encryption key must decode to {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl KeyError {
    pub(crate) fn wrong_length(actual: usize) -> Self {
        KeyError::WrongLength {
            expected: KEY_LEN,
            actual,
        }
    }
}

/// A stored envelope could not be turned back into plaintext
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("envelope segment is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("envelope IV must be {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("ciphertext failed to decrypt (bad key, corrupt data or invalid padding)")]
    Decrypt,

    #[error("decrypted title is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl CodecError {
    pub(crate) fn iv_length(actual: usize) -> Self {
        CodecError::InvalidIvLength {
            expected: IV_LEN,
            actual,
        }
    }
}

/// Errors surfaced by the record store
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    /// Absent and not-owned are deliberately the same variant
    #[error("Todo not found")]
    NotFound,

    #[error("stored title is corrupt: {0}")]
    Codec(#[from] CodecError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Stored timestamp is out of range: {0}")]
    Timestamp(i64),
}

/// Failures while assembling the runtime configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
