// src/crypto/mod.rs
//! Field-level encryption codec for task titles
//!
//! Titles are stored as `"<ivHex>:<cipherHex>"` envelopes: AES-256-CBC with
//! PKCS#7 padding and a fresh random IV per call. The key is loaded once at
//! startup and handed to [`FieldCodec`] by value; nothing here reads ambient
//! global state.

mod decrypt;
mod encrypt;
mod key;

use std::fmt;

use crate::aliases::FieldKey32;
use crate::consts::ENVELOPE_DELIMITER;

pub use key::decode_field_key;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypts and decrypts a single text field under one process-wide key
pub struct FieldCodec {
    key: FieldKey32,
}

impl FieldCodec {
    pub fn new(key: FieldKey32) -> Self {
        Self { key }
    }

    /// Build a codec from base64 key material (fails on absent or wrong-length keys)
    pub fn from_base64(encoded: &str) -> Result<Self, crate::error::KeyError> {
        Ok(Self::new(decode_field_key(encoded)?))
    }
}

impl fmt::Debug for FieldCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCodec")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// True when `stored` carries the IV/ciphertext delimiter
#[inline]
pub fn is_envelope(stored: &str) -> bool {
    stored.contains(ENVELOPE_DELIMITER)
}
