// src/crypto/key.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::{FieldKey32, KeyBytes};
use crate::consts::KEY_LEN;
use crate::error::KeyError;

/// Decode base64 key material into a zeroizing 256-bit key
///
/// Blank input counts as a missing key.
pub fn decode_field_key(encoded: &str) -> Result<FieldKey32, KeyError> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return Err(KeyError::Missing);
    }

    let raw = KeyBytes::new(STANDARD.decode(trimmed)?);
    let bytes = raw.expose_secret();
    match <[u8; KEY_LEN]>::try_from(bytes.as_slice()) {
        Ok(key) => Ok(FieldKey32::new(key)),
        Err(_) => Err(KeyError::wrong_length(bytes.len())),
    }
}
