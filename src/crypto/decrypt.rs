// src/crypto/decrypt.rs
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};

use super::{is_envelope, Aes256CbcDec, FieldCodec};
use crate::consts::{ENVELOPE_DELIMITER, IV_LEN};
use crate::error::CodecError;

impl FieldCodec {
    /// Decrypt an envelope → plaintext
    ///
    /// Values without the delimiter are legacy plaintext rows and come back
    /// unchanged. Everything after the first delimiter is the ciphertext.
    pub fn decrypt(&self, stored: &str) -> Result<String, CodecError> {
        if !is_envelope(stored) {
            return Ok(stored.to_owned());
        }

        let (iv_hex, cipher_hex) = stored
            .split_once(ENVELOPE_DELIMITER)
            .unwrap_or((stored, ""));

        let iv_bytes = hex::decode(iv_hex)?;
        let iv = <[u8; IV_LEN]>::try_from(iv_bytes.as_slice())
            .map_err(|_| CodecError::iv_length(iv_bytes.len()))?;
        let ciphertext = hex::decode(cipher_hex)?;

        let plaintext = Aes256CbcDec::new(self.key.expose_secret().into(), &iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CodecError::Decrypt)?;

        Ok(String::from_utf8(plaintext)?)
    }
}
