// src/crypto/encrypt.rs
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};

use super::{Aes256CbcEnc, FieldCodec};
use crate::consts::{ENVELOPE_DELIMITER, IV_LEN};

impl FieldCodec {
    /// Encrypt plaintext → `"<ivHex>:<cipherHex>"` envelope
    ///
    /// Draws a fresh IV from the thread-local CSPRNG on every call, so equal
    /// plaintexts never share an envelope.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let iv: [u8; IV_LEN] = rand::random();
        let ciphertext = Aes256CbcEnc::new(self.key.expose_secret().into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut envelope = String::with_capacity((IV_LEN + ciphertext.len()) * 2 + 1);
        envelope.push_str(&hex::encode(iv));
        envelope.push(ENVELOPE_DELIMITER);
        envelope.push_str(&hex::encode(ciphertext));
        envelope
    }
}
