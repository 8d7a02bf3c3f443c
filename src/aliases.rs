// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout encrypted-todo-vault.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(FieldKey32, 32); // 256-bit AES key for title encryption

// Dynamic secrets
dynamic_alias!(EncodedKey, String); // base64 key text as read from config/env
dynamic_alias!(DbPassphrase, String); // optional SQLCipher passphrase
dynamic_alias!(KeyBytes, Vec<u8>); // decoded key material before the length check
