// src/config/defaults.rs
use crate::config::app::{CryptoSettings, ServerSettings, StorageSettings};
use crate::consts::{DEFAULT_BIND_ADDR, DEFAULT_DB_PATH, DEFAULT_IDENTITY_HEADER};

pub fn default_crypto() -> CryptoSettings {
    // No built-in key: a missing key must stop the process at startup
    CryptoSettings {
        encryption_key: None,
    }
}

pub fn default_storage() -> StorageSettings {
    StorageSettings {
        db_path: DEFAULT_DB_PATH.into(),
        db_key: None,
    }
}

pub fn default_server() -> ServerSettings {
    ServerSettings {
        bind_addr: DEFAULT_BIND_ADDR.into(),
        identity_header: DEFAULT_IDENTITY_HEADER.into(),
    }
}

impl Default for CryptoSettings {
    fn default() -> Self {
        default_crypto()
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        default_storage()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        default_server()
    }
}
