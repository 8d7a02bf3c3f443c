// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::aliases::{DbPassphrase, EncodedKey, FieldKey32};
use crate::consts::{
    DEFAULT_CONFIG_PATH, ENV_BIND_ADDR, ENV_CONFIG_PATH, ENV_DB_KEY, ENV_DB_PATH,
    ENV_ENCRYPTION_KEY, ENV_IDENTITY_HEADER,
};
use crate::crypto::{decode_field_key, FieldCodec};
use crate::error::{ConfigError, KeyError};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crypto: CryptoSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct CryptoSettings {
    /// Base64-encoded 32-byte AES key, zeroized on drop
    #[serde(deserialize_with = "encoded_key")]
    pub encryption_key: Option<EncodedKey>,
}

impl std::fmt::Debug for CryptoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoSettings")
            .field("encryption_key", &self.encryption_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub db_path: PathBuf,
    /// SQLCipher passphrase; the database file is left unkeyed when unset
    #[serde(deserialize_with = "db_passphrase")]
    pub db_key: Option<DbPassphrase>,
}

impl std::fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageSettings")
            .field("db_path", &self.db_path)
            .field("db_key", &self.db_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// Secrets go straight from the TOML string into their zeroizing wrappers
fn encoded_key<'de, D: Deserializer<'de>>(de: D) -> Result<Option<EncodedKey>, D::Error> {
    Ok(Option::<String>::deserialize(de)?.map(EncodedKey::new))
}

fn db_passphrase<'de, D: Deserializer<'de>>(de: D) -> Result<Option<DbPassphrase>, D::Error> {
    Ok(Option::<String>::deserialize(de)?.map(DbPassphrase::new))
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub identity_header: String,
}

impl Config {
    /// Decode the configured field key (startup precondition)
    pub fn field_key(&self) -> Result<FieldKey32, KeyError> {
        let encoded = self.crypto.encryption_key.as_ref().ok_or(KeyError::Missing)?;
        decode_field_key(encoded.expose_secret())
    }

    /// Construct the title codec from the configured key
    pub fn field_codec(&self) -> Result<FieldCodec, KeyError> {
        Ok(FieldCodec::new(self.field_key()?))
    }

    pub fn db_passphrase(&self) -> Option<&DbPassphrase> {
        self.storage.db_key.as_ref()
    }

    /// Overlay `ETV_*` values from `lookup` onto the file/default config
    ///
    /// `load()` passes the process environment; anything else can inject its
    /// own source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_ENCRYPTION_KEY) {
            self.crypto.encryption_key = Some(EncodedKey::new(key));
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.db_path = PathBuf::from(path);
        }
        if let Some(db_key) = lookup(ENV_DB_KEY) {
            self.storage.db_key = Some(DbPassphrase::new(db_key));
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            self.server.bind_addr = addr;
        }
        if let Some(header) = lookup(ENV_IDENTITY_HEADER) {
            self.server.identity_header = header;
        }
    }
}

/// Load config from `ETV_CONFIG` (or `todo-vault.toml`) plus env overrides
pub fn load() -> Result<Config, ConfigError> {
    let config_path =
        std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut conf = load_from(config_path)?;
    conf.apply_overrides(|name| std::env::var(name).ok());
    Ok(conf)
}

/// Load config from an explicit TOML path only; a missing file falls back to defaults
pub fn load_from<P: AsRef<Path>>(config_path: P) -> Result<Config, ConfigError> {
    let path = config_path.as_ref();

    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let conf: Config = toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config file");
    Ok(conf)
}
