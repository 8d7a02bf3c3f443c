// src/bin/todo_server.rs
//! HTTP server for the encrypted task list

use std::sync::Arc;

use anyhow::{Context, Result};
use encrypted_todo_vault::http::{self, AppState};
use encrypted_todo_vault::{load_config, HeaderIdentity, TodoStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config().context("Failed to load configuration")?;

    // A missing or malformed key is fatal before anything is served
    let codec = config
        .field_codec()
        .context("Encryption key unusable. Is ETV_ENCRYPTION_KEY a base64 32-byte key?")?;

    let store = TodoStore::open(&config.storage.db_path, config.db_passphrase(), codec)
        .with_context(|| format!("Failed to open {}", config.storage.db_path.display()))?;

    let legacy = store.count_legacy_titles()?;
    if legacy > 0 {
        tracing::warn!(
            legacy,
            "plaintext titles found at rest; run `migrate_legacy` to encrypt them"
        );
    }

    let identity = HeaderIdentity::from_name(&config.server.identity_header)
        .context("Invalid identity header name")?;
    info!(header = %config.server.identity_header, "resolving callers from proxy header");

    let state = Arc::new(AppState::new(store, identity));
    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;

    http::serve(listener, state).await?;
    Ok(())
}
