// src/bin/migrate_legacy.rs
//! Encrypt every title still stored as legacy plaintext

use anyhow::{Context, Result};
use encrypted_todo_vault::{load_config, TodoStore};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config().context("Failed to load configuration")?;
    let codec = config
        .field_codec()
        .context("Encryption key unusable. Is ETV_ENCRYPTION_KEY a base64 32-byte key?")?;

    let store = TodoStore::open(&config.storage.db_path, config.db_passphrase(), codec)
        .with_context(|| format!("Failed to open {}", config.storage.db_path.display()))?;

    let pending = store.count_legacy_titles()?;
    info!("{pending} legacy plaintext title(s) pending");

    let report = store
        .migrate_legacy_titles()
        .context("Migration failed, no rows were changed")?;

    info!(
        "Scanned {} row(s), encrypted {} legacy title(s)",
        report.scanned, report.migrated
    );
    if report.unreadable > 0 {
        warn!(
            "{} row(s) look encrypted but do not decrypt under this key; inspect them manually",
            report.unreadable
        );
    }

    Ok(())
}
