// src/db/todo_db_conn.rs
use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, Result};
use tracing::debug;

use crate::aliases::DbPassphrase;
use crate::consts::DB_KDF_ITERATIONS;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id          TEXT PRIMARY KEY,
        owner_id    TEXT NOT NULL,
        title       TEXT NOT NULL,
        completed   INTEGER NOT NULL DEFAULT 0,
        created_at  INTEGER NOT NULL,
        updated_at  INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_todos_owner_updated ON todos(owner_id, updated_at);
"#;

/// Open (or create) the on-disk task database
///
/// When a passphrase is supplied the whole file is additionally keyed with
/// SQLCipher; title encryption happens regardless.
pub fn open_todo_db<P: AsRef<Path>>(
    db_path: P,
    passphrase: Option<&DbPassphrase>,
) -> Result<Connection> {
    let db_path = db_path.as_ref();
    if let Some(parent) = db_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let conn = Connection::open(db_path)?;

    if let Some(passphrase) = passphrase {
        // PRAGMA key must run before anything touches the file
        let escaped = passphrase.expose_secret().replace('\'', "''");
        conn.execute_batch(&format!("PRAGMA key = '{escaped}';"))?;
        conn.execute_batch(&format!(
            r#"
            PRAGMA cipher_page_size = 4096;
            PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
            PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
            PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
            "#
        ))?;
    }

    conn.busy_timeout(Duration::from_secs(5))?;
    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    debug!(path = %db_path.display(), journal_mode = %mode, "opened todo database");

    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

/// Fresh in-memory database with the schema applied
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}
