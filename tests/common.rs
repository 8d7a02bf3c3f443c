// tests/common.rs
//! Shared test utilities: logging setup and throwaway stores
#![allow(dead_code)]

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use encrypted_todo_vault::{FieldCodec, TodoStore, UserId};
use rusqlite::Connection;
use tempfile::TempDir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging (idempotent, respects RUST_LOG=)
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Fresh random key in the same base64 form the server reads from env
pub fn random_key_b64() -> String {
    STANDARD.encode(rand::random::<[u8; 32]>())
}

pub fn codec_from(key_b64: &str) -> FieldCodec {
    FieldCodec::from_base64(key_b64).expect("valid test key")
}

pub fn user_a() -> UserId {
    UserId::new("user_a")
}

pub fn user_b() -> UserId {
    UserId::new("user_b")
}

/// On-disk store in a temp dir, so tests can inspect rows at rest
pub struct TestStore {
    pub store: TodoStore,
    pub key_b64: String,
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        setup();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todos.db");
        let key_b64 = random_key_b64();
        let store = TodoStore::open(&path, None, codec_from(&key_b64)).expect("open store");
        Self {
            store,
            key_b64,
            path,
            _dir: dir,
        }
    }

    /// Second connection onto the same file, bypassing the codec
    pub fn raw(&self) -> Connection {
        Connection::open(&self.path).expect("raw connection")
    }

    pub fn stored_title(&self, id: &str) -> String {
        self.raw()
            .query_row("SELECT title FROM todos WHERE id = ?1", [id], |r| r.get(0))
            .expect("row exists")
    }

    pub fn row_count(&self) -> i64 {
        self.raw()
            .query_row("SELECT COUNT(*) FROM todos", [], |r| r.get(0))
            .expect("count")
    }

    /// Insert a row the way a pre-encryption build would have
    pub fn insert_legacy(&self, id: &str, owner: &UserId, title: &str, updated_at: i64) {
        self.raw()
            .execute(
                "INSERT INTO todos (id, owner_id, title, completed, created_at, updated_at)
                 VALUES (?1, ?2, ?3, 0, ?4, ?4)",
                rusqlite::params![id, owner.as_str(), title, updated_at],
            )
            .expect("insert legacy row");
    }
}
