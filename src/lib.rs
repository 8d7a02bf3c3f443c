// src/lib.rs
//! encrypted-todo-vault: a personal task list with encrypted titles
//!
//! Features:
//! - AES-256-CBC field encryption with a fresh IV per write
//! - Per-user ownership scoping on every read and write
//! - SQLite storage (optionally keyed with SQLCipher)
//! - Explicit migration pass for legacy plaintext titles

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod http;
pub mod identity;
pub mod legacy;
pub mod model;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::FieldKey32;
pub use config::{load as load_config, Config};
pub use crypto::FieldCodec;
pub use db::TodoStore;
pub use error::{CodecError, ConfigError, KeyError, TodoError};
pub use identity::{HeaderIdentity, IdentityResolver};
pub use model::{DeleteResponse, MigrationReport, NewTodo, TodoPatch, TodoRecord, UserId};
