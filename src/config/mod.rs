// src/config/mod.rs
//! Configuration system for encrypted-todo-vault
//!
//! Built-in defaults, then an optional TOML file, then env overrides.
//! The result is an owned value that `main` passes down by reference.

pub use app::{load, load_from, Config, CryptoSettings, ServerSettings, StorageSettings};

mod app;
mod defaults;
