// src/db/mod.rs
//! SQLite persistence for task records
//!
//! `todo_db_conn` opens and migrates the database; `todo_db_ops` is the
//! ownership-scoped record store that every read and write goes through.

pub mod todo_db_conn;
pub mod todo_db_ops;

pub use todo_db_conn::{open_in_memory, open_todo_db};
pub use todo_db_ops::TodoStore;
