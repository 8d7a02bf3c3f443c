// src/db/todo_db_ops.rs
//! Ownership-scoped record store
//!
//! Every query carries `owner_id = caller`, so a record owned by someone
//! else is indistinguishable from one that does not exist. Titles are
//! encrypted on the way in and decrypted on the way out; callers only ever
//! see plaintext.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::aliases::DbPassphrase;
use crate::crypto::FieldCodec;
use crate::db::todo_db_conn::{open_in_memory, open_todo_db};
use crate::error::TodoError;
use crate::model::{TodoPatch, TodoRecord, UserId};

pub type Result<T> = std::result::Result<T, TodoError>;

const SELECT_COLUMNS: &str = "id, owner_id, title, completed, created_at, updated_at";

/// SQLite-backed task store bound to one field codec
pub struct TodoStore {
    pub(crate) conn: Mutex<Connection>,
    pub(crate) codec: FieldCodec,
}

/// A row exactly as persisted (title still an envelope)
struct StoredTodo {
    id: String,
    owner_id: String,
    title: String,
    completed: bool,
    created_at: i64,
    updated_at: i64,
}

impl StoredTodo {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            title: row.get(2)?,
            completed: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn into_record(self, codec: &FieldCodec) -> Result<TodoRecord> {
        Ok(TodoRecord {
            title: codec.decrypt(&self.title)?,
            id: self.id,
            owner_id: self.owner_id,
            completed: self.completed,
            created_at: from_micros(self.created_at)?,
            updated_at: from_micros(self.updated_at)?,
        })
    }
}

impl TodoStore {
    pub fn new(conn: Connection, codec: FieldCodec) -> Self {
        Self {
            conn: Mutex::new(conn),
            codec,
        }
    }

    /// Open the on-disk store
    pub fn open<P: AsRef<Path>>(
        db_path: P,
        passphrase: Option<&DbPassphrase>,
        codec: FieldCodec,
    ) -> Result<Self> {
        Ok(Self::new(open_todo_db(db_path, passphrase)?, codec))
    }

    /// Throwaway in-memory store (tests, demos)
    pub fn open_in_memory(codec: FieldCodec) -> Result<Self> {
        Ok(Self::new(open_in_memory()?, codec))
    }

    pub fn codec(&self) -> &FieldCodec {
        &self.codec
    }

    // A panic mid-query cannot leave the connection half-updated: every
    // mutation is a single statement or a transaction.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All of the caller's tasks, most recently updated first
    pub fn list(&self, caller: &UserId) -> Result<Vec<TodoRecord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM todos
             WHERE owner_id = ?1
             ORDER BY updated_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map([caller.as_str()], StoredTodo::from_row)?;
        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?.into_record(&self.codec)?);
        }
        Ok(todos)
    }

    /// Create a task owned by the caller
    pub fn create(&self, caller: &UserId, title: &str) -> Result<TodoRecord> {
        if title.is_empty() {
            return Err(TodoError::Validation("Title is required".into()));
        }

        let now = Utc::now().timestamp_micros();
        let stored = StoredTodo {
            id: Uuid::new_v4().to_string(),
            owner_id: caller.as_str().to_owned(),
            title: self.codec.encrypt(title),
            completed: false,
            created_at: now,
            updated_at: now,
        };

        self.lock().execute(
            "INSERT INTO todos (id, owner_id, title, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                stored.id,
                stored.owner_id,
                stored.title,
                stored.completed,
                stored.created_at,
                stored.updated_at
            ],
        )?;

        info!(todo_id = %stored.id, owner = %caller, "created todo");
        stored.into_record(&self.codec)
    }

    /// Apply a partial update to one of the caller's tasks
    pub fn update(&self, caller: &UserId, id: &str, patch: &TodoPatch) -> Result<TodoRecord> {
        let new_title = match &patch.title {
            None => None,
            Some(None) => return Err(TodoError::Validation("title cannot be null".into())),
            Some(Some(title)) if title.is_empty() => {
                return Err(TodoError::Validation("Title is required".into()))
            }
            Some(Some(title)) => Some(title.as_str()),
        };
        let new_completed = match patch.completed {
            None => None,
            Some(None) => return Err(TodoError::Validation("completed cannot be null".into())),
            Some(Some(completed)) => Some(completed),
        };

        let mut conn = self.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut stored = find_owned(&tx, caller, id)?.ok_or(TodoError::NotFound)?;

        if let Some(title) = new_title {
            stored.title = self.codec.encrypt(title);
        }
        if let Some(completed) = new_completed {
            stored.completed = completed;
        }
        stored.updated_at = next_timestamp(stored.updated_at);

        tx.execute(
            "UPDATE todos SET title = ?1, completed = ?2, updated_at = ?3
             WHERE id = ?4 AND owner_id = ?5",
            params![
                stored.title,
                stored.completed,
                stored.updated_at,
                stored.id,
                stored.owner_id
            ],
        )?;

        // Decrypt before commit so a corrupt title rolls the whole update back
        let record = stored.into_record(&self.codec)?;
        tx.commit()?;

        debug!(todo_id = %record.id, owner = %caller, "updated todo");
        Ok(record)
    }

    /// Hard-delete one of the caller's tasks
    pub fn delete(&self, caller: &UserId, id: &str) -> Result<()> {
        let removed = self.lock().execute(
            "DELETE FROM todos WHERE id = ?1 AND owner_id = ?2",
            params![id, caller.as_str()],
        )?;

        if removed == 0 {
            return Err(TodoError::NotFound);
        }

        info!(todo_id = %id, owner = %caller, "deleted todo");
        Ok(())
    }
}

// Absent and foreign-owned rows both come back as `None`
fn find_owned(conn: &Connection, caller: &UserId, id: &str) -> Result<Option<StoredTodo>> {
    let found = conn
        .query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM todos WHERE id = ?1 AND owner_id = ?2"),
            params![id, caller.as_str()],
            StoredTodo::from_row,
        )
        .optional()?;
    Ok(found)
}

/// Wall-clock now, but never at or before `previous`
fn next_timestamp(previous: i64) -> i64 {
    Utc::now().timestamp_micros().max(previous + 1)
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros).ok_or(TodoError::Timestamp(micros))
}
