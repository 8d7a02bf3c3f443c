// src/legacy/migrate.rs
use rusqlite::{params, TransactionBehavior};
use tracing::{info, warn};

use crate::consts::ENVELOPE_DELIMITER;
use crate::crypto::is_envelope;
use crate::db::todo_db_ops::Result;
use crate::db::TodoStore;
use crate::model::MigrationReport;

impl TodoStore {
    /// Number of rows whose title is still stored as plaintext
    pub fn count_legacy_titles(&self) -> Result<usize> {
        let count: i64 = self.lock().query_row(
            "SELECT COUNT(*) FROM todos WHERE instr(title, ?1) = 0",
            [ENVELOPE_DELIMITER.to_string()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Re-encrypt every legacy plaintext title in one transaction
    ///
    /// `updated_at` is left alone: this rewrites storage, it is not a user
    /// edit. Rows that look like envelopes but fail to decrypt are counted in
    /// `unreadable` and left untouched for manual inspection.
    pub fn migrate_legacy_titles(&self) -> Result<MigrationReport> {
        let mut conn = self.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows: Vec<(String, String)> = {
            let mut stmt = tx.prepare("SELECT id, title FROM todos")?;
            let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            let collected = mapped.collect::<rusqlite::Result<Vec<_>>>()?;
            collected
        };

        let mut report = MigrationReport {
            scanned: rows.len(),
            ..MigrationReport::default()
        };

        for (id, title) in rows {
            if !is_envelope(&title) {
                tx.execute(
                    "UPDATE todos SET title = ?1 WHERE id = ?2",
                    params![self.codec.encrypt(&title), id],
                )?;
                report.migrated += 1;
            } else if self.codec.decrypt(&title).is_err() {
                warn!(todo_id = %id, "stored title is not a readable envelope");
                report.unreadable += 1;
            }
        }

        tx.commit()?;
        info!(
            scanned = report.scanned,
            migrated = report.migrated,
            unreadable = report.unreadable,
            "legacy title migration finished"
        );
        Ok(report)
    }
}
