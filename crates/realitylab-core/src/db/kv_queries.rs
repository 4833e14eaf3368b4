//! Key-value reads and atomic writes over the `kv_store` table.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    store::KeyValueBackend,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";
// Byte lengths, matching what the in-memory backend reports
const USAGE_SQL: &str =
    "SELECT COALESCE(SUM(LENGTH(CAST(key AS BLOB)) + LENGTH(CAST(value AS BLOB))), 0) FROM kv_store";

impl KeyValueBackend for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn commit(&mut self, sets: &[(&str, String)], removes: &[&str]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        for (key, value) in sets {
            tx.execute(UPSERT_VALUE_SQL, params![key, value, &now])
                .db_context("Failed to write value")?;
        }
        for key in removes {
            tx.execute(DELETE_VALUE_SQL, params![key])
                .db_context("Failed to remove value")?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    fn usage(&self) -> Result<usize> {
        let bytes: i64 = self
            .connection
            .query_row(USAGE_SQL, [], |row| row.get(0))
            .db_context("Failed to measure storage usage")?;
        Ok(usize::try_from(bytes).unwrap_or(0))
    }
}
