//! SQLite-backed key-value store.

use super::{KeyValueStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

const UPSERT_SQL: &str = "INSERT INTO kv_entries (key, value)
     VALUES (?1, ?2)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value;";

/// Key-value store persisted in a single `kv_entries` table.
///
/// Construct through [`super::open_store`] or [`super::open_store_in_memory`]
/// so the schema is guaranteed to exist.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub(super) fn from_migrated(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow of the underlying connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(UPSERT_SQL, params![key, value])?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT_SQL, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }
}
