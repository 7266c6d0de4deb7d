//! SQLite-backed blob store for the mastery ledger.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use spelling_core::{BlobStore, StoreError};

use super::error::DbError;

type Result<T> = std::result::Result<T, DbError>;

/// Durable ledger store. Each key holds one JSON blob that is overwritten
/// whole on every save.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn
            .execute(super::schema::INIT_SCHEMA_INFO, params![super::schema::SCHEMA_VERSION])?;
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        let version = self
            .conn
            .query_row("SELECT version FROM schema_info WHERE id = 1", [], |row| row.get(0))?;
        Ok(version)
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_all(&mut self, keys: &[&str]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for key in keys {
            tx.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl BlobStore for SqliteStore {
    fn get(&self, key: &str) -> spelling_core::Result<Option<String>> {
        self.read(key).map_err(StoreError::from)
    }

    fn put(&mut self, key: &str, value: &str) -> spelling_core::Result<()> {
        self.write(key, value).map_err(StoreError::from)
    }

    fn remove(&mut self, keys: &[&str]) -> spelling_core::Result<()> {
        self.delete_all(keys).map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::SCHEMA_VERSION;

    #[test]
    fn put_overwrites_whole_value() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("progress").unwrap(), None);

        store.put("progress", "{\"a\":1}").unwrap();
        store.put("progress", "{}").unwrap();
        assert_eq!(store.get("progress").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn remove_deletes_every_key() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.put("progress", "{}").unwrap();
        store.put("streak", "[]").unwrap();
        store.put("other", "x").unwrap();

        store.remove(&["progress", "streak"]).unwrap();
        assert_eq!(store.get("progress").unwrap(), None);
        assert_eq!(store.get("streak").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn schema_version_is_recorded() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn initialize_twice_keeps_one_version_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();

        let rows: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM schema_info", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION);
    }
}
