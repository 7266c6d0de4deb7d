//! Persistence seam for the mastery ledger.
//!
//! A [`BlobStore`] is any key-value facility that can read and overwrite a
//! whole string value. Every blob store is a [`LedgerStore`]: the ledger and
//! the streak log are each kept as one JSON blob.

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::types::WordMasteryRecord;

/// Key under which the ledger is stored.
pub const PROGRESS_KEY: &str = "progress";

/// Key under which the study-day list is stored.
pub const STREAK_KEY: &str = "streak";

/// Word to record mapping, as persisted.
pub type LedgerMap = BTreeMap<String, WordMasteryRecord>;

/// Whole-blob key-value storage.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value for `key`.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove all of `keys` in one step.
    fn remove(&mut self, keys: &[&str]) -> Result<()>;
}

/// Typed storage for the ledger and the streak log.
pub trait LedgerStore {
    fn load_ledger(&self) -> Result<LedgerMap>;
    fn save_ledger(&mut self, ledger: &LedgerMap) -> Result<()>;
    fn load_streak(&self) -> Result<Vec<String>>;
    fn save_streak(&mut self, days: &[String]) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

impl<T: BlobStore> LedgerStore for T {
    fn load_ledger(&self) -> Result<LedgerMap> {
        match self.get(PROGRESS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(LedgerMap::new()),
        }
    }

    fn save_ledger(&mut self, ledger: &LedgerMap) -> Result<()> {
        let json = serde_json::to_string(ledger)?;
        self.put(PROGRESS_KEY, &json)
    }

    fn load_streak(&self) -> Result<Vec<String>> {
        match self.get(STREAK_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_streak(&mut self, days: &[String]) -> Result<()> {
        let json = serde_json::to_string(days)?;
        self.put(STREAK_KEY, &json)
    }

    fn clear(&mut self) -> Result<()> {
        self.remove(&[PROGRESS_KEY, STREAK_KEY])
    }
}

/// In-memory blob store. The default for tests and for sessions without a
/// durable backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for inspection.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.blobs.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn empty_store_loads_empty() {
        let store = MemoryStore::new();
        assert!(store.load_ledger().unwrap().is_empty());
        assert!(store.load_streak().unwrap().is_empty());
    }

    #[test]
    fn ledger_is_one_json_blob() {
        let mut store = MemoryStore::new();
        let mut ledger = LedgerMap::new();
        ledger.insert("vaca".to_string(), WordMasteryRecord::default());
        store.save_ledger(&ledger).unwrap();

        let raw = store.raw(PROGRESS_KEY).unwrap();
        assert!(raw.contains("\"vaca\""));
        assert!(raw.contains("\"correctCount\":0"));
        assert_eq!(store.load_ledger().unwrap(), ledger);
    }

    #[test]
    fn malformed_blob_is_a_serialization_error() {
        let mut store = MemoryStore::new();
        store.put(PROGRESS_KEY, "{not json").unwrap();
        assert!(matches!(store.load_ledger(), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn clear_removes_both_blobs() {
        let mut store = MemoryStore::new();
        store.save_ledger(&LedgerMap::new()).unwrap();
        store.save_streak(&["2024-01-01".to_string()]).unwrap();
        store.clear().unwrap();
        assert!(store.raw(PROGRESS_KEY).is_none());
        assert!(store.raw(STREAK_KEY).is_none());
    }
}
