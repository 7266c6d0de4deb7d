//! Application state.

use spelling_core::{BlobStore, MasteryLedger, MemoryStore, PracticeSession};

use crate::config::Config;
use crate::db::SqliteStore;

/// The store the session runs on: SQLite when it can be opened, memory
/// otherwise.
pub enum AppStore {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl AppStore {
    /// Open the configured database, falling back to memory on failure.
    pub fn open(config: &Config) -> Self {
        match SqliteStore::open(&config.db_path) {
            Ok(store) => {
                tracing::info!(path = %config.db_path.display(), "opened progress database");
                Self::Sqlite(store)
            }
            Err(e) => {
                tracing::warn!(
                    path = %config.db_path.display(),
                    error = %e,
                    "progress database unavailable, keeping progress in memory"
                );
                Self::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, Self::Sqlite(_))
    }
}

impl BlobStore for AppStore {
    fn get(&self, key: &str) -> spelling_core::Result<Option<String>> {
        match self {
            Self::Sqlite(s) => s.get(key),
            Self::Memory(m) => m.get(key),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> spelling_core::Result<()> {
        match self {
            Self::Sqlite(s) => s.put(key, value),
            Self::Memory(m) => m.put(key, value),
        }
    }

    fn remove(&mut self, keys: &[&str]) -> spelling_core::Result<()> {
        match self {
            Self::Sqlite(s) => s.remove(keys),
            Self::Memory(m) => m.remove(keys),
        }
    }
}

/// Build a practice session over `store` with the configured settings.
pub fn build_session<S: BlobStore>(store: S, config: &Config) -> PracticeSession<S> {
    let ledger = MasteryLedger::new(store).with_daily_reset_hour(config.daily_reset_hour);
    PracticeSession::new(ledger, config.locale)
}
