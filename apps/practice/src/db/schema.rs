//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local progress database.
pub const SCHEMA: &str = r#"
-- Whole-blob key-value storage (ledger and streak log)
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Schema bookkeeping
CREATE TABLE IF NOT EXISTS schema_info (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL
);
"#;

/// Record the schema version on first open. Bind `SCHEMA_VERSION` as `?1`.
pub const INIT_SCHEMA_INFO: &str = "INSERT OR IGNORE INTO schema_info (id, version) VALUES (1, ?1)";
