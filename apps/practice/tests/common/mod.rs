//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use spelling_core::{MasteryLedger, PracticeSession};
use spelling_practice::config::Config;
use spelling_practice::db::SqliteStore;
use spelling_practice::state::build_session;

/// A fixed local timestamp on `day` of May 2024.
pub fn may(day: u32, hour: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

/// Ledger over a fresh in-memory SQLite database.
pub fn sqlite_ledger() -> MasteryLedger<SqliteStore> {
    MasteryLedger::new(SqliteStore::open_in_memory().expect("open in-memory database"))
}

/// Session over a fresh in-memory SQLite database with default settings.
pub fn sqlite_session() -> PracticeSession<SqliteStore> {
    let store = SqliteStore::open_in_memory().expect("open in-memory database");
    build_session(store, &Config::default())
}
