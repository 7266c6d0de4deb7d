mod common;

use common::{may, sqlite_ledger};
use pretty_assertions::assert_eq;
use spelling_core::{BlobStore, LedgerStore, MasteryLedger};
use spelling_practice::db::SqliteStore;
use tempfile::TempDir;

#[test]
fn results_survive_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("progress.db");

    {
        let mut ledger = MasteryLedger::new(SqliteStore::open(&path).unwrap());
        ledger.record_result_at("pingüino", true, may(1, 9));
        ledger.record_result_at("pingüino", true, may(2, 9));
        ledger.record_result_at("acción", false, may(2, 10));
    }

    let ledger = MasteryLedger::new(SqliteStore::open(&path).unwrap());
    let record = ledger.record("pingüino").copied().unwrap();
    assert_eq!(record.correct_count, 2);
    assert_eq!(record.srs_box, 2);
    assert_eq!(record.interval, 4);
    assert_eq!(ledger.word_stats("acción").wrong, 1);

    let streak = ledger.streak_stats_at(may(2, 20));
    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.total_days, 2);
}

#[test]
fn ledger_blob_uses_persisted_shape() {
    let mut ledger = sqlite_ledger();
    let now = may(3, 9);
    ledger.record_result_at("vaca", true, now);

    let raw = ledger.store().get("progress").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let vaca = &value["vaca"];
    assert_eq!(vaca["correctCount"], 1);
    assert_eq!(vaca["wrongCount"], 0);
    assert_eq!(vaca["srsBox"], 1);
    assert_eq!(vaca["interval"], 2);
    assert_eq!(vaca["lastSeen"], now.timestamp_millis());
    assert_eq!(vaca["nextReview"], now.timestamp_millis() + 2 * 86_400_000);

    let streak = ledger.store().load_streak().unwrap();
    assert_eq!(streak, vec!["2024-05-03".to_string()]);
}

#[test]
fn corrupt_rows_load_as_empty() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.put("progress", "not json").unwrap();
    store.put("streak", "[\"2024-05-01\", 7]").unwrap();

    let ledger = MasteryLedger::new(store);
    assert_eq!(ledger.word_count(), 0);
    assert_eq!(ledger.streak_stats_at(may(1, 12)).total_days, 0);
}

#[test]
fn reset_clears_database_rows() {
    let mut ledger = sqlite_ledger();
    ledger.record_result_at("caballo", true, may(1, 9));
    ledger.reset();

    assert_eq!(ledger.store().get("progress").unwrap(), None);
    assert_eq!(ledger.store().get("streak").unwrap(), None);

    let reopened = MasteryLedger::new(ledger.into_store());
    assert_eq!(reopened.word_count(), 0);
    assert_eq!(reopened.due_count_at(may(20, 9)), 0);
}
