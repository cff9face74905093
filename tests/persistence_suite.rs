mod common;

use std::fs;

use common::{march, open_tracker, setup_tracker, temp_dir};
use pocketbook::core::services::EntryKind;
use pocketbook::domain::{MonthCursor, NewTransaction};
use pocketbook::storage::{
    self, json_backend::JsonFileStore, KeyValueStore, CUSTOM_CATEGORIES_KEY, TRANSACTIONS_KEY,
};

#[test]
fn state_survives_reopening() {
    let (mut tracker, dir) = setup_tracker();
    tracker.add_category("Pets", "🐶").unwrap();
    tracker
        .add_transaction(NewTransaction::new("Vet", 80.0, "Pets").on(march(3)))
        .unwrap();
    tracker
        .add_transaction(NewTransaction::new("Salary", 1000.0, "income").on(march(1)))
        .unwrap();

    let reopened = open_tracker(&dir);
    assert_eq!(reopened.categories(), tracker.categories());
    assert_eq!(reopened.transactions(), tracker.transactions());
    assert_eq!(reopened.summary().balance_total, 920.0);
}

#[test]
fn documents_use_the_documented_keys() {
    let (mut tracker, dir) = setup_tracker();
    tracker.add_category("Pets", "🐶").unwrap();

    let categories = fs::read_to_string(dir.join("customCategories.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&categories).unwrap();
    assert_eq!(parsed, serde_json::json!([{ "name": "Pets", "icon": "🐶" }]));

    let transactions = fs::read_to_string(dir.join("transactions.json")).unwrap();
    assert_eq!(transactions.trim(), "[]");
}

#[test]
fn legacy_documents_load_and_aggregate() {
    let dir = temp_dir().join("legacy");
    let store = JsonFileStore::new(dir.clone()).unwrap();
    store
        .set(CUSTOM_CATEGORIES_KEY, r#"[{"name":"Étel","icon":"🍕"}]"#)
        .unwrap();
    store
        .set(
            TRANSACTIONS_KEY,
            r#"[
                {"description":"Fizetés","amount":1000,"category":"bevétel","date":"2024-03-01"},
                {"description":"Bolt","amount":150,"category":"kiadás","date":"2024-03-02"},
                {"description":"Pizza","amount":50,"category":"Étel","date":"2024-03-03"},
                {"description":"Félretett","amount":200,"category":"megtakarítás","date":"2024-03-04"},
                {"description":"Régi","amount":70,"category":"kiadás","date":"2024-02-28"}
            ]"#,
        )
        .unwrap();

    let tracker = open_tracker(&dir);
    assert_eq!(tracker.cursor(), MonthCursor::new(2, 2024).unwrap());
    let summary = tracker.summary();
    assert_eq!(summary.entries.len(), 4);
    assert_eq!(summary.balance_total, 800.0);
    assert_eq!(summary.savings_total, 200.0);
    assert_eq!(summary.entries[2].kind, EntryKind::Expense);
    assert_eq!(summary.entries[2].label, "🍕 Étel");
    assert_eq!(summary.entries[0].label, "💰 Income");

    let mut ids: Vec<_> = tracker.transactions().iter().map(|txn| txn.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn malformed_document_is_reported() {
    let dir = temp_dir().join("broken");
    let store = JsonFileStore::new(dir.clone()).unwrap();
    store.set(TRANSACTIONS_KEY, "{not json").unwrap();

    let err = storage::load_state(&store).unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn atomic_writes_leave_no_temp_files() {
    let (mut tracker, dir) = setup_tracker();
    tracker
        .add_transaction(NewTransaction::new("Food", 12.0, "expense"))
        .unwrap();

    let leftovers: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn withdrawals_are_written_under_the_english_savings_key() {
    let dir = temp_dir().join("mixed");
    let store = JsonFileStore::new(dir.clone()).unwrap();
    store
        .set(
            TRANSACTIONS_KEY,
            r#"[{"description":"Félretett","amount":200,"category":"megtakarítás","date":"2024-03-04"}]"#,
        )
        .unwrap();

    let mut tracker = open_tracker(&dir);
    tracker.withdraw_savings(50.0).unwrap();
    assert_eq!(tracker.summary().savings_total, 150.0);

    let written = fs::read_to_string(dir.join("transactions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed[0]["category"], "megtakarítás");
    assert_eq!(parsed[1]["category"], "savings");
    assert_eq!(parsed[1]["amount"], -50.0);
}
