// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::models::{IncomeRecord, UserId, Wish};
use nestegg::store::{AppState, Store, keys};
use rust_decimal::Decimal;

#[test]
fn fresh_store_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    let state = AppState::load(&store);
    assert!(state.records.is_empty());
    assert!(state.wishes.is_empty());
    assert_eq!(state.yearly_goal, Decimal::from(200_000));
    assert!(state.family.family_id.is_none());
    assert_eq!(state.profiles.husband.name, "Husband");
    assert_eq!(state.profiles.wife.name, "Wife");
    assert!(state.undo.is_none());
}

#[test]
fn malformed_documents_read_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    std::fs::write(dir.path().join("records.json"), "{{{ nope").unwrap();
    std::fs::write(dir.path().join("wishes.json"), "42").unwrap();
    std::fs::write(dir.path().join("yearly_goal.json"), "\"not a number").unwrap();

    let state = AppState::load(&store);
    assert!(state.records.is_empty());
    assert!(state.wishes.is_empty());
    assert_eq!(state.yearly_goal, Decimal::from(200_000));
}

#[test]
fn documents_roundtrip_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    let records = vec![IncomeRecord {
        id: "rec_1".to_string(),
        user_id: UserId::Husband,
        amount: Decimal::new(12_345, 2),
        source: "bonus".to_string(),
        category: "work".to_string(),
        timestamp: 77,
    }];
    store.save(keys::RECORDS, &records).unwrap();
    store.save(keys::YEARLY_GOAL, &Decimal::from(50_000)).unwrap();

    let loaded: Vec<IncomeRecord> = store.load(keys::RECORDS).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].amount, Decimal::new(12_345, 2));

    let state = AppState::load(&store);
    assert_eq!(state.yearly_goal, Decimal::from(50_000));
    // an untouched key stays at its default
    let wishes: Option<Vec<Wish>> = store.load(keys::WISHES);
    assert!(wishes.is_none());
}

#[test]
fn legacy_documents_without_optional_fields_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();

    // wishes written by an older device: no isPinned, no savingsHistory
    let legacy = r#"[{
        "id": "wish_1",
        "title": "camera",
        "targetAmount": "1500",
        "currentSavedAmount": "0",
        "status": "pending",
        "userId": "wife",
        "imageUrl": ""
    }]"#;
    std::fs::write(dir.path().join("wishes.json"), legacy).unwrap();

    let state = AppState::load(&store);
    assert_eq!(state.wishes.len(), 1);
    assert!(!state.wishes[0].is_pinned);
    assert!(state.wishes[0].savings_history.is_empty());
}
