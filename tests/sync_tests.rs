// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::error::Error;
use nestegg::models::{IncomeRecord, UserId, Wish, WishStatus};
use nestegg::store::{AppState, Store, keys};
use nestegg::sync::{decode_payload, encode_payload};
use nestegg::{cli, commands};
use rust_decimal::Decimal;

fn rec(id: &str, amount: i64, timestamp: i64) -> IncomeRecord {
    IncomeRecord {
        id: id.to_string(),
        user_id: UserId::Husband,
        amount: Decimal::from(amount),
        source: "src".to_string(),
        category: "other".to_string(),
        timestamp,
    }
}

fn wish(id: &str, title: &str) -> Wish {
    Wish {
        id: id.to_string(),
        title: title.to_string(),
        target_amount: Decimal::from(100),
        current_saved_amount: Decimal::ZERO,
        status: WishStatus::Pending,
        user_id: UserId::Wife,
        image_url: String::new(),
        is_pinned: false,
        savings_history: Vec::new(),
    }
}

#[test]
fn payload_roundtrips() {
    let records = vec![rec("r1", 10, 100)];
    let wishes = vec![wish("w1", "camera")];
    let text = encode_payload(&records, &wishes).unwrap();

    let payload = decode_payload(&text).unwrap();
    assert_eq!(payload.records.len(), 1);
    assert_eq!(payload.records[0].id, "r1");
    assert_eq!(payload.wishes[0].title, "camera");
}

#[test]
fn garbage_is_not_a_sync_code() {
    assert!(matches!(decode_payload("not json"), Err(Error::InvalidSyncCode)));
    assert!(matches!(decode_payload(""), Err(Error::InvalidSyncCode)));
}

#[test]
fn payload_missing_required_shape_is_rejected() {
    assert!(matches!(
        decode_payload(r#"{"records": []}"#),
        Err(Error::InvalidSyncCode)
    ));
    assert!(matches!(
        decode_payload(r#"{"wishes": []}"#),
        Err(Error::InvalidSyncCode)
    ));
    assert!(matches!(
        decode_payload(r#"{"foo": 1}"#),
        Err(Error::InvalidSyncCode)
    ));
}

#[test]
fn import_merges_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store.save(keys::RECORDS, &vec![rec("r1", 10, 100)]).unwrap();

    let incoming = encode_payload(
        &[rec("r1", 999, 999), rec("r2", 20, 50)],
        &[wish("w1", "camera")],
    )
    .unwrap();
    let payload_path = dir.path().join("payload.json");
    std::fs::write(&payload_path, incoming).unwrap();

    let mut state = AppState::load(&store);
    let matches = cli::build_cli().get_matches_from([
        "nestegg",
        "sync",
        "import",
        payload_path.to_str().unwrap(),
    ]);
    if let Some(("sync", sync_m)) = matches.subcommand() {
        commands::sync::handle(&mut state, &store, sync_m).unwrap();
    } else {
        panic!("sync command not parsed");
    }

    // local r1 wins; r2 sorted in front of it by timestamp
    assert_eq!(state.records.len(), 2);
    assert_eq!(state.records[0].id, "r2");
    assert_eq!(state.records[1].amount, Decimal::from(10));
    assert_eq!(state.wishes.len(), 1);

    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.records.len(), 2);
    assert_eq!(reloaded.wishes.len(), 1);
}

#[test]
fn invalid_import_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    store.save(keys::RECORDS, &vec![rec("r1", 10, 100)]).unwrap();

    let mut state = AppState::load(&store);
    let matches =
        cli::build_cli().get_matches_from(["nestegg", "sync", "import", "--text", "not a code"]);
    if let Some(("sync", sync_m)) = matches.subcommand() {
        let err = commands::sync::handle(&mut state, &store, sync_m).unwrap_err();
        assert!(err.to_string().contains("invalid sync code"));
    } else {
        panic!("sync command not parsed");
    }

    assert_eq!(state.records.len(), 1);
    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.records.len(), 1);
    assert!(reloaded.wishes.is_empty());
}
