// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::models::WishStatus;
use nestegg::store::{AppState, Store};
use nestegg::{cli, commands};
use rust_decimal::Decimal;

fn dispatch(state: &mut AppState, store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("income", m)) => commands::income::handle(state, store, m),
        Some(("goal", m)) => commands::income::handle_goal(state, store, m),
        Some(("wish", m)) => commands::wishes::handle(state, store, m),
        Some(("profile", m)) => commands::profiles::handle(state, store, m),
        other => panic!("unexpected subcommand {other:?}"),
    }
}

#[test]
fn income_add_records_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "add", "-u", "wife", "-a", "1500", "-s", "year-end bonus"],
    )
    .unwrap();

    assert_eq!(state.records.len(), 1);
    let r = &state.records[0];
    assert_eq!(r.amount, Decimal::from(1500));
    assert_eq!(r.source, "year-end bonus");
    assert_eq!(r.category, "other");

    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.records.len(), 1);
}

#[test]
fn income_add_rejects_unknown_member_and_bad_amount() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    let err = dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "add", "-u", "cat", "-a", "10", "-s", "x"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown member"));

    let err = dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "add", "-u", "wife", "-a", "ten", "-s", "x"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid amount"));

    assert!(state.records.is_empty());
}

#[test]
fn income_parse_records_from_free_text() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "parse", "-u", "husband", "spent 80 on groceries"],
    )
    .unwrap();

    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].amount, Decimal::from(-80));
    assert_eq!(state.records[0].category, "expense");
}

#[test]
fn income_parse_failure_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "parse", "-u", "husband", "nothing numeric"],
    )
    .unwrap();
    assert!(state.records.is_empty());
}

#[test]
fn income_export_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "add", "-u", "husband", "-a", "250", "-s", "tutoring", "-c", "side-income"],
    )
    .unwrap();

    let out = dir.path().join("ledger.csv");
    dispatch(
        &mut state,
        &store,
        &["nestegg", "income", "export", "--out", out.to_str().unwrap()],
    )
    .unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    assert!(body.starts_with("id,timestamp,member,amount,source,category"));
    assert!(body.contains("tutoring"));
    assert!(body.contains("side-income"));
}

#[test]
fn goal_set_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(&mut state, &store, &["nestegg", "goal", "set", "90000"]).unwrap();
    assert_eq!(state.yearly_goal, Decimal::from(90_000));

    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.yearly_goal, Decimal::from(90_000));

    let err = dispatch(&mut state, &store, &["nestegg", "goal", "set", "-5"]).unwrap_err();
    assert!(err.to_string().contains("positive"));
}

#[test]
fn wish_lifecycle_via_cli() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "wish", "add", "-u", "wife", "-t", "new camera", "--target", "1500"],
    )
    .unwrap();
    assert_eq!(state.wishes.len(), 1);
    let id = state.wishes[0].id.clone();

    dispatch(
        &mut state,
        &store,
        &["nestegg", "wish", "save", &id, "-a", "1500"],
    )
    .unwrap();
    assert_eq!(state.wishes[0].status, WishStatus::Completed);

    dispatch(&mut state, &store, &["nestegg", "wish", "remove", &id]).unwrap();
    assert!(state.wishes.is_empty());
    assert!(state.undo.is_some());

    // still inside the 6s window
    dispatch(&mut state, &store, &["nestegg", "wish", "undo"]).unwrap();
    assert_eq!(state.wishes.len(), 1);
    assert_eq!(state.wishes[0].id, id);

    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.wishes.len(), 1);
    assert!(reloaded.undo.is_none());
}

#[test]
fn profile_set_updates_one_member() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    let mut state = AppState::load(&store);

    dispatch(
        &mut state,
        &store,
        &["nestegg", "profile", "set", "-u", "husband", "--name", "Sam"],
    )
    .unwrap();
    assert_eq!(state.profiles.husband.name, "Sam");
    assert_eq!(state.profiles.wife.name, "Wife");

    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.profiles.husband.name, "Sam");
}
