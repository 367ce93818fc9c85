// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::reconcile;
use crate::store::{AppState, Store, keys};
use crate::sync::{decode_payload, encode_payload};

pub fn handle(state: &mut AppState, store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("export", sub)) => export(state, sub)?,
        Some(("import", sub)) => import(state, store, sub)?,
        _ => {}
    }
    Ok(())
}

fn export(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let payload = encode_payload(&state.records, &state.wishes)?;
    match sub.get_one::<String>("out") {
        Some(path) => {
            std::fs::write(path, &payload).with_context(|| format!("write {path}"))?;
            println!(
                "Sync payload written to {} ({} records, {} wishes). Render it as a QR code for the other device.",
                path,
                state.records.len(),
                state.wishes.len()
            );
        }
        None => println!("{payload}"),
    }
    Ok(())
}

fn import(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let text = match (sub.get_one::<String>("text"), sub.get_one::<String>("file")) {
        (Some(t), _) => t.clone(),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("read {path}"))?
        }
        (None, None) => return Err(anyhow!("pass a payload file or --text")),
    };

    // An undecodable payload mutates nothing.
    let payload = decode_payload(&text)?;
    let (records, wishes) = reconcile::merge(&state.records, &state.wishes, &payload);
    let new_records = records.len() - state.records.len();
    let new_wishes = wishes.len() - state.wishes.len();
    state.records = records;
    state.wishes = wishes;
    store.persist(keys::RECORDS, &state.records);
    store.persist(keys::WISHES, &state.wishes);

    println!("Sync complete: {new_records} new records, {new_wishes} new wishes.");
    Ok(())
}
