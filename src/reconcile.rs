// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crate::models::{IncomeRecord, SyncPayload, Wish};

/// Fold a scanned peer payload into the local collections.
///
/// This is a set-union by id, not a field-level merge: when both sides carry
/// the same id the local copy wins and the incoming one is discarded.
/// At-least-once delivery with id-based dedup; concurrent edits of the same
/// entity are not reconciled. Income is stably re-sorted ascending by
/// timestamp (ties keep their relative order); wishes stay in insertion
/// order, since pin ordering is applied at display time.
///
/// Deterministic and side-effect free; persisting the result is the caller's
/// job.
pub fn merge(
    local_records: &[IncomeRecord],
    local_wishes: &[Wish],
    incoming: &SyncPayload,
) -> (Vec<IncomeRecord>, Vec<Wish>) {
    let mut seen: HashSet<String> = local_records.iter().map(|r| r.id.clone()).collect();
    let mut records: Vec<IncomeRecord> = local_records.to_vec();
    for r in &incoming.records {
        if seen.insert(r.id.clone()) {
            records.push(r.clone());
        }
    }
    records.sort_by_key(|r| r.timestamp);

    let mut seen_wishes: HashSet<String> = local_wishes.iter().map(|w| w.id.clone()).collect();
    let mut wishes: Vec<Wish> = local_wishes.to_vec();
    for w in &incoming.wishes {
        if seen_wishes.insert(w.id.clone()) {
            wishes.push(w.clone());
        }
    }

    (records, wishes)
}
