// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{IncomeRecord, UserId};
use crate::utils::new_id;

/// Income at or above this triggers a celebration. Gains only.
pub const CELEBRATION_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

pub struct NewRecordInput {
    pub user_id: UserId,
    pub amount: Decimal,
    pub source: String,
    pub category: String,
}

/// Fire-and-forget notification to the presentation layer. No effect on the
/// data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    pub user_name: String,
}

pub fn add_record(
    records: &mut Vec<IncomeRecord>,
    input: NewRecordInput,
    now: i64,
) -> Result<IncomeRecord> {
    if input.source.trim().is_empty() {
        return Err(Error::Validation("source must not be empty".into()));
    }
    let record = IncomeRecord {
        id: new_id("rec"),
        user_id: input.user_id,
        amount: input.amount,
        source: input.source.trim().to_string(),
        category: input.category.trim().to_string(),
        timestamp: now,
    };
    records.push(record.clone());
    Ok(record)
}

/// Large positive gains celebrate; high-magnitude losses never do.
pub fn celebration_for(record: &IncomeRecord, user_name: &str) -> Option<Celebration> {
    (record.amount >= CELEBRATION_THRESHOLD).then(|| Celebration {
        user_name: user_name.to_string(),
    })
}

#[derive(Debug, Default)]
pub struct RecordEdit {
    pub amount: Option<Decimal>,
    pub source: Option<String>,
    pub category: Option<String>,
}

/// Correct a record in place. `id` and `timestamp` are immutable.
pub fn edit_record(records: &mut [IncomeRecord], id: &str, edit: RecordEdit) -> Result<IncomeRecord> {
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;
    if let Some(amount) = edit.amount {
        record.amount = amount;
    }
    if let Some(source) = edit.source {
        record.source = source;
    }
    if let Some(category) = edit.category {
        record.category = category;
    }
    Ok(record.clone())
}

pub fn delete_record(records: &mut Vec<IncomeRecord>, id: &str) -> Result<IncomeRecord> {
    let idx = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;
    Ok(records.remove(idx))
}

/// Net signed total of all records in the current calendar year, for the
/// yearly-goal readout.
pub fn year_to_date_net(records: &[IncomeRecord], now: i64) -> Decimal {
    let year = Utc
        .timestamp_millis_opt(now)
        .single()
        .map(|dt| dt.year())
        .unwrap_or(1970);
    records
        .iter()
        .filter(|r| {
            Utc.timestamp_millis_opt(r.timestamp)
                .single()
                .map(|dt| dt.year())
                == Some(year)
        })
        .map(|r| r.amount)
        .sum()
}
