// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::IncomeRecord;

pub const WINDOW_DAYS: i64 = 30;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Estimate how many days until a goal is funded, from the trailing 30-day
/// income average. The divisor is the fixed window length, not the record
/// count, so sparse activity yields a conservative estimate. Returns
/// `Some(0)` when the goal is already funded and `None` when the window has
/// no positive signal. Pure; recomputed on every display.
pub fn estimate_days_to_completion(
    target_amount: Decimal,
    current_saved_amount: Decimal,
    records: &[IncomeRecord],
    now: i64,
) -> Option<i64> {
    let remaining = target_amount - current_saved_amount;
    if remaining <= Decimal::ZERO {
        return Some(0);
    }
    let cutoff = now - WINDOW_DAYS * DAY_MS;
    let total: Decimal = records
        .iter()
        .filter(|r| r.timestamp >= cutoff && r.timestamp <= now)
        .map(|r| r.amount)
        .sum();
    let daily_average = total / Decimal::from(WINDOW_DAYS);
    if daily_average <= Decimal::ZERO {
        return None;
    }
    (remaining / daily_average).ceil().to_i64()
}
