// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::parser::{IncomeParser, LocalParser};
use rust_decimal::Decimal;

fn parse(text: &str) -> Option<nestegg::parser::ParsedIncome> {
    LocalParser.parse(text)
}

#[test]
fn extracts_amount_source_and_category() {
    let p = parse("earned 500 from freelance design").unwrap();
    assert_eq!(p.amount, Decimal::from(500));
    assert_eq!(p.category, "side-income");
    assert!(p.source.contains("freelance design"));
}

#[test]
fn salary_lands_in_the_work_bucket() {
    let p = parse("salary 3000").unwrap();
    assert_eq!(p.amount, Decimal::from(3000));
    assert_eq!(p.category, "work");
}

#[test]
fn negative_cues_force_a_loss() {
    let p = parse("spent 45.50 at the grocery store").unwrap();
    assert_eq!(p.amount, Decimal::new(-4550, 2));
    assert_eq!(p.category, "expense");
    assert!(p.source.contains("grocery"));
}

#[test]
fn bucket_keywords_beat_the_loss_bucket() {
    // a loss on the stock market still classifies as finance
    let p = parse("lost 200 in the stock market").unwrap();
    assert_eq!(p.amount, Decimal::from(-200));
    assert_eq!(p.category, "finance");
}

#[test]
fn positive_cues_flip_a_misparsed_negative() {
    let p = parse("-50 refund for returned shoes").unwrap();
    assert_eq!(p.amount, Decimal::from(50));
}

#[test]
fn purchases_are_losses() {
    let p = parse("bought 1200 new phone").unwrap();
    assert_eq!(p.amount, Decimal::from(-1200));
    assert_eq!(p.category, "expense");
}

#[test]
fn bare_number_gets_fallback_source() {
    let p = parse("750").unwrap();
    assert_eq!(p.amount, Decimal::from(750));
    assert_eq!(p.source, "extra income");
    assert_eq!(p.category, "other");

    let p = parse("spent 750").unwrap();
    assert_eq!(p.source, "necessary expense");
}

#[test]
fn text_without_a_number_is_not_parsed() {
    assert!(parse("no numbers here at all").is_none());
    assert!(parse("").is_none());
}
