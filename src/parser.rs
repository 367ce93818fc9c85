// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::utils::http_client;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedIncome {
    pub amount: Decimal,
    pub source: String,
    pub category: String,
}

/// Free-text income classifier. Two interchangeable implementations: a local
/// heuristic and an optional remote model. `None` means the text could not
/// be understood; the caller falls back to manual entry.
pub trait IncomeParser {
    fn parse(&self, text: &str) -> Option<ParsedIncome>;
}

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+(\.\d+)?").unwrap());

const NEGATIVE_CUES: &[&str] = &[
    "lost", "loss", "spent", "spend", "paid", "bought", "cost", "fee", "expense",
];
const POSITIVE_CUES: &[&str] = &[
    "earned", "income", "salary", "wage", "bonus", "profit", "dividend", "refund", "sold",
    "received",
];

const WORK_CUES: &[&str] = &["salary", "paycheck", "wage", "payday"];
const FINANCE_CUES: &[&str] = &["fund", "stock", "invest", "dividend", "crypto"];
const SIDE_CUES: &[&str] = &["side", "freelance", "gig", "hustle"];

/// Sign comes from lexical cues: negative-cue words force a loss, positive
/// cues flip a misparsed negative back. Categories are fixed keyword
/// buckets; losses with no better bucket land in "expense".
pub struct LocalParser;

impl IncomeParser for LocalParser {
    fn parse(&self, text: &str) -> Option<ParsedIncome> {
        let m = AMOUNT_RE.find(text)?;
        let mut amount: Decimal = m.as_str().parse().ok()?;

        let lower = text.to_lowercase();
        let negative = NEGATIVE_CUES.iter().any(|w| lower.contains(w));
        let positive = POSITIVE_CUES.iter().any(|w| lower.contains(w));
        if negative && amount > Decimal::ZERO {
            amount = -amount;
        }
        if positive && amount < Decimal::ZERO {
            amount = amount.abs();
        }

        // Source: the text minus the number, currency marks, and cue words.
        let stripped = format!("{}{}", &text[..m.start()], &text[m.end()..])
            .replace(['$', '\u{a5}', '\u{20ac}', '\u{a3}'], " ");
        let source: String = stripped
            .split_whitespace()
            .filter(|tok| {
                let t = tok
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                !t.is_empty()
                    && !NEGATIVE_CUES.contains(&t.as_str())
                    && !POSITIVE_CUES.contains(&t.as_str())
            })
            .collect::<Vec<_>>()
            .join(" ");
        let source = if source.is_empty() {
            if amount > Decimal::ZERO {
                "extra income".to_string()
            } else {
                "necessary expense".to_string()
            }
        } else {
            source
        };

        let category = if WORK_CUES.iter().any(|w| lower.contains(w)) {
            "work"
        } else if FINANCE_CUES.iter().any(|w| lower.contains(w)) {
            "finance"
        } else if SIDE_CUES.iter().any(|w| lower.contains(w)) {
            "side-income"
        } else if negative {
            "expense"
        } else {
            "other"
        };

        Some(ParsedIncome {
            amount,
            source,
            category: category.to_string(),
        })
    }
}

/// Model-backed parser: posts `{"text": ...}` to an HTTP endpoint and
/// expects `{amount, source, category}` back. Any transport or decode
/// failure degrades to "no parse"; it never takes the session down.
pub struct RemoteParser {
    endpoint: String,
}

impl RemoteParser {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RemoteParser {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var("NESTEGG_PARSER_URL").ok().map(Self::new)
    }
}

impl IncomeParser for RemoteParser {
    fn parse(&self, text: &str) -> Option<ParsedIncome> {
        let client = http_client().ok()?;
        let resp = client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .ok()?
            .error_for_status()
            .ok()?;
        resp.json::<ParsedIncome>().ok()
    }
}
