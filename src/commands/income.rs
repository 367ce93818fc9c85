// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Error;
use crate::ledger::{self, NewRecordInput, RecordEdit};
use crate::models::UserId;
use crate::parser::{IncomeParser, LocalParser, RemoteParser};
use crate::store::{AppState, Store, keys};
use crate::utils::{fmt_money, fmt_timestamp, maybe_print_json, now_millis, parse_decimal, pretty_table};

pub fn handle(state: &mut AppState, store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, store, sub)?,
        Some(("parse", sub)) => parse_text(state, store, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("edit", sub)) => edit(state, store, sub)?,
        Some(("delete", sub)) => delete(state, store, sub)?,
        Some(("export", sub)) => export(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_user(sub: &clap::ArgMatches) -> Result<UserId> {
    let raw = sub.get_one::<String>("user").unwrap();
    UserId::parse(raw).ok_or_else(|| anyhow!("unknown member '{}'; use husband|wife", raw))
}

fn record_event(
    state: &mut AppState,
    store: &Store,
    user_id: UserId,
    amount: Decimal,
    source: String,
    category: String,
) -> Result<()> {
    let record = ledger::add_record(
        &mut state.records,
        NewRecordInput {
            user_id,
            amount,
            source,
            category,
        },
        now_millis(),
    )?;
    store.persist(keys::RECORDS, &state.records);

    if let Some(c) = ledger::celebration_for(&record, &state.profiles.get(record.user_id).name) {
        println!("\u{1F389} {} just landed a big one!", c.user_name);
    }
    println!(
        "Recorded {} from '{}' ({}) [{}]",
        fmt_money(&record.amount),
        record.source,
        record.category,
        record.id
    );
    Ok(())
}

fn add(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = parse_user(sub)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let source = sub.get_one::<String>("source").unwrap().trim().to_string();
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    record_event(state, store, user_id, amount, source, category)
}

fn parse_text(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = parse_user(sub)?;
    let text = sub.get_one::<String>("text").unwrap();

    let parsed = if sub.get_flag("remote") {
        match RemoteParser::from_env() {
            Some(p) => p.parse(text),
            None => {
                println!("No model endpoint configured (set NESTEGG_PARSER_URL).");
                return Ok(());
            }
        }
    } else {
        LocalParser.parse(text)
    };

    match parsed {
        Some(p) => record_event(state, store, user_id, p.amount, p.source, p.category),
        None => {
            // ParseFailure: nothing recorded, user re-enters manually
            println!("Could not understand that. Try `nestegg income add` with explicit fields.");
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct IncomeRow {
    id: String,
    when: String,
    member: String,
    amount: String,
    source: String,
    category: String,
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user_filter = match sub.get_one::<String>("user") {
        Some(raw) => Some(UserId::parse(raw).ok_or_else(|| anyhow!("unknown member '{}'", raw))?),
        None => None,
    };

    let mut records: Vec<_> = state
        .records
        .iter()
        .filter(|r| user_filter.is_none_or(|u| r.user_id == u))
        .collect();
    records.sort_by_key(|r| std::cmp::Reverse(r.timestamp));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        records.truncate(*limit);
    }

    let data: Vec<IncomeRow> = records
        .iter()
        .map(|r| IncomeRow {
            id: r.id.clone(),
            when: fmt_timestamp(r.timestamp),
            member: state.profiles.get(r.user_id).name.clone(),
            amount: fmt_money(&r.amount),
            source: r.source.clone(),
            category: r.category.clone(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.when.clone(),
                    r.member.clone(),
                    r.amount.clone(),
                    r.source.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "When", "Member", "Amount", "Source", "Category"], rows)
        );
        let ytd = ledger::year_to_date_net(&state.records, now_millis());
        println!(
            "Year to date: {} / {} goal",
            fmt_money(&ytd),
            fmt_money(&state.yearly_goal)
        );
    }
    Ok(())
}

fn edit(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let edit = RecordEdit {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        source: sub.get_one::<String>("source").map(|s| s.trim().to_string()),
        category: sub
            .get_one::<String>("category")
            .map(|s| s.trim().to_string()),
    };
    if edit.amount.is_none() && edit.source.is_none() && edit.category.is_none() {
        println!("Nothing to change; pass --amount, --source, or --category.");
        return Ok(());
    }
    let record = ledger::edit_record(&mut state.records, id, edit)?;
    store.persist(keys::RECORDS, &state.records);
    println!(
        "Updated {}: {} from '{}' ({})",
        record.id,
        fmt_money(&record.amount),
        record.source,
        record.category
    );
    Ok(())
}

fn delete(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let record = ledger::delete_record(&mut state.records, id)?;
    store.persist(keys::RECORDS, &state.records);
    println!("Deleted '{}' ({})", record.source, fmt_money(&record.amount));
    Ok(())
}

fn export(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("open {out} for writing"))?;
            wtr.write_record(["id", "timestamp", "member", "amount", "source", "category"])?;
            for r in &state.records {
                wtr.write_record([
                    r.id.as_str(),
                    &r.timestamp.to_string(),
                    r.user_id.as_str(),
                    &r.amount.to_string(),
                    r.source.as_str(),
                    r.category.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&state.records)?)
                .with_context(|| format!("write {out}"))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} records to {}", state.records.len(), out);
    Ok(())
}

pub fn handle_goal(state: &mut AppState, store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            if amount <= Decimal::ZERO {
                return Err(Error::Validation("yearly goal must be positive".into()).into());
            }
            state.yearly_goal = amount;
            store.persist(keys::YEARLY_GOAL, &state.yearly_goal);
            println!("Yearly goal set to {}", fmt_money(&amount));
        }
        Some(("show", _)) => {
            let ytd = ledger::year_to_date_net(&state.records, now_millis());
            println!(
                "Yearly goal: {}  |  year to date: {}",
                fmt_money(&state.yearly_goal),
                fmt_money(&ytd)
            );
        }
        _ => {}
    }
    Ok(())
}
