// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::models::{UserId, WishStatus};
use crate::projection::estimate_days_to_completion;
use crate::store::{AppState, Store, keys};
use crate::utils::{fmt_money, maybe_print_json, now_millis, parse_decimal, pretty_table};
use crate::wishlist::{self, NewWishInput};

pub fn handle(state: &mut AppState, store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, store, sub)?,
        Some(("save", sub)) => save(state, store, sub)?,
        Some(("rename", sub)) => rename(state, store, sub)?,
        Some(("retarget", sub)) => retarget(state, store, sub)?,
        Some(("pin", sub)) => pin(state, store, sub)?,
        Some(("image", sub)) => image(state, store, sub)?,
        Some(("remove", sub)) => remove(state, store, sub)?,
        Some(("undo", _)) => undo(state, store)?,
        Some(("reorder", sub)) => reorder(state, store, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("user").unwrap();
    let user_id =
        UserId::parse(raw).ok_or_else(|| anyhow!("unknown member '{}'; use husband|wife", raw))?;
    let title = sub.get_one::<String>("title").unwrap().clone();
    let target_amount = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let image_url = sub
        .get_one::<String>("image")
        .cloned()
        .unwrap_or_default();

    let wish = wishlist::create(
        &mut state.wishes,
        NewWishInput {
            title,
            target_amount,
            user_id,
            image_url,
        },
    )?;
    store.persist(keys::WISHES, &state.wishes);
    println!(
        "Added wish '{}' with target {} [{}]",
        wish.title,
        fmt_money(&wish.target_amount),
        wish.id
    );
    Ok(())
}

fn save(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let wish = wishlist::contribute(&mut state.wishes, id, amount, now_millis())?;
    store.persist(keys::WISHES, &state.wishes);
    if wish.status == WishStatus::Completed {
        println!("'{}' is fully funded! \u{1F3C6}", wish.title);
    } else {
        println!(
            "Saved {} toward '{}' ({} / {})",
            fmt_money(&amount),
            wish.title,
            fmt_money(&wish.current_saved_amount),
            fmt_money(&wish.target_amount)
        );
    }
    Ok(())
}

fn rename(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let title = sub.get_one::<String>("title").unwrap();
    wishlist::rename(&mut state.wishes, id, title)?;
    store.persist(keys::WISHES, &state.wishes);
    println!("Renamed {} to '{}'", id, title.trim());
    Ok(())
}

fn retarget(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let wish = wishlist::retarget(&mut state.wishes, id, amount)?;
    store.persist(keys::WISHES, &state.wishes);
    if wish.status == WishStatus::Completed {
        println!(
            "Target for '{}' is now {}, already reached! \u{1F3C6}",
            wish.title,
            fmt_money(&wish.target_amount)
        );
    } else {
        println!(
            "Target for '{}' is now {}",
            wish.title,
            fmt_money(&wish.target_amount)
        );
    }
    Ok(())
}

fn pin(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let pinned = wishlist::toggle_pin(&mut state.wishes, id)?;
    store.persist(keys::WISHES, &state.wishes);
    println!("{} {}", if pinned { "Pinned" } else { "Unpinned" }, id);
    Ok(())
}

fn image(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let url = sub.get_one::<String>("url").unwrap();
    wishlist::set_image(&mut state.wishes, id, url)?;
    store.persist(keys::WISHES, &state.wishes);
    println!("Image updated for {}", id);
    Ok(())
}

fn remove(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let wish = wishlist::remove(&mut state.wishes, id)?;
    let title = wish.title.clone();
    wishlist::stash_undo(&mut state.undo, wish, now_millis());
    store.persist(keys::WISHES, &state.wishes);
    store.persist(keys::UNDO, &state.undo);
    println!("Removed '{}'. Run `nestegg wish undo` within 6 seconds to restore.", title);
    Ok(())
}

fn undo(state: &mut AppState, store: &Store) -> Result<()> {
    let result = wishlist::restore(&mut state.wishes, &mut state.undo, now_millis());
    // the slot is consumed either way
    store.persist(keys::UNDO, &state.undo);
    let wish = result?;
    store.persist(keys::WISHES, &state.wishes);
    println!("Restored '{}'", wish.title);
    Ok(())
}

fn reorder(state: &mut AppState, store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let ids: Vec<String> = sub
        .get_many::<String>("ids")
        .unwrap()
        .cloned()
        .collect();
    wishlist::reorder(&mut state.wishes, &ids)?;
    store.persist(keys::WISHES, &state.wishes);
    println!("Order updated.");
    Ok(())
}

#[derive(Serialize)]
struct WishRow {
    id: String,
    title: String,
    member: String,
    saved: String,
    target: String,
    status: String,
    pinned: bool,
    estimated_days: Option<i64>,
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = now_millis();

    let data: Vec<WishRow> = wishlist::display_order(&state.wishes)
        .into_iter()
        .map(|w| WishRow {
            id: w.id.clone(),
            title: w.title.clone(),
            member: state.profiles.get(w.user_id).name.clone(),
            saved: fmt_money(&w.current_saved_amount),
            target: fmt_money(&w.target_amount),
            status: match w.status {
                WishStatus::Pending => "pending".to_string(),
                WishStatus::Ongoing => "ongoing".to_string(),
                WishStatus::Completed => "completed".to_string(),
            },
            pinned: w.is_pinned,
            estimated_days: estimate_days_to_completion(
                w.target_amount,
                w.current_saved_amount,
                &state.records,
                now,
            ),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    if r.pinned { "\u{1F4CC}".to_string() } else { String::new() },
                    r.id.clone(),
                    r.title.clone(),
                    r.member.clone(),
                    format!("{} / {}", r.saved, r.target),
                    r.status.clone(),
                    match r.estimated_days {
                        Some(0) => "done".to_string(),
                        Some(d) => format!("~{d} days"),
                        None => "needs more data".to_string(),
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["", "Id", "Title", "Member", "Progress", "Status", "Estimate"],
                rows
            )
        );
    }
    Ok(())
}
