// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::models::UserId;
use crate::store::{AppState, Store, keys};
use crate::utils::pretty_table;

pub fn handle(state: &mut AppState, store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let raw = sub.get_one::<String>("user").unwrap();
            let user = UserId::parse(raw)
                .ok_or_else(|| anyhow!("unknown member '{}'; use husband|wife", raw))?;
            let name = sub.get_one::<String>("name");
            let avatar = sub.get_one::<String>("avatar");
            if name.is_none() && avatar.is_none() {
                println!("Nothing to change; pass --name or --avatar.");
                return Ok(());
            }
            let profile = state.profiles.get_mut(user);
            if let Some(name) = name {
                profile.name = name.trim().to_string();
            }
            if let Some(avatar) = avatar {
                profile.avatar = avatar.trim().to_string();
            }
            store.persist(keys::PROFILES, &state.profiles);
            println!("Profile for {} updated.", user.as_str());
        }
        Some(("show", _)) => {
            let rows = [UserId::Husband, UserId::Wife]
                .iter()
                .map(|u| {
                    let p = state.profiles.get(*u);
                    vec![u.as_str().to_string(), p.name.clone(), p.avatar.clone()]
                })
                .collect();
            println!("{}", pretty_table(&["Member", "Name", "Avatar"], rows));
        }
        _ => {}
    }
    Ok(())
}
