// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use nestegg::store::{AppState, Store, keys};
use nestegg::{cli, commands, pairing};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let store = Store::open_default()?;
    let mut state = AppState::load(&store);

    let Some((name, sub)) = matches.subcommand() else {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    };

    // Everything except `start` is gated on the family identity.
    if !pairing::is_paired(&state.family) && name != "start" {
        println!("This device is not set up yet. Run `nestegg start` to begin.");
        return Ok(());
    }

    match (name, sub) {
        ("start", _) => {
            let id = pairing::start(&mut state.family)?;
            store.persist(keys::FAMILY, &state.family);
            println!("Family space created (id: {id}). You're all set.");
        }
        ("unpair", sub) => {
            if !sub.get_flag("yes") {
                println!("Unpairing clears the family identity. Income and wish data are kept.");
                println!("Re-run with --yes to confirm.");
            } else {
                pairing::unpair(&mut state.family);
                store.persist(keys::FAMILY, &state.family);
                println!("Unpaired. Income and wish data were kept.");
            }
        }
        ("income", sub) => commands::income::handle(&mut state, &store, sub)?,
        ("goal", sub) => commands::income::handle_goal(&mut state, &store, sub)?,
        ("wish", sub) => commands::wishes::handle(&mut state, &store, sub)?,
        ("profile", sub) => commands::profiles::handle(&mut state, &store, sub)?,
        ("sync", sub) => commands::sync::handle(&mut state, &store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
