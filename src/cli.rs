// Copyright (c) 2026 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .short('u')
        .required(true)
        .help("Acting member: husband|wife")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("nestegg")
        .about("Local-first couple savings tracker: income ledger, wishlist goals, device sync")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("start")
                .about("Create the local family identity and unlock the app"),
        )
        .subcommand(
            Command::new("unpair")
                .about("Clear the family identity; income and wish data are kept")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Acknowledge that unpairing is irreversible"),
                ),
        )
        .subcommand(income_cmd())
        .subcommand(goal_cmd())
        .subcommand(wish_cmd())
        .subcommand(profile_cmd())
        .subcommand(sync_cmd())
}

fn income_cmd() -> Command {
    Command::new("income")
        .about("Record and review income and loss events")
        .subcommand(
            Command::new("add")
                .about("Record an income (positive) or loss (negative) event")
                .arg(user_arg())
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Signed decimal amount; negative = loss"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .required(true)
                        .help("Where it came from (or went)"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .default_value("other"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Record an event from free text, e.g. \"earned 500 freelance\"")
                .arg(user_arg())
                .arg(Arg::new("text").required(true).help("Free-form description"))
                .arg(
                    Arg::new("remote")
                        .long("remote")
                        .action(ArgAction::SetTrue)
                        .help("Use the model endpoint from NESTEGG_PARSER_URL"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List events with a year-to-date summary")
                .arg(Arg::new("user").long("user").short('u').help("Filter by member"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most N most recent events"),
                ),
        ))
        .subcommand(
            Command::new("edit")
                .about("Correct an event's amount/source/category")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .allow_negative_numbers(true),
                )
                .arg(Arg::new("source").long("source").short('s'))
                .arg(Arg::new("category").long("category").short('c')),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an event")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger to a file")
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                ),
        )
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Yearly savings goal")
        .subcommand(
            Command::new("set")
                .about("Set the yearly goal")
                .arg(Arg::new("amount").required(true).allow_negative_numbers(true)),
        )
        .subcommand(Command::new("show").about("Show the goal and year-to-date net"))
}

fn wish_cmd() -> Command {
    Command::new("wish")
        .about("Savings wishlist")
        .subcommand(
            Command::new("add")
                .about("Create a savings goal")
                .arg(user_arg())
                .arg(Arg::new("title").long("title").short('t').required(true))
                .arg(
                    Arg::new("target")
                        .long("target")
                        .required(true)
                        .help("Target amount, must be positive"),
                )
                .arg(Arg::new("image").long("image").help("Image URL or data URI")),
        )
        .subcommand(
            Command::new("save")
                .about("Put money toward a wish")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .required(true)
                        .help("Contribution amount, must be positive"),
                ),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename a wish")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("title").required(true)),
        )
        .subcommand(
            Command::new("retarget")
                .about("Change a wish's target amount")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("pin")
                .about("Toggle pinned-to-front display")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("image")
                .about("Set a wish's image")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("url").required(true)),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a wish (undoable for 6 seconds)")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(Command::new("undo").about("Restore the last removed wish"))
        .subcommand(
            Command::new("reorder")
                .about("Set the manual display order; list every wish id")
                .arg(Arg::new("ids").required(true).num_args(1..)),
        )
        .subcommand(json_flags(
            Command::new("list").about("List wishes, pinned first, with estimates"),
        ))
}

fn profile_cmd() -> Command {
    Command::new("profile")
        .about("Member display profiles")
        .subcommand(
            Command::new("set")
                .about("Update a member's name or avatar")
                .arg(user_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("avatar").long("avatar")),
        )
        .subcommand(Command::new("show").about("Show both member profiles"))
}

fn sync_cmd() -> Command {
    Command::new("sync")
        .about("Exchange data with the other device")
        .subcommand(
            Command::new("export")
                .about("Emit the sync payload to render as a scannable code")
                .arg(Arg::new("out").long("out").help("Write to a file instead of stdout")),
        )
        .subcommand(
            Command::new("import")
                .about("Fold a scanned payload into local data")
                .arg(Arg::new("file").help("File holding the decoded payload text"))
                .arg(
                    Arg::new("text")
                        .long("text")
                        .help("Pass the payload text inline"),
                ),
        )
}
