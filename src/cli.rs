// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON document per line")
            .action(ArgAction::SetTrue)
            .conflicts_with("json"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pursebook")
        .about("Pursebook: track income and expenses, browse history, and view summaries")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("income")
                                .help("income | expense"),
                        )
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List transactions in entry order"),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("clear").about("Delete every transaction").arg(
                        Arg::new("yes")
                            .long("yes")
                            .short('y')
                            .help("Skip the confirmation prompt")
                            .action(ArgAction::SetTrue),
                    ),
                ),
        )
        .subcommand(json_flags(
            Command::new("history")
                .about("Search and page through past transactions")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("all")
                        .help("all | income | expense"),
                )
                .arg(Arg::new("search").long("search"))
                .arg(
                    Arg::new("page")
                        .long("page")
                        .default_value("1")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(json_flags(
            Command::new("summary").about("Balance, income and expense totals"),
        ))
        .subcommand(json_flags(
            Command::new("stats")
                .about("Totals for a time window")
                .arg(
                    Arg::new("window")
                        .long("window")
                        .default_value("all")
                        .help("all | week | month | year"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("breakdown").about("Expense totals per category"),
        ))
        .subcommand(json_flags(
            Command::new("insights").about("Average and highest expense"),
        ))
        .subcommand(
            Command::new("profile")
                .about("Show or edit the profile")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("save")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("email").long("email").required(true)),
                ),
        )
        .subcommand(
            Command::new("prefs")
                .about("Display preferences")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("currency")
                        .about("Set the currency symbol")
                        .arg(Arg::new("symbol").required(true)),
                )
                .subcommand(
                    Command::new("theme")
                        .about("Set the theme")
                        .arg(Arg::new("theme").required(true).help("light | dark")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
