// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, crate_version};

fn with_json(cmd: Command) -> Command {
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

fn date_range(cmd: Command) -> Command {
    cmd.arg(arg!(--from <DATE> "Range start, YYYY-MM-DD (inclusive)").required(false))
        .arg(arg!(--to <DATE> "Range end, YYYY-MM-DD (inclusive)").required(false))
}

pub fn build_cli() -> Command {
    Command::new("stocktally")
        .version(crate_version!())
        .about("Retail inventory tracker over append-only purchase and sale logs")
        .arg(
            arg!(--dir <PATH> "Data directory holding the log files")
                .required(false)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the log files and report their location"))
        .subcommand(with_json(
            Command::new("summary").about("Dashboard totals over the full ledger"),
        ))
        .subcommand(with_json(date_range(
            Command::new("stock")
                .about("Current stock per (model, color)")
                .arg(
                    arg!(--model <NAME> "Restrict to model (repeatable)")
                        .required(false)
                        .action(ArgAction::Append),
                )
                .arg(
                    arg!(--color <NAME> "Restrict to color (repeatable)")
                        .required(false)
                        .action(ArgAction::Append),
                )
                .arg(
                    arg!(--low <QTY> "Low-stock threshold")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("5"),
                ),
        )))
        .subcommand(with_json(date_range(
            Command::new("trend")
                .about("Date-bucketed metric series")
                .arg(arg!(--metric <METRIC> "profit | intake | investment").required(true)),
        )))
        .subcommand(
            Command::new("purchase")
                .about("Stock intake entries")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--model <NAME>).required(true))
                        .arg(arg!(--color <NAME>).required(true))
                        .arg(arg!(--qty <QTY>).required(true))
                        .arg(arg!(--price <AMOUNT> "Purchase price per unit").required(true))
                        .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--supplier <NAME>).required(false))
                        .arg(
                            arg!(--payment <METHOD> "Cash | UPI | Card | Bank Transfer")
                                .required(false),
                        ),
                )
                .subcommand(with_json(Command::new("list"))),
        )
        .subcommand(
            Command::new("sale")
                .about("Stock outflow entries")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--model <NAME>).required(true))
                        .arg(arg!(--color <NAME>).required(true))
                        .arg(arg!(--qty <QTY>).required(true))
                        .arg(arg!(--price <AMOUNT> "Selling price per unit").required(true))
                        .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                        .arg(arg!(--customer <NAME>).required(false))
                        .arg(arg!(--phone <PHONE>).required(false))
                        .arg(
                            arg!(--payment <METHOD> "Cash | UPI | Card | Bank Transfer")
                                .required(false),
                        ),
                )
                .subcommand(with_json(Command::new("list"))),
        )
        .subcommand(with_json(
            Command::new("models")
                .about("Known model names")
                .arg(
                    arg!(--like <TEXT> "Substring match, needs at least 3 characters")
                        .required(false),
                ),
        ))
        .subcommand(Command::new("doctor").about("Data-integrity report over both logs"))
}
