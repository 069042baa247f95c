// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use stocktally::{cli, commands, store::CsvStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = match matches.get_one::<String>("dir") {
        Some(dir) => CsvStore::open(dir.trim())?,
        None => CsvStore::open_default()?,
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            store.init_logs()?;
            println!("Logs initialized in {}", store.dir().display());
        }
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("stock", sub)) => commands::stock::handle(&store, sub)?,
        Some(("trend", sub)) => commands::trend::handle(&store, sub)?,
        Some(("purchase", sub)) => commands::purchases::handle(&store, sub)?,
        Some(("sale", sub)) => commands::sales::handle(&store, sub)?,
        Some(("models", sub)) => commands::models::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
