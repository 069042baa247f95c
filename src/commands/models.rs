// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::RecordStore;
use crate::utils::{maybe_print_json, pretty_table, suggest};
use anyhow::Result;

pub fn handle(store: &dyn RecordStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let ledger = super::load_ledger(store)?;
    let names = ledger.model_names();

    let shown: Vec<String> = match m.get_one::<String>("like") {
        Some(typed) => suggest(typed, &names).into_iter().map(String::from).collect(),
        None => names,
    };

    if maybe_print_json(json_flag, jsonl_flag, &shown)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = shown.into_iter().map(|n| vec![n]).collect();
    println!("{}", pretty_table(&["Model"], rows));
    Ok(())
}
