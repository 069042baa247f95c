// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::trend::build_trend;
use crate::models::TrendMetric;
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(store: &dyn RecordStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let metric_raw = m.get_one::<String>("metric").unwrap();
    let metric = TrendMetric::parse(metric_raw)
        .ok_or_else(|| anyhow!("Unknown metric '{}' (use profit|intake|investment)", metric_raw))?;
    let from = m.get_one::<String>("from").map(|s| parse_date(s)).transpose()?;
    let to = m.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;

    let ledger = super::load_ledger(store)?;
    let points = build_trend(metric, ledger.purchases(), ledger.sales(), from, to);

    if maybe_print_json(json_flag, jsonl_flag, &points)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| vec![p.date.to_string(), format!("{:.2}", p.value)])
        .collect();
    println!("{}", pretty_table(&["Date", "Value"], rows));
    Ok(())
}
