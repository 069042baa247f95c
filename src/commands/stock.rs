// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::stock::{Thresholds, compute_stock};
use crate::ledger::LedgerFilter;
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn RecordStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let mut filter = LedgerFilter::default();
    if let Some(models) = m.get_many::<String>("model") {
        filter.models = models.map(|s| s.trim().to_string()).collect();
    }
    if let Some(colors) = m.get_many::<String>("color") {
        filter.colors = colors.map(|s| s.trim().to_string()).collect();
    }
    if let Some(from) = m.get_one::<String>("from") {
        filter.from = Some(parse_date(from)?);
    }
    if let Some(to) = m.get_one::<String>("to") {
        filter.to = Some(parse_date(to)?);
    }
    let thresholds = Thresholds {
        low_stock_max: *m.get_one::<i64>("low").unwrap_or(&5),
        ..Thresholds::default()
    };

    let ledger = super::load_ledger(store)?;
    let (purchases, sales) = ledger.filtered(&filter);
    let entries = compute_stock(purchases, sales, &thresholds);

    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let note = if e.unmatched_sale {
                "no purchase on record"
            } else if e.is_oversold() {
                "oversold"
            } else {
                ""
            };
            vec![
                e.model.clone(),
                e.color.clone(),
                e.purchased_qty.to_string(),
                e.sold_qty.to_string(),
                e.current_qty.to_string(),
                format!("{:.2}", e.purchase_price),
                format!("{:.2}", e.selling_price),
                format!("{:.2}", e.stock_value),
                e.status.as_str().to_string(),
                note.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Model",
                "Color",
                "Purchased",
                "Sold",
                "Current Qty",
                "Purchase Price",
                "Selling Price",
                "Stock Value",
                "Status",
                "Note",
            ],
            rows,
        )
    );
    Ok(())
}
