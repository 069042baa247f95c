// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::stock::compute_totals;
use crate::store::RecordStore;
use crate::utils::{DEFAULT_CURRENCY_SYMBOL, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &dyn RecordStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let ledger = super::load_ledger(store)?;
    let totals = compute_totals(ledger.purchases(), ledger.sales());

    if maybe_print_json(json_flag, jsonl_flag, &totals)? {
        return Ok(());
    }
    let ccy = DEFAULT_CURRENCY_SYMBOL;
    let rows = vec![
        vec![
            "Total Products".into(),
            totals.total_purchased_qty.to_string(),
        ],
        vec![
            "Total Investment".into(),
            fmt_money(&totals.total_investment, ccy),
        ],
        vec!["Stock Left".into(), totals.stock_left.to_string()],
        vec!["Total Sales Qty".into(), totals.total_sold_qty.to_string()],
        vec![
            "Total Sales Value".into(),
            fmt_money(&totals.total_sales_value, ccy),
        ],
        vec!["Net Profit".into(), fmt_money(&totals.net_profit, ccy)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
