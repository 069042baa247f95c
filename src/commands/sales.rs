// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::PaymentMethod;
use crate::store::{LogKind, RecordStore};
use crate::utils::{maybe_print_json, parse_date, parse_money, parse_quantity, pretty_table, suggest};
use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

pub fn handle(store: &dyn RecordStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub),
        Some(("list", sub)) => list(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &dyn RecordStore, sub: &clap::ArgMatches) -> Result<()> {
    let model = sub.get_one::<String>("model").unwrap().trim().to_string();
    let color = sub.get_one::<String>("color").unwrap().trim().to_string();
    let qty = parse_quantity(sub.get_one::<String>("qty").unwrap())?;
    let price = parse_money(sub.get_one::<String>("price").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let customer = sub.get_one::<String>("customer").map(|s| s.trim()).unwrap_or("");
    let phone = sub.get_one::<String>("phone").map(|s| s.trim()).unwrap_or("");
    let payment = match sub.get_one::<String>("payment") {
        Some(raw) => Some(
            PaymentMethod::parse(raw)
                .ok_or_else(|| anyhow!("Unknown payment method '{}'", raw))?,
        ),
        None => None,
    };

    // A sale against a model the purchases log has never seen is usually a
    // typo; warn with lookalikes but let the row through (reconciliation
    // surfaces it as an unmatched sale).
    let ledger = super::load_ledger(store)?;
    let names = ledger.model_names();
    if !names.iter().any(|n| n == &model) {
        let hits = suggest(&model, &names);
        if hits.is_empty() {
            eprintln!("note: model '{}' has no purchase history", model);
        } else {
            eprintln!(
                "note: model '{}' has no purchase history; similar: {}",
                model,
                hits.join(", ")
            );
        }
    }

    let total = Decimal::from(qty) * price;
    store.append(
        LogKind::Sales,
        &[
            date.to_string(),
            model.clone(),
            color.clone(),
            qty.to_string(),
            price.to_string(),
            customer.to_string(),
            payment.map(|p| p.as_str().to_string()).unwrap_or_default(),
            phone.to_string(),
            total.to_string(),
        ],
    )?;
    println!(
        "Recorded sale of {} x {} ({}) at {} on {} (total {})",
        qty, model, color, price, date, total
    );
    Ok(())
}

fn list(store: &dyn RecordStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = super::load_ledger(store)?;

    if maybe_print_json(json_flag, jsonl_flag, &ledger.sales())? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = ledger
        .sales()
        .iter()
        .map(|s| {
            vec![
                s.date.to_string(),
                s.model.clone(),
                s.color.clone(),
                s.quantity_sold.to_string(),
                format!("{:.2}", s.selling_price),
                format!("{:.2}", s.line_value()),
                s.customer_name.clone(),
                s.payment.map(|pm| pm.as_str()).unwrap_or("").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Date", "Model", "Color", "Qty", "Price", "Total", "Customer", "Payment",
            ],
            rows,
        )
    );
    Ok(())
}
