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
    let supplier = sub.get_one::<String>("supplier").map(|s| s.trim()).unwrap_or("");
    let payment = match sub.get_one::<String>("payment") {
        Some(raw) => Some(
            PaymentMethod::parse(raw)
                .ok_or_else(|| anyhow!("Unknown payment method '{}'", raw))?,
        ),
        None => None,
    };

    // Hint at similar names before an unseen model lands in the log.
    let ledger = super::load_ledger(store)?;
    let names = ledger.model_names();
    if !names.iter().any(|n| n == &model) {
        let hits = suggest(&model, &names);
        if !hits.is_empty() {
            eprintln!("note: new model '{}'; similar: {}", model, hits.join(", "));
        }
    }

    let total = Decimal::from(qty) * price;
    store.append(
        LogKind::Purchases,
        &[
            model.clone(),
            color.clone(),
            qty.to_string(),
            price.to_string(),
            total.to_string(),
            date.to_string(),
            supplier.to_string(),
            payment.map(|p| p.as_str().to_string()).unwrap_or_default(),
        ],
    )?;
    println!(
        "Recorded purchase of {} x {} ({}) at {} on {}",
        qty, model, color, price, date
    );
    Ok(())
}

fn list(store: &dyn RecordStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = super::load_ledger(store)?;

    if maybe_print_json(json_flag, jsonl_flag, &ledger.purchases())? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = ledger
        .purchases()
        .iter()
        .map(|p| {
            vec![
                p.date.to_string(),
                p.model.clone(),
                p.color.clone(),
                p.quantity.to_string(),
                format!("{:.2}", p.unit_price),
                format!("{:.2}", p.line_value()),
                p.supplier.clone(),
                p.payment.map(|pm| pm.as_str()).unwrap_or("").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Date", "Model", "Color", "Qty", "Unit Price", "Total", "Supplier", "Payment",
            ],
            rows,
        )
    );
    Ok(())
}
