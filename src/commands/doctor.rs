// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::stock::{Thresholds, compute_stock};
use crate::store::RecordStore;
use crate::utils::pretty_table;
use anyhow::Result;

/// Integrity findings are data, not failures: the command always exits zero.
pub fn handle(store: &dyn RecordStore) -> Result<()> {
    let (ledger, diagnostics) = crate::ledger::Ledger::load(store)?;
    let mut rows = Vec::new();

    for d in &diagnostics {
        rows.push(vec!["skipped_row".into(), d.to_string()]);
    }

    // 1) Oversold and purchase-less keys
    let entries = compute_stock(ledger.purchases(), ledger.sales(), &Thresholds::default());
    for e in &entries {
        if e.unmatched_sale {
            rows.push(vec![
                "sale_without_purchase".into(),
                format!("{} / {} ({} sold)", e.model, e.color, e.sold_qty),
            ]);
        } else if e.is_oversold() {
            rows.push(vec![
                "oversold".into(),
                format!("{} / {} (current {})", e.model, e.color, e.current_qty),
            ]);
        }
    }

    // 2) Stored totals drifting from quantity * unit price
    for p in ledger.purchases() {
        if p.total_value != p.line_value() {
            rows.push(vec![
                "total_value_drift".into(),
                format!(
                    "{} {} / {}: stored {} != {}",
                    p.date,
                    p.model,
                    p.color,
                    p.total_value,
                    p.line_value()
                ),
            ]);
        }
    }
    for s in ledger.sales() {
        if s.total_sale != s.line_value() {
            rows.push(vec![
                "total_sale_drift".into(),
                format!(
                    "{} {} / {}: stored {} != {}",
                    s.date,
                    s.model,
                    s.color,
                    s.total_sale,
                    s.line_value()
                ),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
