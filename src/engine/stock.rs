// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Purchase, Sale, StockEntry, StockStatus, Totals};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Stock-status cutoffs. Defaults: qty <= 0 out of stock, qty <= 5 low.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub out_of_stock_max: i64,
    pub low_stock_max: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            out_of_stock_max: 0,
            low_stock_max: 5,
        }
    }
}

pub fn classify(qty: i64, thresholds: &Thresholds) -> StockStatus {
    if qty <= thresholds.out_of_stock_max {
        StockStatus::OutOfStock
    } else if qty <= thresholds.low_stock_max {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Latest-dated value for a key; on equal dates the later source row wins.
#[derive(Debug, Clone, Copy)]
struct Latest {
    date: NaiveDate,
    value: Decimal,
}

impl Latest {
    fn update(slot: &mut Option<Latest>, date: NaiveDate, value: Decimal) {
        match slot {
            Some(cur) if date < cur.date => {}
            _ => *slot = Some(Latest { date, value }),
        }
    }
}

#[derive(Debug, Default)]
struct Acc {
    purchased: i64,
    sold: i64,
    purchase_price: Option<Latest>,
    selling_price: Option<Latest>,
}

/// Full outer join of both logs on (model, color), ordered by key.
///
/// Sale-only keys are kept and flagged; negative current quantities signal
/// oversell and pass through unclamped.
pub fn compute_stock<'a, P, S>(purchases: P, sales: S, thresholds: &Thresholds) -> Vec<StockEntry>
where
    P: IntoIterator<Item = &'a Purchase>,
    S: IntoIterator<Item = &'a Sale>,
{
    let mut groups: BTreeMap<(String, String), Acc> = BTreeMap::new();

    for p in purchases {
        let key = (p.model.trim().to_string(), p.color.trim().to_string());
        let acc = groups.entry(key).or_default();
        acc.purchased += p.quantity;
        Latest::update(&mut acc.purchase_price, p.date, p.unit_price);
    }
    for s in sales {
        let key = (s.model.trim().to_string(), s.color.trim().to_string());
        let acc = groups.entry(key).or_default();
        acc.sold += s.quantity_sold;
        Latest::update(&mut acc.selling_price, s.date, s.selling_price);
    }

    groups
        .into_iter()
        .map(|((model, color), acc)| {
            let current_qty = acc.purchased - acc.sold;
            let purchase_price = acc.purchase_price.map(|l| l.value).unwrap_or(Decimal::ZERO);
            let selling_price = acc.selling_price.map(|l| l.value).unwrap_or(Decimal::ZERO);
            StockEntry {
                model,
                color,
                purchased_qty: acc.purchased,
                sold_qty: acc.sold,
                current_qty,
                purchase_price,
                selling_price,
                stock_value: Decimal::from(current_qty) * purchase_price,
                status: classify(current_qty, thresholds),
                unmatched_sale: acc.purchased == 0 && acc.sold > 0,
            }
        })
        .collect()
}

/// Dashboard totals. Monetary sums are recomputed from quantity and unit
/// price; stored row totals are never trusted here.
pub fn compute_totals<'a, P, S>(purchases: P, sales: S) -> Totals
where
    P: IntoIterator<Item = &'a Purchase>,
    S: IntoIterator<Item = &'a Sale>,
{
    let mut total_purchased_qty = 0i64;
    let mut total_investment = Decimal::ZERO;
    for p in purchases {
        total_purchased_qty += p.quantity;
        total_investment += p.line_value();
    }
    let mut total_sold_qty = 0i64;
    let mut total_sales_value = Decimal::ZERO;
    for s in sales {
        total_sold_qty += s.quantity_sold;
        total_sales_value += s.line_value();
    }
    Totals {
        total_purchased_qty,
        total_investment,
        total_sold_qty,
        total_sales_value,
        net_profit: total_sales_value - total_investment,
        stock_left: total_purchased_qty - total_sold_qty,
    }
}
