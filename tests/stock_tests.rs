// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stocktally::engine::stock::{Thresholds, classify, compute_stock, compute_totals};
use stocktally::models::{Purchase, Sale, StockStatus};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn purchase(model: &str, color: &str, qty: i64, price: i64, on: &str) -> Purchase {
    Purchase {
        model: model.into(),
        color: color.into(),
        quantity: qty,
        unit_price: Decimal::from(price),
        total_value: Decimal::from(qty * price),
        date: date(on),
        supplier: String::new(),
        payment: None,
    }
}

fn sale(model: &str, color: &str, qty: i64, price: i64, on: &str) -> Sale {
    Sale {
        date: date(on),
        model: model.into(),
        color: color.into(),
        quantity_sold: qty,
        selling_price: Decimal::from(price),
        customer_name: String::new(),
        payment: None,
        customer_phone: String::new(),
        total_sale: Decimal::from(qty * price),
    }
}

#[test]
fn classify_thresholds() {
    let t = Thresholds::default();
    assert_eq!(classify(0, &t), StockStatus::OutOfStock);
    assert_eq!(classify(-3, &t), StockStatus::OutOfStock);
    assert_eq!(classify(5, &t), StockStatus::LowStock);
    assert_eq!(classify(1, &t), StockStatus::LowStock);
    assert_eq!(classify(6, &t), StockStatus::InStock);
}

#[test]
fn classify_honors_custom_thresholds() {
    let t = Thresholds {
        out_of_stock_max: 0,
        low_stock_max: 10,
    };
    assert_eq!(classify(10, &t), StockStatus::LowStock);
    assert_eq!(classify(11, &t), StockStatus::InStock);
}

#[test]
fn stock_basic_reconciliation() {
    let purchases = vec![purchase("A", "Red", 10, 100, "2024-01-01")];
    let sales = vec![sale("A", "Red", 3, 150, "2024-01-02")];
    let entries = compute_stock(&purchases, &sales, &Thresholds::default());
    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.purchased_qty, 10);
    assert_eq!(e.sold_qty, 3);
    assert_eq!(e.current_qty, 7);
    assert_eq!(e.stock_value, Decimal::from(700));
    assert_eq!(e.status, StockStatus::InStock);
    assert!(!e.unmatched_sale);
    assert!(!e.is_oversold());
}

#[test]
fn stock_purchase_only_key() {
    let purchases = vec![purchase("A", "Red", 4, 100, "2024-01-01")];
    let entries = compute_stock(&purchases, &[], &Thresholds::default());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sold_qty, 0);
    assert_eq!(entries[0].current_qty, 4);
    assert_eq!(entries[0].status, StockStatus::LowStock);
    assert_eq!(entries[0].selling_price, Decimal::ZERO);
}

#[test]
fn stock_sale_only_key_is_flagged_not_dropped() {
    let sales = vec![sale("Ghost", "Blue", 2, 50, "2024-01-03")];
    let entries = compute_stock(&[], &sales, &Thresholds::default());
    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert!(e.unmatched_sale);
    assert_eq!(e.purchased_qty, 0);
    assert_eq!(e.current_qty, -2);
    assert!(e.is_oversold());
    assert_eq!(e.status, StockStatus::OutOfStock);
}

#[test]
fn oversell_is_preserved_not_clamped() {
    let purchases = vec![purchase("A", "Red", 2, 100, "2024-01-01")];
    let sales = vec![sale("A", "Red", 5, 150, "2024-01-02")];
    let entries = compute_stock(&purchases, &sales, &Thresholds::default());
    assert_eq!(entries[0].current_qty, -3);
    assert_eq!(entries[0].stock_value, Decimal::from(-300));
    assert_eq!(entries[0].status, StockStatus::OutOfStock);
}

#[test]
fn keys_are_trimmed_but_case_sensitive() {
    let purchases = vec![
        purchase("A ", "Red", 3, 100, "2024-01-01"),
        purchase(" A", " Red ", 2, 100, "2024-01-02"),
        purchase("a", "Red", 1, 100, "2024-01-03"),
    ];
    let entries = compute_stock(&purchases, &[], &Thresholds::default());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].model, "A");
    assert_eq!(entries[0].purchased_qty, 5);
    assert_eq!(entries[1].model, "a");
    assert_eq!(entries[1].purchased_qty, 1);
}

#[test]
fn most_recent_price_wins_with_source_order_tiebreak() {
    let purchases = vec![
        purchase("A", "Red", 1, 100, "2024-01-05"),
        purchase("A", "Red", 1, 90, "2024-01-02"),
        purchase("A", "Red", 1, 110, "2024-01-05"),
    ];
    let entries = compute_stock(&purchases, &[], &Thresholds::default());
    // Same latest date twice: the later source row wins deterministically.
    assert_eq!(entries[0].purchase_price, Decimal::from(110));
}

#[test]
fn totals_recompute_and_ignore_stored_totals() {
    let mut p = purchase("A", "Red", 10, 100, "2024-01-01");
    p.total_value = Decimal::from(999_999); // drifted stored total
    let sales = vec![sale("A", "Red", 3, 150, "2024-01-02")];
    let totals = compute_totals(std::slice::from_ref(&p), &sales);
    assert_eq!(totals.total_investment, Decimal::from(1000));
    assert_eq!(totals.total_sales_value, Decimal::from(450));
    assert_eq!(totals.net_profit, Decimal::from(-550));
    assert_eq!(totals.stock_left, 7);
}

#[test]
fn totals_law_matches_stock_sum() {
    let purchases = vec![
        purchase("A", "Red", 10, 100, "2024-01-01"),
        purchase("B", "Blue", 3, 200, "2024-01-02"),
        purchase("A", "Black", 6, 120, "2024-01-04"),
    ];
    let sales = vec![
        sale("A", "Red", 4, 150, "2024-01-05"),
        sale("C", "Green", 2, 80, "2024-01-06"),
    ];
    let totals = compute_totals(&purchases, &sales);
    let entries = compute_stock(&purchases, &sales, &Thresholds::default());
    let qty_sum: i64 = entries.iter().map(|e| e.current_qty).sum();
    assert_eq!(qty_sum, totals.stock_left);
    assert_eq!(
        totals.stock_left,
        totals.total_purchased_qty - totals.total_sold_qty
    );
}

#[test]
fn empty_ledger_degrades_to_zero() {
    let totals = compute_totals(&[], &[]);
    assert_eq!(totals.total_purchased_qty, 0);
    assert_eq!(totals.total_investment, Decimal::ZERO);
    assert_eq!(totals.net_profit, Decimal::ZERO);
    assert!(compute_stock(&[], &[], &Thresholds::default()).is_empty());
}

#[test]
fn compute_stock_is_idempotent() {
    let purchases = vec![
        purchase("A", "Red", 10, 100, "2024-01-01"),
        purchase("B", "Blue", 3, 200, "2024-01-02"),
    ];
    let sales = vec![sale("A", "Red", 4, 150, "2024-01-05")];
    let first = compute_stock(&purchases, &sales, &Thresholds::default());
    let second = compute_stock(&purchases, &sales, &Thresholds::default());
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.model, b.model);
        assert_eq!(a.color, b.color);
        assert_eq!(a.current_qty, b.current_qty);
        assert_eq!(a.stock_value, b.stock_value);
        assert_eq!(a.status, b.status);
    }
}
