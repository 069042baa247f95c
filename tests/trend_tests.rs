// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stocktally::engine::stock::compute_totals;
use stocktally::engine::trend::build_trend;
use stocktally::models::{Purchase, Sale, TrendMetric};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn purchase(qty: i64, price: i64, on: &str) -> Purchase {
    Purchase {
        model: "A".into(),
        color: "Red".into(),
        quantity: qty,
        unit_price: Decimal::from(price),
        total_value: Decimal::from(qty * price),
        date: date(on),
        supplier: String::new(),
        payment: None,
    }
}

fn sale(qty: i64, price: i64, on: &str) -> Sale {
    Sale {
        date: date(on),
        model: "A".into(),
        color: "Red".into(),
        quantity_sold: qty,
        selling_price: Decimal::from(price),
        customer_name: String::new(),
        payment: None,
        customer_phone: String::new(),
        total_sale: Decimal::from(qty * price),
    }
}

#[test]
fn empty_input_yields_empty_series() {
    let points = build_trend(TrendMetric::Profit, &[], &[], None, None);
    assert!(points.is_empty());
}

#[test]
fn range_outside_activity_yields_empty_series() {
    let sales = vec![sale(1, 100, "2024-01-05")];
    let points = build_trend(
        TrendMetric::Profit,
        &[],
        &sales,
        Some(date("2024-02-01")),
        Some(date("2024-02-28")),
    );
    assert!(points.is_empty());
}

#[test]
fn profit_buckets_by_date_ascending() {
    let sales = vec![
        sale(2, 100, "2024-01-05"),
        sale(1, 50, "2024-01-03"),
        sale(3, 10, "2024-01-05"),
    ];
    let points = build_trend(TrendMetric::Profit, &[], &sales, None, None);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date("2024-01-03"));
    assert_eq!(points[0].value, Decimal::from(50));
    assert_eq!(points[1].date, date("2024-01-05"));
    assert_eq!(points[1].value, Decimal::from(230));
}

#[test]
fn intake_and_investment_read_purchases() {
    let purchases = vec![purchase(3, 100, "2024-01-01"), purchase(2, 50, "2024-01-02")];
    let intake = build_trend(TrendMetric::StockIntake, &purchases, &[], None, None);
    assert_eq!(intake.len(), 2);
    assert_eq!(intake[0].value, Decimal::from(3));
    assert_eq!(intake[1].value, Decimal::from(2));

    let investment = build_trend(TrendMetric::Investment, &purchases, &[], None, None);
    assert_eq!(investment[0].value, Decimal::from(300));
    assert_eq!(investment[1].value, Decimal::from(100));
}

#[test]
fn full_range_sums_to_unfiltered_totals() {
    let purchases = vec![
        purchase(3, 100, "2024-01-01"),
        purchase(2, 50, "2024-01-02"),
        purchase(5, 10, "2024-01-02"),
    ];
    let sales = vec![sale(2, 100, "2024-01-05"), sale(1, 50, "2024-01-07")];
    let totals = compute_totals(&purchases, &sales);

    let investment = build_trend(
        TrendMetric::Investment,
        &purchases,
        &sales,
        Some(date("2024-01-01")),
        Some(date("2024-12-31")),
    );
    let inv_sum: Decimal = investment.iter().map(|p| p.value).sum();
    assert_eq!(inv_sum, totals.total_investment);

    let profit = build_trend(TrendMetric::Profit, &purchases, &sales, None, None);
    let profit_sum: Decimal = profit.iter().map(|p| p.value).sum();
    assert_eq!(profit_sum, totals.total_sales_value);
}

#[test]
fn range_bounds_are_inclusive() {
    let sales = vec![
        sale(1, 10, "2024-01-01"),
        sale(1, 20, "2024-01-02"),
        sale(1, 30, "2024-01-03"),
    ];
    let points = build_trend(
        TrendMetric::Profit,
        &[],
        &sales,
        Some(date("2024-01-01")),
        Some(date("2024-01-02")),
    );
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].value, Decimal::from(20));
}
