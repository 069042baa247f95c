// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Purchase, Sale, TrendMetric, TrendPoint};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|f| date >= f) && to.is_none_or(|t| date <= t)
}

/// Date-bucketed sum of one metric over an inclusive range, ascending by date.
/// Dates with no activity are not synthesized; an empty selection yields an
/// empty series.
pub fn build_trend(
    metric: TrendMetric,
    purchases: &[Purchase],
    sales: &[Sale],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    match metric {
        TrendMetric::Profit => {
            for s in sales.iter().filter(|s| in_range(s.date, from, to)) {
                *buckets.entry(s.date).or_insert(Decimal::ZERO) += s.line_value();
            }
        }
        TrendMetric::StockIntake => {
            for p in purchases.iter().filter(|p| in_range(p.date, from, to)) {
                *buckets.entry(p.date).or_insert(Decimal::ZERO) += Decimal::from(p.quantity);
            }
        }
        TrendMetric::Investment => {
            for p in purchases.iter().filter(|p| in_range(p.date, from, to)) {
                *buckets.entry(p.date).or_insert(Decimal::ZERO) += p.line_value();
            }
        }
    }

    buckets
        .into_iter()
        .map(|(date, value)| TrendPoint { date, value })
        .collect()
}
