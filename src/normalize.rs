// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{PaymentMethod, Purchase, Sale};
use crate::store::{LogKind, RawRow};
use crate::utils::clean_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Closed set of row-level failures. All are non-fatal: the offending row is
/// skipped and the rest of the batch still loads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("invalid quantity '{value}' in field '{field}'")]
    InvalidQuantity { field: String, value: String },
    #[error("invalid price '{value}' in field '{field}'")]
    InvalidPrice { field: String, value: String },
    #[error("invalid date '{value}' in field '{field}', expected YYYY-MM-DD")]
    InvalidDate { field: String, value: String },
}

/// A skipped row, attributable back to its source log and 1-based data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub log: LogKind,
    pub row: usize,
    pub error: RowError,
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} row {}: {}", self.log.as_str(), self.row, self.error)
    }
}

/// Required field: present and non-blank. The store reports blank cells for
/// short rows, so blank and absent are the same condition here.
fn required<'a>(row: &'a RawRow, name: &str) -> Result<&'a str, RowError> {
    match row.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RowError::MissingField(name.to_string())),
    }
}

fn optional(row: &RawRow, name: &str) -> String {
    row.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn quantity_field(row: &RawRow, name: &str) -> Result<i64, RowError> {
    let raw = required(row, name)?;
    let err = || RowError::InvalidQuantity {
        field: name.to_string(),
        value: raw.to_string(),
    };
    let qty: i64 = raw.parse().map_err(|_| err())?;
    if qty < 0 {
        return Err(err());
    }
    Ok(qty)
}

fn price_field(row: &RawRow, name: &str) -> Result<Decimal, RowError> {
    let raw = required(row, name)?;
    clean_money(raw).ok_or_else(|| RowError::InvalidPrice {
        field: name.to_string(),
        value: raw.to_string(),
    })
}

fn date_field(row: &RawRow, name: &str) -> Result<NaiveDate, RowError> {
    let raw = required(row, name)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| RowError::InvalidDate {
        field: name.to_string(),
        value: raw.to_string(),
    })
}

/// Stored row totals are carried when parseable but never required: a missing
/// or mangled total falls back to the recomputed line value.
fn stored_total(row: &RawRow, name: &str, fallback: Decimal) -> Decimal {
    row.get(name)
        .and_then(|v| clean_money(v))
        .unwrap_or(fallback)
}

pub fn normalize_purchase(row: &RawRow) -> Result<Purchase, RowError> {
    let model = required(row, "Model")?.to_string();
    let color = required(row, "Color")?.to_string();
    let quantity = quantity_field(row, "Quantity")?;
    let unit_price = price_field(row, "Purchase Price")?;
    let date = date_field(row, "Date")?;
    let line = Decimal::from(quantity) * unit_price;
    Ok(Purchase {
        model,
        color,
        quantity,
        unit_price,
        total_value: stored_total(row, "Total Value", line),
        date,
        supplier: optional(row, "Supplier"),
        payment: PaymentMethod::parse(&optional(row, "Payment Method")),
    })
}

pub fn normalize_sale(row: &RawRow) -> Result<Sale, RowError> {
    let date = date_field(row, "Date")?;
    let model = required(row, "Model")?.to_string();
    let color = required(row, "Color")?.to_string();
    let quantity_sold = quantity_field(row, "Quantity Sold")?;
    let selling_price = price_field(row, "Selling Price")?;
    let line = Decimal::from(quantity_sold) * selling_price;
    Ok(Sale {
        date,
        model,
        color,
        quantity_sold,
        selling_price,
        customer_name: optional(row, "Customer Name"),
        payment: PaymentMethod::parse(&optional(row, "Payment Method")),
        customer_phone: optional(row, "Customer Phone"),
        total_sale: stored_total(row, "Total Sale", line),
    })
}
