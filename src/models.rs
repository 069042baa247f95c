// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
    BankTransfer,
}

impl PaymentMethod {
    /// Tolerant parse; unknown strings map to None rather than failing the row.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "cash" => Some(Self::Cash),
            "upi" => Some(Self::Upi),
            "card" => Some(Self::Card),
            "banktransfer" => Some(Self::BankTransfer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::Card => "Card",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

/// One stock-intake row from the purchases log.
///
/// `total_value` is whatever the store holds for the row; every aggregate
/// recomputes quantity * unit_price instead of trusting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub model: String,
    pub color: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_value: Decimal,
    pub date: NaiveDate,
    pub supplier: String,
    pub payment: Option<PaymentMethod>,
}

impl Purchase {
    pub fn line_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// One stock-outflow row from the sales log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub date: NaiveDate,
    pub model: String,
    pub color: String,
    pub quantity_sold: i64,
    pub selling_price: Decimal,
    pub customer_name: String,
    pub payment: Option<PaymentMethod>,
    pub customer_phone: String,
    pub total_sale: Decimal,
}

impl Sale {
    pub fn line_value(&self) -> Decimal {
        Decimal::from(self.quantity_sold) * self.selling_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

/// Derived per-(model, color) snapshot. Recomputed on every query, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct StockEntry {
    pub model: String,
    pub color: String,
    pub purchased_qty: i64,
    pub sold_qty: i64,
    pub current_qty: i64,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub stock_value: Decimal,
    pub status: StockStatus,
    /// Sales were recorded for a key with no purchase history.
    pub unmatched_sale: bool,
}

impl StockEntry {
    pub fn is_oversold(&self) -> bool {
        self.current_qty < 0
    }
}

/// Dashboard scalars, always over the full unfiltered ledger.
#[derive(Debug, Clone, Serialize)]
pub struct Totals {
    pub total_purchased_qty: i64,
    pub total_investment: Decimal,
    pub total_sold_qty: i64,
    pub total_sales_value: Decimal,
    pub net_profit: Decimal,
    pub stock_left: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendMetric {
    Profit,
    StockIntake,
    Investment,
}

impl TrendMetric {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "profit" => Some(Self::Profit),
            "intake" | "stock-intake" | "stockintake" => Some(Self::StockIntake),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}
