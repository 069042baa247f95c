// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Anything that is not a digit, sign or decimal point. Covers currency
/// prefixes and thousands separators as delivered by the spreadsheet.
static MONEY_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
}

pub fn parse_quantity(s: &str) -> Result<i64> {
    let qty: i64 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity '{}'", s.trim()))?;
    if qty < 0 {
        anyhow::bail!("Invalid quantity '{}': must be non-negative", qty);
    }
    Ok(qty)
}

/// Strip currency decoration ("₹1,200.50") and parse as a non-negative amount.
pub fn clean_money(s: &str) -> Option<Decimal> {
    let cleaned = MONEY_NOISE.replace_all(s.trim(), "");
    let d: Decimal = cleaned.parse().ok()?;
    (d >= Decimal::ZERO).then_some(d)
}

pub fn parse_money(s: &str) -> Result<Decimal> {
    clean_money(s).with_context(|| format!("Invalid amount '{}'", s.trim()))
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Case-insensitive substring suggestions, active once three characters are
/// typed. Mirrors the entry-form helper from the original dashboard.
pub fn suggest<'a>(typed: &str, names: &'a [String]) -> Vec<&'a str> {
    let typed = typed.trim();
    if typed.chars().count() < 3 {
        return Vec::new();
    }
    let needle = typed.to_lowercase();
    names
        .iter()
        .filter(|n| n.to_lowercase().contains(&needle))
        .map(|n| n.as_str())
        .collect()
}
