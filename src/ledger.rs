// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Purchase, Sale};
use crate::normalize::{normalize_purchase, normalize_sale, RowDiagnostic};
use crate::store::{LogKind, RecordStore};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Optional predicates over the ledger; an empty set or absent bound means no
/// restriction on that axis. Matching trims whitespace and preserves case.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    pub models: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl LedgerFilter {
    fn matches(&self, model: &str, color: &str, date: NaiveDate) -> bool {
        if !self.models.is_empty() && !self.models.contains(model.trim()) {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.contains(color.trim()) {
            return false;
        }
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Normalized session snapshot of both logs. Immutable per load cycle apart
/// from `append_*`, which mirror a row already written to the store.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    purchases: Vec<Purchase>,
    sales: Vec<Sale>,
}

impl Ledger {
    pub fn new(purchases: Vec<Purchase>, sales: Vec<Sale>) -> Self {
        Self { purchases, sales }
    }

    /// Read both logs and normalize row by row. Bad rows become diagnostics,
    /// never load failures; only a store-level fault aborts.
    pub fn load(store: &dyn RecordStore) -> Result<(Self, Vec<RowDiagnostic>)> {
        let mut ledger = Self::default();
        let mut diagnostics = Vec::new();

        for (row_no, raw) in store.read_all(LogKind::Purchases)?.iter().enumerate() {
            match normalize_purchase(raw) {
                Ok(p) => ledger.purchases.push(p),
                Err(error) => diagnostics.push(RowDiagnostic {
                    log: LogKind::Purchases,
                    row: row_no + 1,
                    error,
                }),
            }
        }
        for (row_no, raw) in store.read_all(LogKind::Sales)?.iter().enumerate() {
            match normalize_sale(raw) {
                Ok(s) => ledger.sales.push(s),
                Err(error) => diagnostics.push(RowDiagnostic {
                    log: LogKind::Sales,
                    row: row_no + 1,
                    error,
                }),
            }
        }
        Ok((ledger, diagnostics))
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn append_purchase(&mut self, p: Purchase) {
        self.purchases.push(p);
    }

    pub fn append_sale(&mut self, s: Sale) {
        self.sales.push(s);
    }

    pub fn filtered(&self, filter: &LedgerFilter) -> (Vec<&Purchase>, Vec<&Sale>) {
        let purchases = self
            .purchases
            .iter()
            .filter(|p| filter.matches(&p.model, &p.color, p.date))
            .collect();
        let sales = self
            .sales
            .iter()
            .filter(|s| filter.matches(&s.model, &s.color, s.date))
            .collect();
        (purchases, sales)
    }

    /// Sorted distinct model names seen in the purchases log.
    pub fn model_names(&self) -> Vec<String> {
        let set: BTreeSet<String> = self
            .purchases
            .iter()
            .map(|p| p.model.trim().to_string())
            .collect();
        set.into_iter().collect()
    }
}
