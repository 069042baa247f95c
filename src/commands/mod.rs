// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod doctor;
pub mod models;
pub mod purchases;
pub mod sales;
pub mod stock;
pub mod summary;
pub mod trend;

use crate::ledger::Ledger;
use crate::store::RecordStore;
use anyhow::Result;

/// Load both logs, reporting skipped rows on stderr. Bad rows never abort a
/// command.
pub fn load_ledger(store: &dyn RecordStore) -> Result<Ledger> {
    let (ledger, diagnostics) = Ledger::load(store)?;
    for d in &diagnostics {
        eprintln!("skipped {}", d);
    }
    Ok(ledger)
}
