// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Stocktally", "stocktally"));

/// One row as read back from a log: trimmed column name -> cell text.
/// Readers match by name only; column position is not part of the contract.
pub type RawRow = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Purchases,
    Sales,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchases => "Purchases_Log",
            Self::Sales => "Sales_Log",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            Self::Purchases => "purchases_log.csv",
            Self::Sales => "sales_log.csv",
        }
    }

    /// Column order used on append. Reads are name-based, so this only has to
    /// stay consistent with itself within one log file.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Purchases => &[
                "Model",
                "Color",
                "Quantity",
                "Purchase Price",
                "Total Value",
                "Date",
                "Supplier",
                "Payment Method",
            ],
            Self::Sales => &[
                "Date",
                "Model",
                "Color",
                "Quantity Sold",
                "Selling Price",
                "Customer Name",
                "Payment Method",
                "Customer Phone",
                "Total Sale",
            ],
        }
    }
}

/// Append-only two-log record store. Reads return a full snapshot; appends are
/// single rows with no read-after-write guarantee, and other writers may add
/// rows between reads.
pub trait RecordStore {
    fn read_all(&self, log: LogKind) -> Result<Vec<RawRow>>;
    fn append(&self, log: LogKind, values: &[String]) -> Result<()>;
}

pub fn default_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

/// One CSV file per log under a data directory.
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(default_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn log_path(&self, log: LogKind) -> PathBuf {
        self.dir.join(log.file_name())
    }

    /// Create any missing log files with their header row.
    pub fn init_logs(&self) -> Result<()> {
        for log in [LogKind::Purchases, LogKind::Sales] {
            let path = self.log_path(log);
            if !path.exists() {
                let mut wtr = csv::Writer::from_path(&path)
                    .with_context(|| format!("Create log {}", path.display()))?;
                wtr.write_record(log.headers())?;
                wtr.flush()?;
            }
        }
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn read_all(&self, log: LogKind) -> Result<Vec<RawRow>> {
        let path = self.log_path(log);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Open log {}", path.display()))?;
        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("Read header of {}", path.display()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.with_context(|| format!("Read row in {}", path.display()))?;
            let mut row = RawRow::new();
            for (i, name) in headers.iter().enumerate() {
                if let Some(v) = rec.get(i) {
                    row.insert(name.clone(), v.to_string());
                }
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn append(&self, log: LogKind, values: &[String]) -> Result<()> {
        let path = self.log_path(log);
        let new_file = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Open log {} for append", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if new_file {
            wtr.write_record(log.headers())?;
        }
        wtr.write_record(values)?;
        wtr.flush()?;
        Ok(())
    }
}
