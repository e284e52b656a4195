//! CSV dataset loader
//!
//! Reads the claims CSV once and produces an immutable claims table. Column
//! lookup is by header name, so column order and extra columns do not
//! matter.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::{info, warn};

use domain_analytics::{ClaimRecord, ClaimsTable};

use crate::error::DataLoadError;

/// Columns the header row must contain
pub const REQUIRED_COLUMNS: [&str; 3] = ["region", "policy_type", "claim_amount"];

/// What to do with a row whose claim amount cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Fail the whole load
    #[default]
    Reject,
    /// Drop the row, log it and keep going
    Skip,
}

/// Where and how to load the dataset
///
/// # Example
///
/// ```rust
/// use infra_csv::{AmountPolicy, DatasetConfig};
///
/// let config = DatasetConfig::new("datasets/claims_dashboard_data.csv")
///     .amount_policy(AmountPolicy::Skip);
/// assert_eq!(config.amount_policy, AmountPolicy::Skip);
/// ```
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Path of the CSV file
    pub path: PathBuf,
    /// Handling of malformed claim amounts
    pub amount_policy: AmountPolicy,
}

impl DatasetConfig {
    /// Creates a configuration for the given file, rejecting malformed amounts
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            amount_policy: AmountPolicy::default(),
        }
    }

    /// Sets the malformed amount policy
    pub fn amount_policy(mut self, policy: AmountPolicy) -> Self {
        self.amount_policy = policy;
        self
    }
}

/// The outcome of a successful load
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub table: ClaimsTable,
    /// Rows dropped under `AmountPolicy::Skip`
    pub skipped_rows: usize,
}

#[derive(Debug, Deserialize)]
struct RawClaimRow {
    region: String,
    policy_type: String,
    claim_amount: String,
}

/// Loads the dataset described by `config`
///
/// # Errors
///
/// Returns `DataLoadError` if the file cannot be opened, is not valid CSV,
/// lacks a required column, or, under `AmountPolicy::Reject`, holds a
/// malformed amount or an amount that overflows the dataset total.
pub fn load_dataset(config: &DatasetConfig) -> Result<LoadedDataset, DataLoadError> {
    let started = Instant::now();
    info!(path = %config.path.display(), policy = ?config.amount_policy, "Loading claims dataset");

    let file = open(&config.path)?;
    let loaded = load_from_reader(file, config.amount_policy)?;

    info!(
        path = %config.path.display(),
        records = loaded.table.len(),
        skipped = loaded.skipped_rows,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Claims dataset loaded"
    );
    Ok(loaded)
}

/// Loads a dataset from any CSV byte source
pub fn load_from_reader<R: Read>(
    source: R,
    policy: AmountPolicy,
) -> Result<LoadedDataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    let mut total = Decimal::ZERO;

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|position| position.line()).unwrap_or_default();
        let raw: RawClaimRow = row.deserialize(Some(&headers))?;

        let rejection = match parse_record(raw) {
            Ok(record) => match total.checked_add(record.claim_amount()) {
                Some(next) => {
                    total = next;
                    records.push(record);
                    continue;
                }
                None => DataLoadError::AmountOverflow {
                    line,
                    value: record.claim_amount().to_string(),
                },
            },
            Err(value) => DataLoadError::MalformedAmount { line, value },
        };

        match policy {
            AmountPolicy::Reject => return Err(rejection),
            AmountPolicy::Skip => {
                warn!(line, reason = %rejection, "Skipping claim");
                skipped_rows += 1;
            }
        }
    }

    Ok(LoadedDataset {
        table: ClaimsTable::new(records)?,
        skipped_rows,
    })
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds a record, handing back the raw amount when it is unusable
fn parse_record(raw: RawClaimRow) -> Result<ClaimRecord, String> {
    let amount = parse_amount(&raw.claim_amount).ok_or_else(|| raw.claim_amount.clone())?;
    ClaimRecord::new(raw.region, raw.policy_type, amount).map_err(|_| raw.claim_amount)
}

fn parse_amount(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("100"), Some(dec!(100)));
        assert_eq!(parse_amount("1250.75"), Some(dec!(1250.75)));
        assert_eq!(parse_amount("1.5e3"), Some(dec!(1500)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
    }
}
