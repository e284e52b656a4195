//! Dataset loading errors
//!
//! Every variant is fatal at start-up: the dashboard cannot render without
//! its dataset.

use domain_analytics::RecordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the claims dataset
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The dataset file could not be opened
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV or could not be read
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// A claim amount is empty, non-numeric or negative
    #[error("Malformed claim amount '{value}' on line {line}")]
    MalformedAmount { line: u64, value: String },

    /// Adding this claim would push the dataset total past `Decimal::MAX`
    #[error("Claim amount '{value}' on line {line} overflows the dataset total")]
    AmountOverflow { line: u64, value: String },

    /// The loaded records do not form a valid claims table
    #[error("Invalid claims table: {0}")]
    InvalidTable(#[from] RecordError),
}

impl DataLoadError {
    /// Checks if this error stems from the file itself rather than its content
    pub fn is_io_error(&self) -> bool {
        match self {
            DataLoadError::Open { .. } => true,
            DataLoadError::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }
}
