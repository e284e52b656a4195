//! Claims analytics errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while constructing claim records
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Claim amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Total claim amount exceeds the representable maximum at record {index}")]
    TotalOverflow { index: usize },
}
