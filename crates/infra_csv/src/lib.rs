//! Dataset Infrastructure Layer
//!
//! This crate loads the claims dataset from CSV into a
//! [`domain_analytics::ClaimsTable`]. Loading happens once, before the
//! dashboard starts serving; any failure here is fatal.
//!
//! # Required Columns
//!
//! The header row must name `region`, `policy_type` and `claim_amount`.
//! Other columns are ignored.
//!
//! # Malformed Amounts
//!
//! An empty, non-numeric or negative `claim_amount` is handled according to
//! the configured [`AmountPolicy`]: `Reject` fails the whole load, `Skip`
//! drops the row and counts it. The same policy applies to a row whose amount
//! would push the dataset total past `Decimal::MAX`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_csv::{AmountPolicy, DatasetConfig, load_dataset};
//!
//! let config = DatasetConfig::new("datasets/claims_dashboard_data.csv")
//!     .amount_policy(AmountPolicy::Skip);
//! let loaded = load_dataset(&config)?;
//! println!("{} claims", loaded.table.len());
//! ```

pub mod error;
pub mod loader;

pub use error::DataLoadError;
pub use loader::{
    load_dataset, load_from_reader, AmountPolicy, DatasetConfig, LoadedDataset, REQUIRED_COLUMNS,
};
