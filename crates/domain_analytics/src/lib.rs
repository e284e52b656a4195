//! Claims Analytics Domain
//!
//! This crate holds the in-memory claims table and the aggregation that
//! feeds the dashboard bar chart.
//!
//! # Pipeline
//!
//! ```text
//! ClaimsTable -> RegionFilter -> partition by policy type -> sum claim amounts
//! ```
//!
//! The aggregation is a pure function of the table and the filter. The table
//! is built once and never mutated, so it can be shared freely between
//! request handlers.
//!
//! # Example
//!
//! ```rust
//! use domain_analytics::{ClaimRecord, ClaimsTable, RegionFilter};
//! use rust_decimal_macros::dec;
//!
//! let table = ClaimsTable::new(vec![
//!     ClaimRecord::new("North", "Auto", dec!(100)).unwrap(),
//!     ClaimRecord::new("South", "Home", dec!(200)).unwrap(),
//! ]).unwrap();
//!
//! let rows = table.aggregate(&RegionFilter::region("North"));
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].total_claim_amount, dec!(100));
//! ```

pub mod record;
pub mod filter;
pub mod aggregation;
pub mod table;
pub mod error;

pub use record::ClaimRecord;
pub use filter::{RegionFilter, FilterOption, ALL_REGIONS_LABEL, ALL_SENTINEL};
pub use aggregation::{aggregate, AggregatedRow};
pub use table::ClaimsTable;
pub use error::RecordError;
