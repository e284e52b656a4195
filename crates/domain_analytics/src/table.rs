//! Immutable claims table
//!
//! Owns the records loaded at start-up. Nothing mutates the table after
//! construction, so a single instance is shared behind an `Arc` by every
//! dashboard request.
//!
//! Amounts are non-negative, so every partial sum is bounded by the grand
//! total. Checking the grand total once at construction keeps every later
//! aggregation within `Decimal` range.

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::aggregation::{aggregate, AggregatedRow};
use crate::error::RecordError;
use crate::filter::{FilterOption, RegionFilter};
use crate::record::ClaimRecord;

/// The in-memory claims dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimsTable {
    records: Vec<ClaimRecord>,
}

impl ClaimsTable {
    /// Creates a table from records in source order
    ///
    /// # Errors
    ///
    /// Returns `RecordError::TotalOverflow` if the amounts cannot be summed
    pub fn new(records: Vec<ClaimRecord>) -> Result<Self, RecordError> {
        let mut total = Decimal::ZERO;
        for (index, record) in records.iter().enumerate() {
            total = total
                .checked_add(record.claim_amount())
                .ok_or(RecordError::TotalOverflow { index })?;
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in first-seen order
    pub fn regions(&self) -> Vec<&str> {
        distinct(self.records.iter().map(ClaimRecord::region))
    }

    /// Distinct policy types in first-seen order
    pub fn policy_types(&self) -> Vec<&str> {
        distinct(self.records.iter().map(ClaimRecord::policy_type))
    }

    /// Dropdown options: `All Regions` first, then each region
    pub fn region_options(&self) -> Vec<FilterOption> {
        std::iter::once(FilterOption::all_regions())
            .chain(self.regions().into_iter().map(FilterOption::for_region))
            .collect()
    }

    /// Whether a filter names a region present in the table
    pub fn is_known(&self, filter: &RegionFilter) -> bool {
        match filter {
            RegionFilter::All => true,
            RegionFilter::Region(region) => self.records.iter().any(|r| r.region() == region),
        }
    }

    /// Total claim amount per policy type for the filter
    pub fn aggregate(&self, filter: &RegionFilter) -> Vec<AggregatedRow> {
        aggregate(&self.records, filter)
    }

    /// Sum of every claim amount in the table
    pub fn total_claim_amount(&self) -> Decimal {
        self.records
            .iter()
            .fold(Decimal::ZERO, |total, record| total.saturating_add(record.claim_amount()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
