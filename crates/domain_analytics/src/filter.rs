//! Region filter
//!
//! The dashboard dropdown sends either the `All` sentinel or a region label.
//! Region labels are matched exactly and case-sensitively; a label that is
//! not present in the dataset simply matches nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::ClaimRecord;

/// Dropdown value selecting every region
pub const ALL_SENTINEL: &str = "All";

/// Dropdown label shown for the `All` sentinel
pub const ALL_REGIONS_LABEL: &str = "All Regions";

/// Restricts the dataset before aggregation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    /// Every record
    #[default]
    All,
    /// Records whose region equals this label exactly
    Region(String),
}

impl RegionFilter {
    /// Creates a filter for one region label
    pub fn region(label: impl Into<String>) -> Self {
        RegionFilter::Region(label.into())
    }

    /// Parses a dropdown value; the literal `All` always selects every region
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SENTINEL {
            RegionFilter::All
        } else {
            RegionFilter::Region(value.to_string())
        }
    }

    /// The raw dropdown value, also used in the chart title
    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => ALL_SENTINEL,
            RegionFilter::Region(region) => region,
        }
    }

    /// Whether a record belongs to the working subset
    pub fn matches(&self, record: &ClaimRecord) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(region) => record.region() == region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for RegionFilter {
    fn from(value: &str) -> Self {
        RegionFilter::from_value(value)
    }
}

/// One entry of the region dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    /// The leading `All Regions` option
    pub fn all_regions() -> Self {
        Self {
            label: ALL_REGIONS_LABEL.to_string(),
            value: ALL_SENTINEL.to_string(),
        }
    }

    /// An option whose label and value are both the region
    pub fn for_region(region: &str) -> Self {
        Self {
            label: region.to_string(),
            value: region.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_all_sentinel_parses_to_all() {
        assert_eq!(RegionFilter::from_value("All"), RegionFilter::All);
        assert_eq!(RegionFilter::All.label(), "All");
    }

    #[test]
    fn test_region_match_is_case_sensitive() {
        let record = ClaimRecord::new("North", "Auto", dec!(10)).unwrap();

        assert!(RegionFilter::region("North").matches(&record));
        assert!(!RegionFilter::region("north").matches(&record));
        assert!(!RegionFilter::region("Nor").matches(&record));
        assert!(RegionFilter::All.matches(&record));
    }

    #[test]
    fn test_lowercase_all_is_a_region() {
        assert_eq!(RegionFilter::from_value("all"), RegionFilter::region("all"));
    }
}
