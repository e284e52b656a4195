//! Custom Test Assertions
//!
//! Assertion helpers for aggregation output that give more meaningful
//! failure messages than comparing vectors directly.

use domain_analytics::{AggregatedRow, ClaimRecord, RegionFilter};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Asserts that rows match `(policy_type, total)` pairs in order
pub fn assert_rows(actual: &[AggregatedRow], expected: &[(&str, Decimal)]) {
    let actual_pairs: Vec<(&str, Decimal)> = actual
        .iter()
        .map(|row| (row.policy_type.as_str(), row.total_claim_amount))
        .collect();

    assert_eq!(
        actual_pairs, expected,
        "Aggregated rows differ: actual={:?}, expected={:?}",
        actual_pairs, expected
    );
}

/// Asserts that the rows sum to the total of the records the filter selects
pub fn assert_rows_conserve_total(
    rows: &[AggregatedRow],
    dataset: &[ClaimRecord],
    filter: &RegionFilter,
) {
    let rows_total: Decimal = rows.iter().map(|row| row.total_claim_amount).sum();
    let expected: Decimal = dataset
        .iter()
        .filter(|record| filter.matches(record))
        .map(ClaimRecord::claim_amount)
        .sum();

    assert_eq!(
        rows_total, expected,
        "Row totals do not add up for filter {}: rows={}, records={}",
        filter, rows_total, expected
    );
}

/// Asserts that no policy type appears twice
pub fn assert_policy_types_unique(rows: &[AggregatedRow]) {
    let mut seen = HashSet::new();
    for row in rows {
        assert!(
            seen.insert(row.policy_type.as_str()),
            "Policy type {} appears more than once",
            row.policy_type
        );
    }
}
