//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims data. Labels are drawn
//! from small pools so that filters and partitions regularly collide.

use domain_analytics::{ClaimRecord, RegionFilter};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for region labels
pub fn region_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("North".to_string()),
        Just("South".to_string()),
        Just("East".to_string()),
        Just("West".to_string()),
    ]
}

/// Strategy for policy type labels
pub fn policy_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Auto".to_string()),
        Just("Home".to_string()),
        Just("Life".to_string()),
        Just("Health".to_string()),
        Just("Travel".to_string()),
    ]
}

/// Strategy for non-negative amounts with two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a single valid claim record
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (region_strategy(), policy_type_strategy(), claim_amount_strategy()).prop_map(
        |(region, policy_type, amount)| {
            ClaimRecord::new(region, policy_type, amount).expect("generated amount is non-negative")
        },
    )
}

/// Strategy for a dataset of up to `max_len` records
pub fn dataset_strategy(max_len: usize) -> impl Strategy<Value = Vec<ClaimRecord>> {
    prop::collection::vec(claim_record_strategy(), 0..max_len)
}

/// Strategy for filters, including a region that never appears
pub fn region_filter_strategy() -> impl Strategy<Value = RegionFilter> {
    prop_oneof![
        Just(RegionFilter::All),
        region_strategy().prop_map(RegionFilter::Region),
        Just(RegionFilter::region("Atlantis")),
    ]
}
