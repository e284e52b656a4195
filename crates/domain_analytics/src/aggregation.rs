//! Policy type aggregation
//!
//! Filters the claims by region, partitions them by policy type and sums the
//! claim amounts of each partition. Rows come out in the order each policy
//! type first appears in the filtered sequence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::filter::RegionFilter;
use crate::record::ClaimRecord;

/// Summed claim amount for one policy type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub policy_type: String,
    pub total_claim_amount: Decimal,
}

impl AggregatedRow {
    pub fn new(policy_type: impl Into<String>, total_claim_amount: Decimal) -> Self {
        Self {
            policy_type: policy_type.into(),
            total_claim_amount,
        }
    }
}

/// Aggregates claim amounts per policy type for the selected region
///
/// An empty dataset, or a region that matches nothing, yields an empty vector.
/// Sums saturate at `Decimal::MAX`; a slice taken from a `ClaimsTable` never
/// reaches it.
pub fn aggregate(dataset: &[ClaimRecord], filter: &RegionFilter) -> Vec<AggregatedRow> {
    let mut rows: Vec<AggregatedRow> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in dataset.iter().filter(|record| filter.matches(record)) {
        match positions.get(record.policy_type()) {
            Some(&index) => {
                let row = &mut rows[index];
                row.total_claim_amount = row.total_claim_amount.saturating_add(record.claim_amount());
            }
            None => {
                positions.insert(record.policy_type(), rows.len());
                rows.push(AggregatedRow::new(record.policy_type(), record.claim_amount()));
            }
        }
    }

    tracing::debug!(filter = %filter, groups = rows.len(), "Aggregated claims by policy type");
    rows
}
