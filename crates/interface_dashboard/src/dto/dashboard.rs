//! Dashboard DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_analytics::AggregatedRow;

/// Query string of the summary and chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Raw filter value, `All` or a region label
    pub filter: String,
    pub known_region: bool,
    pub rows: Vec<AggregatedRow>,
    pub total_claim_amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub path: String,
    pub records: usize,
    pub skipped_rows: usize,
    pub regions: usize,
    pub policy_types: usize,
    pub total_claim_amount: Decimal,
    pub loaded_at: DateTime<Utc>,
}
