//! Health check handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::dto::dashboard::DatasetResponse;
use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetResponse>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: None,
    })
}

/// Readiness check (includes dataset statistics)
///
/// The dataset is loaded before the server binds, so a running server is
/// always ready.
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = DatasetResponse {
        path: state.config.dataset_path.clone(),
        records: state.table.len(),
        skipped_rows: state.dataset.skipped_rows,
        regions: state.table.regions().len(),
        policy_types: state.table.policy_types().len(),
        total_claim_amount: state.table.total_claim_amount(),
        loaded_at: state.dataset.loaded_at,
    };

    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: Some(dataset),
    })
}
