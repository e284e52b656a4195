//! Dashboard handlers
//!
//! The chart and summary endpoints are the filter-change event handlers of
//! the page: the browser calls one of them every time the dropdown changes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::Html,
    Json,
};
use rust_decimal::Decimal;

use domain_analytics::FilterOption;

use crate::chart::ChartFigure;
use crate::dto::dashboard::*;
use crate::events::on_filter_change;
use crate::{error::ApiError, AppState};

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

/// Serves the dashboard page
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Lists dropdown options, `All Regions` first
pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<FilterOption>> {
    Json(state.table.region_options())
}

/// Aggregated rows for the selected region
pub async fn claims_summary(
    State(state): State<AppState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Query(query) = query?;
    let outcome = on_filter_change(&state.table, query.region.as_deref());
    let total_claim_amount = outcome
        .rows
        .iter()
        .fold(Decimal::ZERO, |total, row| total.saturating_add(row.total_claim_amount));

    Ok(Json(SummaryResponse {
        filter: outcome.filter.label().to_string(),
        known_region: outcome.known_region,
        rows: outcome.rows,
        total_claim_amount,
    }))
}

/// Bar chart figure for the selected region
pub async fn claims_chart(
    State(state): State<AppState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<ChartFigure>, ApiError> {
    let Query(query) = query?;
    let outcome = on_filter_change(&state.table, query.region.as_deref());
    Ok(Json(outcome.figure))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
