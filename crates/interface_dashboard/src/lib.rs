//! HTTP Dashboard Layer
//!
//! This crate serves the claims dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: the page, dropdown options, summary and chart endpoints
//! - **Events**: the filter-change handler that aggregates and renders
//! - **Chart**: conversion of aggregated rows into a bar chart figure
//! - **Middleware**: request logging with per-request ids
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_dashboard::{create_router, AppState};
//!
//! let loaded = infra_csv::load_dataset(&config.dataset())?;
//! let app = create_router(AppState::new(loaded, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod chart;
pub mod events;

use std::sync::Arc;

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_analytics::ClaimsTable;
use infra_csv::LoadedDataset;

use crate::config::DashboardConfig;
use crate::handlers::{dashboard, health};
use crate::middleware::request_logging_middleware;

/// Facts about the loaded dataset reported by the readiness check
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    pub skipped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Application state shared across handlers
///
/// The table is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ClaimsTable>,
    pub dataset: DatasetInfo,
    pub config: DashboardConfig,
}

impl AppState {
    /// Wraps a freshly loaded dataset
    pub fn new(loaded: LoadedDataset, config: DashboardConfig) -> Self {
        Self {
            table: Arc::new(loaded.table),
            dataset: DatasetInfo {
                skipped_rows: loaded.skipped_rows,
                loaded_at: Utc::now(),
            },
            config,
        }
    }
}

/// Creates the dashboard router
///
/// # Arguments
///
/// * `state` - Loaded dataset and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let page_routes = Router::new()
        .route("/", get(dashboard::index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Data routes used by the page
    let api_routes = Router::new()
        .route("/regions", get(dashboard::list_regions))
        .route("/claims/summary", get(dashboard::claims_summary))
        .route("/claims/chart", get(dashboard::claims_chart));

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .fallback(dashboard::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET])
                        .allow_headers(Any),
                )
                .layer(axum_middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
