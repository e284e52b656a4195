//! Claims Dashboard - Server Binary
//!
//! Loads the claims dataset once and serves the dashboard over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-dashboard
//!
//! # Run with environment variables
//! DASHBOARD_PORT=9000 DASHBOARD_AMOUNT_POLICY=skip cargo run --bin claims-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_HOST` - Server host (default: 127.0.0.1)
//! * `DASHBOARD_PORT` - Server port (default: 8050)
//! * `DASHBOARD_DATASET_PATH` - Claims CSV (default: datasets/claims_dashboard_data.csv)
//! * `DASHBOARD_AMOUNT_POLICY` - `reject` or `skip` malformed claim amounts (default: reject)
//! * `DASHBOARD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use interface_dashboard::{config::DashboardConfig, create_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the dashboard server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The dataset cannot be loaded
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = DashboardConfig::from_env().context("loading dashboard configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        dataset = %config.dataset_path,
        "Starting Claims Dashboard"
    );

    // The dashboard cannot render without its data, so a load failure ends the process
    let dataset_config = config.dataset();
    let loaded = tokio::task::spawn_blocking(move || infra_csv::load_dataset(&dataset_config))
        .await
        .context("dataset loader panicked")?
        .with_context(|| format!("loading claims dataset from {}", config.dataset_path))?;

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("parsing server address {}", config.server_addr()))?;

    let app = create_router(AppState::new(loaded, config));

    tracing::info!(%addr, "Dashboard listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
