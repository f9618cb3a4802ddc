//! Launch Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard. It loads the launch
//! dataset once, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launch-dash-server
//!
//! LAUNCH_DATA_PATH=/path/to/spacex_launch_dash.csv PORT=9000 \
//!   cargo run --bin launch-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `LAUNCH_DASH_CONFIG`: TOML config file (default: `dashboard.toml` if present)
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `LAUNCH_DATA_PATH`: Dataset CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::DashboardConfig;
use launch_dash::dataset::DataContext;
use launch_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // Load the dataset once; a missing or malformed file is fatal
    let data = DataContext::load(&config.dataset.path).with_context(|| {
        format!(
            "Failed to load launch dataset from {}",
            config.dataset.path.display()
        )
    })?;
    info!(
        records = data.records().len(),
        sites = data.sites().len(),
        "Dataset loaded"
    );

    let state = AppState::new(Arc::new(data));
    let app = create_router(state);

    let addr = config.bind_address().await?;

    info!("Dashboard available at http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
