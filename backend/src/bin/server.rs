//! Launch dashboard HTTP server binary.
//!
//! Loads the launch dataset, builds the layout and serves the dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launch-dash-server
//! ```
//!
//! Settings come from an optional `dashboard.toml` (see
//! [`launch_dash::config`]). `RUST_LOG` overrides the log level.

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::DashboardConfig;
use launch_dash::http::{create_router, AppState};
use launch_dash::models::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_default_location()?;

    // Initialize logging
    let default_level = if config.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_level),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch records dashboard");
    info!("Configuration: {:?}", config);

    // The dashboard cannot render without data
    let dataset = Dataset::load(&config.data.path)?;
    info!(
        "Dataset ready: {} records across {} sites",
        dataset.len(),
        dataset.sites().len()
    );

    let state = AppState::new(dataset, config.server.debug);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Dashboard running on http://{}", addr);
    if config.server.debug {
        info!("Debug mode: serving page from disk when available");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
