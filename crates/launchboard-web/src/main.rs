//! Launchboard Web Server
//!
//! Run with: cargo run -p launchboard-web

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchboard_dashboard::DashboardController;
use launchboard_store::LaunchRecordStore;
use launchboard_web::config::Config;
use launchboard_web::router::build_router;
use launchboard_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Launchboard...");

    let config = Config::load().context("Failed to load configuration")?;

    // Load the launch record store once, before any event is accepted
    let store = LaunchRecordStore::from_csv_path(&config.data.csv_path)
        .with_context(|| format!("Failed to load launch data from {}", config.data.csv_path))?;
    let controller = DashboardController::new(Arc::new(store));

    let app = build_router(AppState::new(controller));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
