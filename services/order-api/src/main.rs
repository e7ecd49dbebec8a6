use anyhow::Result;
use common::config::AppConfig;
use common::telemetry::{init_telemetry, TelemetryConfig};
use order_api::{routes, state::AppState};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let defaults = AppConfig::default();

    let telemetry_config = TelemetryConfig {
        service_name: "order-api".to_string(),
        log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| defaults.log_level.clone()),
    };

    init_telemetry(telemetry_config).map_err(|e| anyhow::anyhow!("telemetry init: {e}"))?;

    tracing::info!("Starting order API...");

    // Configuration from environment
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| defaults.database.url());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults.port);

    tracing::info!("Configuration:");
    tracing::info!("  Database URL: {}", database_url);
    tracing::info!("  Port: {}", port);

    // Initialize application state
    let state = AppState::new(&database_url).await?;

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Order API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}
