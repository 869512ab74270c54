//! backoffice-server: retail back-office service
//!
//! Records daily sales, vendor payments, staff, products and monthly
//! profit/loss entries in SQLite, and serves an aggregated dashboard
//! over an HTTP JSON API.

mod api;
mod config;
mod dashboard;
mod db;
mod money;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env if present (dev convenience)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backoffice_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting backoffice-server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
