//! HTTP API
//!
//! One module per resource, each contributing a router nested under
//! its `/api/...` prefix.

pub mod dashboard;
pub mod health;
pub mod monthly;
pub mod products;
pub mod sales;
pub mod staff;
pub mod vendors;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with shared middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(dashboard::router())
        .merge(sales::router())
        .merge(vendors::router())
        .merge(staff::router())
        .merge(products::router())
        .merge(monthly::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
