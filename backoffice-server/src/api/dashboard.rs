//! Dashboard API

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::DashboardSummary;

use crate::dashboard;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/dashboard - aggregated summary
///
/// Never returns an error status: a failing store yields the all-zero
/// summary with HTTP 200.
async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(dashboard::compute(&state.pool).await)
}
