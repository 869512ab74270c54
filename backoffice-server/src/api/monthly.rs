//! Monthly Tracker API

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MonthlyEntry, MonthlyEntryCreate, MonthlyEntryUpdate, MonthlySummary};

use crate::db::repository::monthly;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/monthly", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/summary", get(summary))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

/// GET /api/monthly - list all entries
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MonthlyEntry>>> {
    let entries = monthly::find_all(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/monthly/summary - entry count and cumulative net profit
async fn summary(State(state): State<AppState>) -> AppResult<Json<MonthlySummary>> {
    let summary = monthly::profit_summary(&state.pool).await?;
    Ok(Json(summary))
}

/// GET /api/monthly/:id - fetch one entry
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MonthlyEntry>> {
    let entry = monthly::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MonthlyEntryNotFound).with_detail("id", id))?;
    Ok(Json(entry))
}

/// POST /api/monthly - record a month's figures
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MonthlyEntryCreate>,
) -> AppResult<Json<MonthlyEntry>> {
    let entry = monthly::create(&state.pool, payload).await?;
    Ok(Json(entry))
}

/// PUT /api/monthly/:id - update an entry
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MonthlyEntryUpdate>,
) -> AppResult<Json<MonthlyEntry>> {
    let entry = monthly::update(&state.pool, id, payload).await?;
    Ok(Json(entry))
}

/// DELETE /api/monthly/:id - delete an entry
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = monthly::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
