//! Staff API

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Staff, StaffCreate, StaffUpdate};

use crate::db::repository::staff;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

/// GET /api/staff - list all staff
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = staff::find_all(&state.pool).await?;
    Ok(Json(staff))
}

/// GET /api/staff/:id - fetch one staff member
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Staff>> {
    let member = staff::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound).with_detail("staff_id", id))?;
    Ok(Json(member))
}

/// POST /api/staff - add a staff member
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    let member = staff::create(&state.pool, payload).await?;
    Ok(Json(member))
}

/// PUT /api/staff/:id - update a staff member
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<Staff>> {
    let member = staff::update(&state.pool, id, payload).await?;
    Ok(Json(member))
}

/// DELETE /api/staff/:id - remove a staff member
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = staff::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
