//! Vendor Payments API (vendor_details)

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{VendorPayment, VendorPaymentCreate, VendorPaymentUpdate};

use crate::db::repository::vendor;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/vendors", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

/// GET /api/vendors - list all vendor payments
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VendorPayment>>> {
    let payments = vendor::find_all(&state.pool).await?;
    Ok(Json(payments))
}

/// GET /api/vendors/:id - fetch one payment
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<VendorPayment>> {
    let payment = vendor::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorPaymentNotFound).with_detail("id", id))?;
    Ok(Json(payment))
}

/// POST /api/vendors - record a payment; the response carries the
/// server-assigned vendor_id and transaction_id
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<VendorPaymentCreate>,
) -> AppResult<Json<VendorPayment>> {
    let payment = vendor::create(&state.pool, payload).await?;
    Ok(Json(payment))
}

/// PUT /api/vendors/:id - update a payment
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<VendorPaymentUpdate>,
) -> AppResult<Json<VendorPayment>> {
    let payment = vendor::update(&state.pool, id, payload).await?;
    Ok(Json(payment))
}

/// DELETE /api/vendors/:id - delete a payment
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = vendor::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
