//! Sales API (daily_sales)

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Sale, SaleCreate, SaleUpdate};

use crate::db::repository::sale;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/sales", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

/// GET /api/sales - 获取所有销售记录
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    let sales = sale::find_all(&state.pool).await?;
    Ok(Json(sales))
}

/// GET /api/sales/:id - 获取单条销售记录
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Sale>> {
    let sale = sale::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SaleNotFound).with_detail("id", id))?;
    Ok(Json(sale))
}

/// POST /api/sales - 新增销售记录
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<Sale>> {
    let sale = sale::create(&state.pool, payload).await?;
    Ok(Json(sale))
}

/// PUT /api/sales/:id - 更新销售记录
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaleUpdate>,
) -> AppResult<Json<Sale>> {
    let sale = sale::update(&state.pool, id, payload).await?;
    Ok(Json(sale))
}

/// DELETE /api/sales/:id - 删除销售记录
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = sale::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
