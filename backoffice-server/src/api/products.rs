//! Products API

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::db::repository::product;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
}

/// GET /api/products - list the catalog
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = product::find_all(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/:id - fetch one product
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Product>> {
    let product = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("product_id", id))?;
    Ok(Json(product))
}

/// POST /api/products - add a product; a taken id is a 409
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = product::create(&state.pool, payload).await?;
    Ok(Json(product))
}

/// PUT /api/products/:id - update a product
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = product::update(&state.pool, id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - remove a product
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = product::delete(&state.pool, id).await?;
    Ok(Json(deleted))
}
