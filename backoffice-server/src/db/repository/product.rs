//! Products Repository
//!
//! CRUD over `products`. Unlike the other tables the key is chosen by
//! the caller, so creation must reject an id that is already taken.

use super::{RepoError, RepoResult, require_text, validate_amount};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

/// List the catalog in id order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT product_id, product_name, price, quantity FROM products ORDER BY product_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Find a product by id
pub async fn find_by_id(pool: &SqlitePool, product_id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT product_id, product_name, price, quantity FROM products WHERE product_id = ?",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

/// Add a product under a caller-chosen id
pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    require_text(&data.product_name, "product_name")?;
    validate_amount(data.price, "price")?;
    if data.quantity < 0 {
        return Err(RepoError::Validation(format!(
            "quantity must be non-negative, got {}",
            data.quantity
        )));
    }

    if find_by_id(pool, data.product_id).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Product {} already exists",
            data.product_id
        )));
    }

    sqlx::query("INSERT INTO products (product_id, product_name, price, quantity) VALUES (?, ?, ?, ?)")
        .bind(data.product_id)
        .bind(&data.product_name)
        .bind(data.price)
        .bind(data.quantity)
        .execute(pool)
        .await?;

    find_by_id(pool, data.product_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
}

/// Partially update a product; the id itself is immutable
pub async fn update(pool: &SqlitePool, product_id: i64, data: ProductUpdate) -> RepoResult<Product> {
    if let Some(price) = data.price {
        validate_amount(price, "price")?;
    }
    if let Some(quantity) = data.quantity {
        if quantity < 0 {
            return Err(RepoError::Validation(format!(
                "quantity must be non-negative, got {quantity}"
            )));
        }
    }

    let result = sqlx::query(
        "UPDATE products SET \
            product_name = COALESCE(?1, product_name), \
            price = COALESCE(?2, price), \
            quantity = COALESCE(?3, quantity) \
         WHERE product_id = ?4",
    )
    .bind(&data.product_name)
    .bind(data.price)
    .bind(data.quantity)
    .bind(product_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {product_id} not found")));
    }

    find_by_id(pool, product_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {product_id} not found")))
}

/// Remove a product; Ok(false) when the id did not exist
pub async fn delete(pool: &SqlitePool, product_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
