//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product, keyed by a caller-chosen numeric ID
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Create payload; `product_id` must not already exist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Update payload (partial); the key itself cannot change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
