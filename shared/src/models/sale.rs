//! Sale Model

use serde::{Deserialize, Serialize};

/// 每日销售记录 (Daily sale record)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    /// Business date (YYYY-MM-DD)
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    /// Amount in currency units; stored as f64, summed via Decimal
    pub amount: f64,
    /// e.g. "Cash", "Online"
    pub mode_of_transaction: String,
    pub transaction_id: String,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub amount: f64,
    pub mode_of_transaction: String,
    pub transaction_id: String,
}

/// Update payload (partial; missing fields keep their stored value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleUpdate {
    pub date: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub amount: Option<f64>,
    pub mode_of_transaction: Option<String>,
    pub transaction_id: Option<String>,
}
