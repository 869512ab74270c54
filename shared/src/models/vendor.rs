//! Vendor Payment Model

use serde::{Deserialize, Serialize};

/// 供应商付款记录 (Vendor payment record)
///
/// One outgoing payment to a vendor. `vendor_id` and `transaction_id`
/// are assigned by the server at creation and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct VendorPayment {
    pub id: i64,
    /// Business date (YYYY-MM-DD)
    pub date: String,
    /// Vendor name; dashboard vendor count is distinct over this field
    pub name: String,
    /// What was purchased
    pub item: String,
    pub amount: f64,
    /// Server-assigned, "V" + snowflake
    pub vendor_id: String,
    pub mode_of_transaction: String,
    /// Server-assigned, "TXN" + snowflake
    pub transaction_id: String,
}

/// Create payload; identifiers are generated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorPaymentCreate {
    pub date: String,
    pub name: String,
    pub item: String,
    pub amount: f64,
    pub mode_of_transaction: String,
}

/// Update payload (partial); server-assigned identifiers are immutable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorPaymentUpdate {
    pub date: Option<String>,
    pub name: Option<String>,
    pub item: Option<String>,
    pub amount: Option<f64>,
    pub mode_of_transaction: Option<String>,
}
