//! Vendor Payments Repository
//!
//! CRUD over `vendor_details`. `vendor_id` and `transaction_id` are
//! assigned here at creation (snowflake-derived, unique per row) and
//! are immutable afterwards.

use super::{RepoError, RepoResult, require_text, validate_amount, validate_date};
use shared::models::{VendorPayment, VendorPaymentCreate, VendorPaymentUpdate};
use sqlx::SqlitePool;

/// List all vendor payments, most recent date first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<VendorPayment>> {
    let payments = sqlx::query_as::<_, VendorPayment>(
        "SELECT id, date, name, item, amount, vendor_id, mode_of_transaction, transaction_id \
         FROM vendor_details ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

/// Find a vendor payment by row id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<VendorPayment>> {
    let payment = sqlx::query_as::<_, VendorPayment>(
        "SELECT id, date, name, item, amount, vendor_id, mode_of_transaction, transaction_id \
         FROM vendor_details WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(payment)
}

/// Record a vendor payment, assigning its identifiers
pub async fn create(pool: &SqlitePool, data: VendorPaymentCreate) -> RepoResult<VendorPayment> {
    validate_date(&data.date)?;
    validate_amount(data.amount, "amount")?;
    require_text(&data.name, "name")?;
    require_text(&data.item, "item")?;
    require_text(&data.mode_of_transaction, "mode_of_transaction")?;

    // Server-assigned identifiers
    let vendor_id = format!("V{}", shared::util::snowflake_id());
    let transaction_id = format!("TXN{}", shared::util::snowflake_id());

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO vendor_details (date, name, item, amount, vendor_id, mode_of_transaction, transaction_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.date)
    .bind(&data.name)
    .bind(&data.item)
    .bind(data.amount)
    .bind(&vendor_id)
    .bind(&data.mode_of_transaction)
    .bind(&transaction_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create vendor payment".to_string()))
}

/// Partially update a vendor payment; identifiers stay as assigned
pub async fn update(pool: &SqlitePool, id: i64, data: VendorPaymentUpdate) -> RepoResult<VendorPayment> {
    if let Some(ref date) = data.date {
        validate_date(date)?;
    }
    if let Some(amount) = data.amount {
        validate_amount(amount, "amount")?;
    }

    let result = sqlx::query(
        "UPDATE vendor_details SET \
            date = COALESCE(?1, date), \
            name = COALESCE(?2, name), \
            item = COALESCE(?3, item), \
            amount = COALESCE(?4, amount), \
            mode_of_transaction = COALESCE(?5, mode_of_transaction) \
         WHERE id = ?6",
    )
    .bind(&data.date)
    .bind(&data.name)
    .bind(&data.item)
    .bind(data.amount)
    .bind(&data.mode_of_transaction)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Vendor payment {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Vendor payment {id} not found")))
}

/// Delete a vendor payment; Ok(false) when the id did not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM vendor_details WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
