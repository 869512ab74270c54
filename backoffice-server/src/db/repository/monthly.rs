//! Monthly Tracker Repository
//!
//! CRUD over `monthly_tracker` plus the cross-month profit rollup.
//! `net_profit` may legitimately be negative, so it only has to be
//! finite; the gross figures must be non-negative.

use super::{RepoError, RepoResult, validate_amount, validate_finite, validate_month};
use crate::money;
use shared::models::{MonthlyEntry, MonthlyEntryCreate, MonthlyEntryUpdate, MonthlySummary};
use sqlx::SqlitePool;

/// List all entries in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MonthlyEntry>> {
    let entries = sqlx::query_as::<_, MonthlyEntry>(
        "SELECT id, month, total_sales, total_expenses, net_profit FROM monthly_tracker ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// Find an entry by row id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MonthlyEntry>> {
    let entry = sqlx::query_as::<_, MonthlyEntry>(
        "SELECT id, month, total_sales, total_expenses, net_profit FROM monthly_tracker WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(entry)
}

/// Record a month's profit/loss entry
pub async fn create(pool: &SqlitePool, data: MonthlyEntryCreate) -> RepoResult<MonthlyEntry> {
    validate_month(&data.month)?;
    validate_amount(data.total_sales, "total_sales")?;
    validate_amount(data.total_expenses, "total_expenses")?;
    validate_finite(data.net_profit, "net_profit")?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO monthly_tracker (month, total_sales, total_expenses, net_profit) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.month)
    .bind(data.total_sales)
    .bind(data.total_expenses)
    .bind(data.net_profit)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create monthly entry".to_string()))
}

/// Partially update an entry
pub async fn update(pool: &SqlitePool, id: i64, data: MonthlyEntryUpdate) -> RepoResult<MonthlyEntry> {
    if let Some(ref month) = data.month {
        validate_month(month)?;
    }
    if let Some(total_sales) = data.total_sales {
        validate_amount(total_sales, "total_sales")?;
    }
    if let Some(total_expenses) = data.total_expenses {
        validate_amount(total_expenses, "total_expenses")?;
    }
    if let Some(net_profit) = data.net_profit {
        validate_finite(net_profit, "net_profit")?;
    }

    let result = sqlx::query(
        "UPDATE monthly_tracker SET \
            month = COALESCE(?1, month), \
            total_sales = COALESCE(?2, total_sales), \
            total_expenses = COALESCE(?3, total_expenses), \
            net_profit = COALESCE(?4, net_profit) \
         WHERE id = ?5",
    )
    .bind(&data.month)
    .bind(data.total_sales)
    .bind(data.total_expenses)
    .bind(data.net_profit)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Monthly entry {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Monthly entry {id} not found")))
}

/// Delete an entry; Ok(false) when the id did not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM monthly_tracker WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Entry count plus the decimal-safe sum of `net_profit` over all entries
pub async fn profit_summary(pool: &SqlitePool) -> RepoResult<MonthlySummary> {
    let profits: Vec<f64> = sqlx::query_scalar("SELECT net_profit FROM monthly_tracker")
        .fetch_all(pool)
        .await?;

    Ok(MonthlySummary {
        entry_count: profits.len() as i64,
        cumulative_profit: money::sum_amounts(&profits),
    })
}
