//! Dashboard Queries
//!
//! Read-only fetches feeding the aggregation in `crate::dashboard`.
//! Raw amounts are returned instead of SQL SUMs so that the engine can
//! accumulate them decimal-safely.

use super::RepoResult;
use shared::models::Sale;
use sqlx::SqlitePool;

/// Date/amount pair of one sale row
#[derive(Debug, sqlx::FromRow)]
pub struct SaleAmount {
    pub date: String,
    pub amount: f64,
}

/// Every sale's (date, amount), for the grand total and the per-date chart
pub async fn sale_amounts(pool: &SqlitePool) -> RepoResult<Vec<SaleAmount>> {
    let rows = sqlx::query_as::<_, SaleAmount>("SELECT date, amount FROM daily_sales")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Every vendor payment amount
pub async fn expense_amounts(pool: &SqlitePool) -> RepoResult<Vec<f64>> {
    let amounts = sqlx::query_scalar::<_, f64>("SELECT amount FROM vendor_details")
        .fetch_all(pool)
        .await?;
    Ok(amounts)
}

/// Number of staff rows
pub async fn staff_count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM staff")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Number of distinct vendor *names*. Two payments to the same name are
/// one vendor even when their vendor_ids differ.
pub async fn vendor_name_count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT name) FROM vendor_details")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// The `limit` most recent sales; same-date rows tie-break on row id
pub async fn recent_sales(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Sale>> {
    let sales = sqlx::query_as::<_, Sale>(
        "SELECT id, date, product_id, product_name, amount, mode_of_transaction, transaction_id \
         FROM daily_sales ORDER BY date DESC, id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(sales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE daily_sales (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                product_id TEXT NOT NULL,
                product_name TEXT NOT NULL,
                amount REAL NOT NULL,
                mode_of_transaction TEXT NOT NULL,
                transaction_id TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "CREATE TABLE vendor_details (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                name TEXT NOT NULL,
                item TEXT NOT NULL,
                amount REAL NOT NULL,
                vendor_id TEXT NOT NULL UNIQUE,
                mode_of_transaction TEXT NOT NULL,
                transaction_id TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "CREATE TABLE staff (
                staff_id INTEGER PRIMARY KEY AUTOINCREMENT,
                staff_name TEXT NOT NULL,
                position TEXT NOT NULL,
                salary REAL,
                contact_number TEXT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    async fn insert_sale(pool: &SqlitePool, date: &str, amount: f64) {
        sqlx::query(
            "INSERT INTO daily_sales (date, product_id, product_name, amount, mode_of_transaction, transaction_id) \
             VALUES (?, 'P1', 'Toy', ?, 'Cash', 'T1')",
        )
        .bind(date)
        .bind(amount)
        .execute(pool)
        .await
        .unwrap();
    }

    async fn insert_payment(pool: &SqlitePool, name: &str, vendor_id: &str, amount: f64) {
        sqlx::query(
            "INSERT INTO vendor_details (date, name, item, amount, vendor_id, mode_of_transaction, transaction_id) \
             VALUES ('2025-03-01', ?, 'Stock', ?, ?, 'Cash', ?)",
        )
        .bind(name)
        .bind(amount)
        .bind(vendor_id)
        .bind(format!("TXN-{vendor_id}"))
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_sale_amounts_returns_every_row() {
        let pool = test_pool().await;
        insert_sale(&pool, "2025-03-01", 10.0).await;
        insert_sale(&pool, "2025-03-01", 5.0).await;
        insert_sale(&pool, "2025-03-02", 20.0).await;

        let rows = sale_amounts(&pool).await.unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_vendor_name_count_is_distinct_by_name() {
        let pool = test_pool().await;
        insert_payment(&pool, "Acme Toys", "V1", 100.0).await;
        insert_payment(&pool, "Acme Toys", "V2", 150.0).await;
        insert_payment(&pool, "Brick Bros", "V3", 75.0).await;

        // Same name under two vendor_ids still counts once
        assert_eq!(vendor_name_count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_staff_count_empty() {
        let pool = test_pool().await;
        assert_eq!(staff_count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_recent_sales_limit_and_order() {
        let pool = test_pool().await;
        for day in 1..=4 {
            insert_sale(&pool, &format!("2025-03-{day:02}"), day as f64).await;
        }

        let recent = recent_sales(&pool, 3).await.unwrap();
        let dates: Vec<_> = recent.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-04", "2025-03-03", "2025-03-02"]);
    }

    #[tokio::test]
    async fn test_recent_sales_tie_break_is_row_id_desc() {
        let pool = test_pool().await;
        insert_sale(&pool, "2025-03-01", 1.0).await;
        insert_sale(&pool, "2025-03-01", 2.0).await;
        insert_sale(&pool, "2025-03-01", 3.0).await;

        let recent = recent_sales(&pool, 10).await.unwrap();
        let ids: Vec<_> = recent.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
