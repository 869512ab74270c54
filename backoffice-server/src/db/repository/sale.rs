//! Sales Repository
//!
//! CRUD over `daily_sales`. Listing is newest-first with row id as the
//! deterministic tie-break within a date.

use super::{RepoError, RepoResult, require_text, validate_amount, validate_date};
use shared::models::{Sale, SaleCreate, SaleUpdate};
use sqlx::SqlitePool;

/// List all sales, most recent date first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Sale>> {
    let sales = sqlx::query_as::<_, Sale>(
        "SELECT id, date, product_id, product_name, amount, mode_of_transaction, transaction_id \
         FROM daily_sales ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(sales)
}

/// Find a sale by row id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Sale>> {
    let sale = sqlx::query_as::<_, Sale>(
        "SELECT id, date, product_id, product_name, amount, mode_of_transaction, transaction_id \
         FROM daily_sales WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(sale)
}

/// Record a sale
pub async fn create(pool: &SqlitePool, data: SaleCreate) -> RepoResult<Sale> {
    validate_date(&data.date)?;
    validate_amount(data.amount, "amount")?;
    require_text(&data.product_name, "product_name")?;
    require_text(&data.mode_of_transaction, "mode_of_transaction")?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO daily_sales (date, product_id, product_name, amount, mode_of_transaction, transaction_id) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.date)
    .bind(&data.product_id)
    .bind(&data.product_name)
    .bind(data.amount)
    .bind(&data.mode_of_transaction)
    .bind(&data.transaction_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create sale".to_string()))
}

/// Partially update a sale; absent fields keep their stored value
pub async fn update(pool: &SqlitePool, id: i64, data: SaleUpdate) -> RepoResult<Sale> {
    if let Some(ref date) = data.date {
        validate_date(date)?;
    }
    if let Some(amount) = data.amount {
        validate_amount(amount, "amount")?;
    }

    let result = sqlx::query(
        "UPDATE daily_sales SET \
            date = COALESCE(?1, date), \
            product_id = COALESCE(?2, product_id), \
            product_name = COALESCE(?3, product_name), \
            amount = COALESCE(?4, amount), \
            mode_of_transaction = COALESCE(?5, mode_of_transaction), \
            transaction_id = COALESCE(?6, transaction_id) \
         WHERE id = ?7",
    )
    .bind(&data.date)
    .bind(&data.product_id)
    .bind(&data.product_name)
    .bind(data.amount)
    .bind(&data.mode_of_transaction)
    .bind(&data.transaction_id)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Sale {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Sale {id} not found")))
}

/// Delete a sale; Ok(false) when the id did not exist
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM daily_sales WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
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
        pool
    }

    fn sample(date: &str, name: &str, amount: f64) -> SaleCreate {
        SaleCreate {
            date: date.to_string(),
            product_id: "P100".to_string(),
            product_name: name.to_string(),
            amount,
            mode_of_transaction: "Cash".to_string(),
            transaction_id: "T100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let sale = create(&pool, sample("2025-03-01", "Robot Kit", 49.99))
            .await
            .unwrap();
        assert_eq!(sale.product_name, "Robot Kit");
        assert_eq!(sale.amount, 49.99);

        let found = find_by_id(&pool, sale.id).await.unwrap().unwrap();
        assert_eq!(found.id, sale.id);
        assert_eq!(found.date, "2025-03-01");
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let pool = test_pool().await;
        create(&pool, sample("2025-03-01", "A", 1.0)).await.unwrap();
        create(&pool, sample("2025-03-03", "B", 2.0)).await.unwrap();
        create(&pool, sample("2025-03-02", "C", 3.0)).await.unwrap();

        let all = find_all(&pool).await.unwrap();
        let dates: Vec<_> = all.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-03", "2025-03-02", "2025-03-01"]);
    }

    #[tokio::test]
    async fn test_find_all_same_date_latest_row_first() {
        let pool = test_pool().await;
        let first = create(&pool, sample("2025-03-01", "First", 1.0)).await.unwrap();
        let second = create(&pool, sample("2025-03-01", "Second", 2.0)).await.unwrap();

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_partial() {
        let pool = test_pool().await;
        let sale = create(&pool, sample("2025-03-01", "Doll", 15.0)).await.unwrap();

        let updated = update(
            &pool,
            sale.id,
            SaleUpdate {
                amount: Some(12.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // Only the amount changes; everything else is untouched
        assert_eq!(updated.amount, 12.5);
        assert_eq!(updated.product_name, "Doll");
        assert_eq!(updated.date, "2025-03-01");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 999, SaleUpdate::default()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let sale = create(&pool, sample("2025-03-01", "Kite", 8.0)).await.unwrap();

        assert!(delete(&pool, sale.id).await.unwrap());
        assert!(find_by_id(&pool, sale.id).await.unwrap().is_none());
        assert!(!delete(&pool, sale.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date() {
        let pool = test_pool().await;
        let err = create(&pool, sample("03/01/2025", "Doll", 5.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_amount() {
        let pool = test_pool().await;
        let err = create(&pool, sample("2025-03-01", "Doll", -5.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_nan_amount() {
        let pool = test_pool().await;
        let sale = create(&pool, sample("2025-03-01", "Doll", 5.0)).await.unwrap();
        let err = update(
            &pool,
            sale.id,
            SaleUpdate {
                amount: Some(f64::NAN),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
