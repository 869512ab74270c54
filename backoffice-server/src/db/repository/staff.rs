//! Staff Repository
//!
//! CRUD over `staff`, keyed by `staff_id`.

use super::{RepoError, RepoResult, require_text, validate_amount};
use shared::models::{Staff, StaffCreate, StaffUpdate};
use sqlx::SqlitePool;

/// List all staff in id order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Staff>> {
    let staff = sqlx::query_as::<_, Staff>(
        "SELECT staff_id, staff_name, position, salary, contact_number FROM staff ORDER BY staff_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(staff)
}

/// Find a staff member by id
pub async fn find_by_id(pool: &SqlitePool, staff_id: i64) -> RepoResult<Option<Staff>> {
    let staff = sqlx::query_as::<_, Staff>(
        "SELECT staff_id, staff_name, position, salary, contact_number FROM staff WHERE staff_id = ?",
    )
    .bind(staff_id)
    .fetch_optional(pool)
    .await?;
    Ok(staff)
}

/// Add a staff member
pub async fn create(pool: &SqlitePool, data: StaffCreate) -> RepoResult<Staff> {
    require_text(&data.staff_name, "staff_name")?;
    require_text(&data.position, "position")?;
    if let Some(salary) = data.salary {
        validate_amount(salary, "salary")?;
    }

    let staff_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO staff (staff_name, position, salary, contact_number) \
         VALUES (?, ?, ?, ?) RETURNING staff_id",
    )
    .bind(&data.staff_name)
    .bind(&data.position)
    .bind(data.salary)
    .bind(&data.contact_number)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, staff_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create staff member".to_string()))
}

/// Partially update a staff member
pub async fn update(pool: &SqlitePool, staff_id: i64, data: StaffUpdate) -> RepoResult<Staff> {
    if let Some(salary) = data.salary {
        validate_amount(salary, "salary")?;
    }

    let result = sqlx::query(
        "UPDATE staff SET \
            staff_name = COALESCE(?1, staff_name), \
            position = COALESCE(?2, position), \
            salary = COALESCE(?3, salary), \
            contact_number = COALESCE(?4, contact_number) \
         WHERE staff_id = ?5",
    )
    .bind(&data.staff_name)
    .bind(&data.position)
    .bind(data.salary)
    .bind(&data.contact_number)
    .bind(staff_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Staff {staff_id} not found")));
    }

    find_by_id(pool, staff_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Staff {staff_id} not found")))
}

/// Remove a staff member; Ok(false) when the id did not exist
pub async fn delete(pool: &SqlitePool, staff_id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM staff WHERE staff_id = ?")
        .bind(staff_id)
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

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let staff = create(
            &pool,
            StaffCreate {
                staff_name: "Priya".to_string(),
                position: "Cashier".to_string(),
                salary: Some(1800.0),
                contact_number: Some("555-0101".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(staff.staff_name, "Priya");
        let found = find_by_id(&pool, staff.staff_id).await.unwrap().unwrap();
        assert_eq!(found.salary, Some(1800.0));
    }

    #[tokio::test]
    async fn test_optional_fields_may_be_absent() {
        let pool = test_pool().await;
        let staff = create(
            &pool,
            StaffCreate {
                staff_name: "Sam".to_string(),
                position: "Stocker".to_string(),
                salary: None,
                contact_number: None,
            },
        )
        .await
        .unwrap();

        assert!(staff.salary.is_none());
        assert!(staff.contact_number.is_none());
    }

    #[tokio::test]
    async fn test_update_partial() {
        let pool = test_pool().await;
        let staff = create(
            &pool,
            StaffCreate {
                staff_name: "Sam".to_string(),
                position: "Stocker".to_string(),
                salary: Some(1500.0),
                contact_number: None,
            },
        )
        .await
        .unwrap();

        let updated = update(
            &pool,
            staff.staff_id,
            StaffUpdate {
                position: Some("Manager".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.position, "Manager");
        assert_eq!(updated.staff_name, "Sam");
        assert_eq!(updated.salary, Some(1500.0));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_salary() {
        let pool = test_pool().await;
        let err = create(
            &pool,
            StaffCreate {
                staff_name: "Sam".to_string(),
                position: "Stocker".to_string(),
                salary: Some(-100.0),
                contact_number: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let pool = test_pool().await;
        let a = create(
            &pool,
            StaffCreate {
                staff_name: "A".to_string(),
                position: "Cashier".to_string(),
                salary: None,
                contact_number: None,
            },
        )
        .await
        .unwrap();
        create(
            &pool,
            StaffCreate {
                staff_name: "B".to_string(),
                position: "Cashier".to_string(),
                salary: None,
                contact_number: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(find_all(&pool).await.unwrap().len(), 2);
        assert!(delete(&pool, a.staff_id).await.unwrap());
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }
}
