//! Repository Module
//!
//! CRUD over the SQLite store: free functions taking a pool reference,
//! one module per table. Each call checks a connection out of the pool
//! only for as long as the query runs.

// Recording
pub mod monthly;
pub mod sale;
pub mod vendor;

// Catalog and people
pub mod product;
pub mod staff;

// Read-only aggregates
pub mod dashboard;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error type
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("Row not found".to_string()),
            sqlx::Error::Database(e) if e.is_unique_violation() => Self::Duplicate(e.to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::with_message(ErrorCode::ValidationFailed, msg),
            RepoError::Database(msg) => AppError::with_message(ErrorCode::DatabaseError, msg),
        }
    }
}

/// Business dates are ISO calendar dates
pub(crate) fn validate_date(date: &str) -> RepoResult<()> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| RepoError::Validation(format!("Invalid date '{date}', expected YYYY-MM-DD")))
}

/// Months are YYYY-MM; validated by pinning to the first day
pub(crate) fn validate_month(month: &str) -> RepoResult<()> {
    chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| RepoError::Validation(format!("Invalid month '{month}', expected YYYY-MM")))
}

/// Money amounts must be finite and non-negative
pub(crate) fn validate_amount(value: f64, field: &str) -> RepoResult<()> {
    if !value.is_finite() {
        return Err(RepoError::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(RepoError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Net figures may be negative but still must be finite
pub(crate) fn validate_finite(value: f64, field: &str) -> RepoResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RepoError::Validation(format!("{field} must be a finite number")))
    }
}

/// Required text fields must contain something
pub(crate) fn require_text(value: &str, field: &str) -> RepoResult<()> {
    if value.trim().is_empty() {
        Err(RepoError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}
