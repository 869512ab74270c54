//! Application state

use crate::config::Config;
use crate::db;
use sqlx::SqlitePool;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Open the database pool and apply migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::init_pool(&config.database_path).await?;
        Ok(Self { pool })
    }
}
