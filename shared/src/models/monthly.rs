//! Monthly Tracker Model

use serde::{Deserialize, Serialize};

/// Month-level profit/loss entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MonthlyEntry {
    pub id: i64,
    /// Calendar month (YYYY-MM)
    pub month: String,
    pub total_sales: f64,
    pub total_expenses: f64,
    /// May be negative for loss-making months
    pub net_profit: f64,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyEntryCreate {
    pub month: String,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyEntryUpdate {
    pub month: Option<String>,
    pub total_sales: Option<f64>,
    pub total_expenses: Option<f64>,
    pub net_profit: Option<f64>,
}

/// Rollup across all monthly entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub entry_count: i64,
    /// Decimal-safe sum of `net_profit` across every entry
    pub cumulative_profit: f64,
}
