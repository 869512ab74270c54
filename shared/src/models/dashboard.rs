//! Dashboard Models
//!
//! Derived read-model for the landing dashboard. Never persisted;
//! recomputed from the store on every request.

use super::sale::Sale;
use serde::{Deserialize, Serialize};

/// One charted day: a business date and its summed sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChartPoint {
    /// Business date (YYYY-MM-DD)
    pub date: String,
    pub total: f64,
}

/// Chart-friendly projection of the sales chart: parallel arrays,
/// `labels[i]` pairing with `data[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Aggregated dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum over every sale ever recorded
    pub total_sales: f64,
    /// Sum over every vendor payment ever recorded
    pub total_expenses: f64,
    pub staff_count: i64,
    /// Distinct vendor names, not distinct vendor IDs
    pub vendor_count: i64,
    /// At most 10 sales, most recent date first
    pub recent_sales: Vec<Sale>,
    /// Up to 7 most recent distinct sale dates, oldest first
    pub sales_chart: Vec<SalesChartPoint>,
    pub chart_data: ChartData,
}

impl DashboardSummary {
    /// All-zero summary, served when the store cannot be read
    pub fn empty() -> Self {
        Self {
            total_sales: 0.0,
            total_expenses: 0.0,
            staff_count: 0,
            vendor_count: 0,
            recent_sales: Vec::new(),
            sales_chart: Vec::new(),
            chart_data: ChartData {
                labels: Vec::new(),
                data: Vec::new(),
            },
        }
    }
}
