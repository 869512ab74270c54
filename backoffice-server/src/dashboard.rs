//! Dashboard Aggregation
//!
//! Builds the landing-page summary from the store on every call. Two
//! entry points: `try_compute` surfaces store failures to the caller,
//! `compute` is the fail-soft edition the HTTP layer uses. The page
//! must render even when the store is unreadable, so `compute` logs
//! the failure and serves the all-zero summary instead of an error.
//! An all-zero summary from an empty store is a valid result, not a
//! failure; only `try_compute` distinguishes the two.

use crate::db::repository::RepoResult;
use crate::db::repository::dashboard as queries;
use crate::money::{self, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::models::{ChartData, DashboardSummary, SalesChartPoint};
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use std::time::Duration;

/// Most recent sales listed on the dashboard
const RECENT_SALES_LIMIT: i64 = 10;

/// Distinct sale dates charted
const CHART_DAYS: usize = 7;

/// Upper bound on the whole read pass; a stalled store degrades to the
/// empty summary instead of hanging the page
const COMPUTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Aggregate the summary, propagating any store failure
pub async fn try_compute(pool: &SqlitePool) -> RepoResult<DashboardSummary> {
    let sale_rows = queries::sale_amounts(pool).await?;
    let expense_amounts = queries::expense_amounts(pool).await?;
    let staff_count = queries::staff_count(pool).await?;
    let vendor_count = queries::vendor_name_count(pool).await?;
    let recent_sales = queries::recent_sales(pool, RECENT_SALES_LIMIT).await?;

    // One pass over the sale rows feeds both the grand total and the
    // per-date groups; all accumulation stays in Decimal.
    let mut total_sales = Decimal::ZERO;
    let mut by_date: BTreeMap<String, Decimal> = BTreeMap::new();
    for row in &sale_rows {
        let amount = to_decimal(row.amount);
        total_sales += amount;
        *by_date.entry(row.date.clone()).or_insert(Decimal::ZERO) += amount;
    }

    // ISO dates sort lexicographically, so the map's last keys are the
    // most recent days; re-reversing presents them oldest-first.
    let mut sales_chart: Vec<SalesChartPoint> = by_date
        .iter()
        .rev()
        .take(CHART_DAYS)
        .map(|(date, total)| SalesChartPoint {
            date: date.clone(),
            total: to_f64(*total),
        })
        .collect();
    sales_chart.reverse();

    let chart_data = ChartData {
        labels: sales_chart.iter().map(|p| p.date.clone()).collect(),
        data: sales_chart.iter().map(|p| p.total).collect(),
    };

    Ok(DashboardSummary {
        total_sales: to_f64(total_sales),
        total_expenses: money::sum_amounts(&expense_amounts),
        staff_count,
        vendor_count,
        recent_sales,
        sales_chart,
        chart_data,
    })
}

/// Fail-soft aggregation: never errors, never exceeds `COMPUTE_TIMEOUT`
pub async fn compute(pool: &SqlitePool) -> DashboardSummary {
    match tokio::time::timeout(COMPUTE_TIMEOUT, try_compute(pool)).await {
        Ok(Ok(summary)) => summary,
        Ok(Err(e)) => {
            tracing::error!("Dashboard aggregation failed, serving empty summary: {e}");
            DashboardSummary::empty()
        }
        Err(_) => {
            tracing::error!(
                "Dashboard aggregation timed out after {COMPUTE_TIMEOUT:?}, serving empty summary"
            );
            DashboardSummary::empty()
        }
    }
}
