//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub staff_id: i64,
    pub staff_name: String,
    pub position: String,
    pub salary: Option<f64>,
    pub contact_number: Option<String>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub staff_name: String,
    pub position: String,
    pub salary: Option<f64>,
    pub contact_number: Option<String>,
}

/// Update payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub staff_name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub contact_number: Option<String>,
}
