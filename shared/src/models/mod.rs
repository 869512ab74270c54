//! Data Models
//!
//! Persisted row types plus their create/update payloads, and the
//! derived dashboard types. `sqlx::FromRow` derives are gated behind
//! the `db` feature so frontend consumers stay database-free.

pub mod dashboard;
pub mod monthly;
pub mod product;
pub mod sale;
pub mod staff;
pub mod vendor;

pub use dashboard::*;
pub use monthly::*;
pub use product::*;
pub use sale::*;
pub use staff::*;
pub use vendor::*;
