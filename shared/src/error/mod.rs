//! Unified error handling
//!
//! Numeric error codes shared by the HTTP API and its clients, grouped
//! by business domain:
//!
//! - 0xxx: General
//! - 4xxx: Sales
//! - 5xxx: Vendor payments
//! - 6xxx: Products
//! - 7xxx: Monthly tracker
//! - 8xxx: Staff
//! - 9xxx: System
//!
//! (1xxx-3xxx are reserved.)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound);
//! assert_eq!(err.code.code(), 6001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
