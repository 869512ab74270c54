//! Shared types for the back-office service
//!
//! Common types used across crates: error codes and responses,
//! persisted data models, and ID/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
