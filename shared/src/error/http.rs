//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status for this code
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // Not found
            Self::NotFound
            | Self::SaleNotFound
            | Self::VendorPaymentNotFound
            | Self::ProductNotFound
            | Self::MonthlyEntryNotFound
            | Self::StaffNotFound => StatusCode::NOT_FOUND,

            // Conflict
            Self::AlreadyExists | Self::ProductIdExists => StatusCode::CONFLICT,

            // Server-side failures
            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // Everything else is a client error
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
