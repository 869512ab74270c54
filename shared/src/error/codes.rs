//! Error code definitions
//!
//! Every error the service can return carries one of these numeric
//! codes. Codes are stable across releases: clients match on the
//! number, not the message.

use serde::{Deserialize, Serialize};

/// Numeric error code, serialized as a bare u16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,
    InvalidFormat = 6,
    RequiredField = 7,
    ValueOutOfRange = 8,

    // ==================== 4xxx: Sales ====================
    SaleNotFound = 4001,
    SaleInvalidAmount = 4002,

    // ==================== 5xxx: Vendor Payments ====================
    VendorPaymentNotFound = 5001,
    VendorPaymentInvalidAmount = 5002,

    // ==================== 6xxx: Products ====================
    ProductNotFound = 6001,
    ProductInvalidPrice = 6002,
    ProductIdExists = 6003,

    // ==================== 7xxx: Monthly Tracker ====================
    MonthlyEntryNotFound = 7001,
    MonthlyInvalidMonth = 7002,

    // ==================== 8xxx: Staff ====================
    StaffNotFound = 8001,
    StaffInvalidSalary = 8002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
    TimeoutError = 9003,
    ConfigError = 9004,
}

impl ErrorCode {
    /// Numeric value of this code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Default English message for this code
    pub const fn message(self) -> &'static str {
        match self {
            // 0xxx: General
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            // 4xxx: Sales
            Self::SaleNotFound => "Sale record not found",
            Self::SaleInvalidAmount => "Invalid sale amount",

            // 5xxx: Vendor payments
            Self::VendorPaymentNotFound => "Vendor payment not found",
            Self::VendorPaymentInvalidAmount => "Invalid vendor payment amount",

            // 6xxx: Products
            Self::ProductNotFound => "Product not found",
            Self::ProductInvalidPrice => "Invalid product price",
            Self::ProductIdExists => "Product ID already exists",

            // 7xxx: Monthly tracker
            Self::MonthlyEntryNotFound => "Monthly entry not found",
            Self::MonthlyInvalidMonth => "Invalid month format",

            // 8xxx: Staff
            Self::StaffNotFound => "Staff member not found",
            Self::StaffInvalidSalary => "Invalid staff salary",

            // 9xxx: System
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::TimeoutError => "Operation timed out",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when deserializing an unknown numeric code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            4001 => Ok(Self::SaleNotFound),
            4002 => Ok(Self::SaleInvalidAmount),

            5001 => Ok(Self::VendorPaymentNotFound),
            5002 => Ok(Self::VendorPaymentInvalidAmount),

            6001 => Ok(Self::ProductNotFound),
            6002 => Ok(Self::ProductInvalidPrice),
            6003 => Ok(Self::ProductIdExists),

            7001 => Ok(Self::MonthlyEntryNotFound),
            7002 => Ok(Self::MonthlyInvalidMonth),

            8001 => Ok(Self::StaffNotFound),
            8002 => Ok(Self::StaffInvalidSalary),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::TimeoutError),
            9004 => Ok(Self::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
