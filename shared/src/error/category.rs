//! Error categories
//!
//! Coarse grouping of error codes by business domain, derived from the
//! numeric range. Used for logging and client-side routing.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Business domain of an error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Sales,
    VendorPayment,
    Product,
    Monthly,
    Staff,
    System,
}

impl ErrorCategory {
    /// Derive the category from a numeric code range
    pub const fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Sales,
            5000..6000 => Self::VendorPayment,
            6000..7000 => Self::Product,
            7000..8000 => Self::Monthly,
            8000..9000 => Self::Staff,
            9000.. => Self::System,
            // 1xxx-3xxx are reserved
            _ => Self::General,
        }
    }

    /// Stable lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Sales => "sales",
            Self::VendorPayment => "vendor_payment",
            Self::Product => "product",
            Self::Monthly => "monthly",
            Self::Staff => "staff",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Category of this code
    pub const fn category(self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Sales);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::VendorPayment);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Monthly);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Staff);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(65535), ErrorCategory::System);
    }

    #[test]
    fn test_reserved_ranges_fall_back_to_general() {
        assert_eq!(ErrorCategory::from_code(1500), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(3999), ErrorCategory::General);
    }

    #[test]
    fn test_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::SaleNotFound.category(), ErrorCategory::Sales);
        assert_eq!(
            ErrorCode::VendorPaymentInvalidAmount.category(),
            ErrorCategory::VendorPayment
        );
        assert_eq!(ErrorCode::ProductIdExists.category(), ErrorCategory::Product);
        assert_eq!(ErrorCode::MonthlyInvalidMonth.category(), ErrorCategory::Monthly);
        assert_eq!(ErrorCode::StaffInvalidSalary.category(), ErrorCategory::Staff);
        assert_eq!(ErrorCode::TimeoutError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::VendorPayment.name(), "vendor_payment");
        assert_eq!(ErrorCategory::System.to_string(), "system");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::VendorPayment).unwrap();
        assert_eq!(json, "\"vendor_payment\"");
        let cat: ErrorCategory = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(cat, ErrorCategory::Staff);
    }
}
