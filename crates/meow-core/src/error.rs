//! # Error Types
//!
//! Domain-specific error types for meow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  meow-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  meow-data errors (separate crate)                                     │
//! │  └── DataError        - Repository failures                            │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → ApiError → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is locally recoverable: the operation that produced it has
//! not mutated the cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The promotion code is not in the registry.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter "BADCODE" ──► Apply
    ///      │
    ///      ▼
    /// InvalidPromotionCode { code: "BADCODE" }
    ///      │
    ///      ▼
    /// UI shows: "Código promocional no válido", discount unchanged
    /// ```
    #[error("Invalid promotion code: {code}")]
    InvalidPromotionCode { code: String },

    /// Requested quantity is above the line's stock limit.
    ///
    /// ## User Workflow
    /// ```text
    /// Press "+" on a line with stock 8 and quantity 8
    ///      │
    ///      ▼
    /// StockExceeded { available: 8, requested: 9 }
    ///      │
    ///      ▼
    /// UI shows: "Solo hay 8 unidades disponibles", quantity stays at 8
    /// ```
    #[error("Only {available} units available (requested {requested})")]
    StockExceeded { available: i64, requested: i64 },

    /// A cart line id that is not in the cart.
    #[error("Item not in cart: {0}")]
    LineNotFound(String),

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// No active account matches the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but an admin has deactivated it.
    #[error("Account {email} is inactive")]
    AccountInactive { email: String },

    /// The session is not allowed to perform the operation.
    #[error("{action} requires {required} access")]
    Forbidden { action: String, required: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Value does not have the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two cart lines with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::StockExceeded {
            available: 8,
            requested: 9,
        };
        assert_eq!(err.to_string(), "Only 8 units available (requested 9)");

        let err = CoreError::InvalidPromotionCode {
            code: "BADCODE".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid promotion code: BADCODE");

        let err = CoreError::Forbidden {
            action: "inventory report".to_string(),
            required: "admin".to_string(),
        };
        assert_eq!(err.to_string(), "inventory report requires admin access");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "size".to_string(),
        };
        assert_eq!(err.to_string(), "size is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain.tld".to_string(),
        };
        assert_eq!(err.to_string(), "email has invalid format: expected name@domain.tld");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "size".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
