//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MeowThreads                            │
//! │                                                                         │
//! │  Command Function  Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── ValidationError ──► CoreError::Validation ──┐               │
//! │         ├── CoreError (promo, stock, login, forbidden) ─┼──► ApiError   │
//! │         └── DataError (not found, duplicate) ───────────┘               │
//! │                                                                         │
//! │  Frontend receives { "code": "INVALID_PROMOTION_CODE",                  │
//! │                      "message": "Invalid promotion code: BADCODE" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meow_core::CoreError;
use meow_data::DataError;
use serde::Serialize;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Only 8 units available (requested 9)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await api.applyPromotionCode(code);
/// } catch (e) {
///   switch (e.code) {
///     case 'INVALID_PROMOTION_CODE':
///       alert('Código promocional no válido');
///       break;
///     case 'INSUFFICIENT_STOCK':
///       alert(e.message);
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Promotion code not recognised
    InvalidPromotionCode,

    /// Requested quantity above stock
    InsufficientStock,

    /// Cart operation failed
    CartError,

    /// Sign-in refused (401)
    Unauthorized,

    /// Session lacks the required role (403)
    Forbidden,

    /// Storage operation failed (500)
    DataError,

    /// Internal server error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to API errors.
impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DataError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DataError::OutOfStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            DataError::Invalid(e) => ApiError::validation(e.to_string()),
            DataError::LockPoisoned => {
                tracing::error!("Storage lock poisoned");
                ApiError::new(ErrorCode::DataError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::InvalidPromotionCode { .. } => {
                ApiError::new(ErrorCode::InvalidPromotionCode, message)
            }
            CoreError::StockExceeded { .. } => ApiError::new(ErrorCode::InsufficientStock, message),
            CoreError::LineNotFound(id) => ApiError::not_found("Cart item", id),
            CoreError::CartTooLarge { .. } | CoreError::EmptyCart => {
                ApiError::new(ErrorCode::CartError, message)
            }
            CoreError::InvalidCredentials | CoreError::AccountInactive { .. } => {
                ApiError::new(ErrorCode::Unauthorized, message)
            }
            CoreError::Forbidden { .. } => ApiError::new(ErrorCode::Forbidden, message),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<meow_core::ValidationError> for ApiError {
    fn from(err: meow_core::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
