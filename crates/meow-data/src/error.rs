//! # Data Error Types
//!
//! Error types for catalog, order and user storage.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Lock poisoning / missing row / bad stock value                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Adds context and categorization              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← Serialized for frontend                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::PoisonError;

use meow_core::{ProductId, ValidationError};
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Unknown product id on restock
    /// - Unknown order number on status update
    /// - Unknown user id on toggle or delete
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique key violation.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose id is taken
    /// - Inserting an order whose number is taken
    /// - Creating a user with an email already in use
    /// - A year's order sequence is exhausted
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Not enough units left to fill an order.
    #[error("Product {id}: only {available} units left (requested {requested})")]
    OutOfStock {
        id: ProductId,
        available: i64,
        requested: i64,
    },

    /// A value rejected before it reached the table.
    #[error("Invalid data: {0}")]
    Invalid(#[from] ValidationError),

    /// A writer panicked while holding a table lock.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl DataError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DataError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        DataError::UniqueViolation {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

impl<T> From<PoisonError<T>> for DataError {
    fn from(_: PoisonError<T>) -> Self {
        DataError::LockPoisoned
    }
}

/// Result type for storage operations.
pub type DataResult<T> = Result<T, DataError>;
