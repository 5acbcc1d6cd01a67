//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (React)                                              │
//! │  ├── Disabled "+" at stock, size picker                                 │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                     │
//! │  └── THIS MODULE: Business rule validation                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants (cart.rs)                                     │
//! │  └── 0 < quantity <= stock_limit, unique line ids                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest promotion code accepted from the input box.
pub const MAX_PROMOTION_CODE_LEN: usize = 32;

/// Longest search query accepted by catalog and order filters.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Longest shipping address accepted at checkout.
pub const MAX_ADDRESS_LEN: usize = 200;

/// Longest display name accepted for a user account.
pub const MAX_USER_NAME_LEN: usize = 100;

/// Longest email address accepted at login and account creation.
pub const MAX_EMAIL_LEN: usize = 254;

/// Longest SKU accepted in the back office.
pub const MAX_SKU_LEN: usize = 50;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
///
/// Stock limits are enforced by the cart itself, against the product.
///
/// ## Example
/// ```rust
/// use meow_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(i64::MAX).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a stock level set from the back office.
///
/// ## Rules
/// - Must be non-negative (zero marks the product as sold out)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the size picked on a product card.
///
/// ## Rules
/// - Must not be blank ("Por favor selecciona una talla")
/// - Must be one of the product's sizes
///
/// ## Example
/// ```rust
/// use meow_core::validation::validate_size;
///
/// let sizes = vec!["S".to_string(), "M".to_string()];
/// assert!(validate_size("M", &sizes).is_ok());
/// assert!(validate_size("", &sizes).is_err());
/// assert!(validate_size("XL", &sizes).is_err());
/// ```
pub fn validate_size(size: &str, allowed: &[String]) -> ValidationResult<()> {
    if size.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "size".to_string(),
        });
    }

    if !allowed.iter().any(|s| s == size) {
        return Err(ValidationError::NotAllowed {
            field: "size".to_string(),
            allowed: allowed.to_vec(),
        });
    }

    Ok(())
}

/// Validates raw promotion code input before lookup.
///
/// ## Rules
/// - Maximum [`MAX_PROMOTION_CODE_LEN`] characters
///
/// Blank input is allowed here; the registry treats it as a no-op.
pub fn validate_promotion_input(code: &str) -> ValidationResult<()> {
    if code.chars().count() > MAX_PROMOTION_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promotion code".to_string(),
            max: MAX_PROMOTION_CODE_LEN,
        });
    }

    Ok(())
}

/// Validates a SKU entered in the back office.
///
/// ## Rules
/// - Must not be blank
/// - Maximum [`MAX_SKU_LEN`] characters
/// - Letters, digits, hyphens and underscores only
///
/// ## Returns
/// The trimmed SKU.
pub fn validate_sku(sku: &str) -> ValidationResult<String> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(sku.to_string())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - Maximum [`MAX_EMAIL_LEN`] characters
/// - Must contain `something@something.something` with no whitespace in
///   any of the three parts
///
/// ## Returns
/// The trimmed address.
///
/// ## Example
/// ```rust
/// use meow_core::validation::validate_email;
///
/// assert_eq!(validate_email(" maria@example.com ").unwrap(), "maria@example.com");
/// assert!(validate_email("maria@example").is_err());
/// assert!(validate_email("maria example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    if !looks_like_email(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain.tld".to_string(),
        });
    }

    Ok(email.to_string())
}

/// True when some `@` has a non-space character before it and is followed
/// by a run of non-space characters holding a `.` that is neither first
/// nor last in the run.
fn looks_like_email(email: &str) -> bool {
    email.match_indices('@').any(|(at, _)| {
        let before = email[..at].chars().next_back();
        if !before.map_or(false, |c| !c.is_whitespace()) {
            return false;
        }

        let domain: Vec<char> = email[at + 1..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();
        domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
    })
}

/// Validates the login form.
///
/// ## Rules
/// - Both fields are required
/// - The email must pass [`validate_email`]
///
/// ## Returns
/// The trimmed email.
pub fn validate_login(email: &str, password: &str) -> ValidationResult<String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::Required {
            field: "email and password".to_string(),
        });
    }

    validate_email(email)
}

/// Validates a user's display name.
///
/// ## Returns
/// The trimmed name.
pub fn validate_user_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_USER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_USER_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum [`MAX_SEARCH_QUERY_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates the shipping address entered at checkout.
///
/// ## Returns
/// The trimmed address.
pub fn validate_shipping_address(address: &str) -> ValidationResult<String> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "shipping address".to_string(),
        });
    }

    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "shipping address".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(address.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
