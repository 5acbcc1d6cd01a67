//! # Promotion Codes
//!
//! A fixed registry of case-insensitive codes, each worth a percentage off
//! the subtotal.
//!
//! ## Redemption Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types a code and presses "Aplicar"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  upper-case (no trimming) ──► exact lookup                              │
//! │       │                                                                 │
//! │       ├── found            → Ok(Some(pct))  replaces current discount   │
//! │       ├── blank input      → Ok(None)       nothing happens             │
//! │       └── anything else    → InvalidPromotionCode, discount unchanged   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::DiscountPercent;

/// The codes the storefront honours.
pub const STANDARD_CODES: [(&str, u8); 3] = [("MEOW10", 10), ("GATO15", 15), ("PRIMERACOMPRA", 20)];

/// Mapping from upper-case code to discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRegistry {
    codes: BTreeMap<String, DiscountPercent>,
}

impl PromotionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        PromotionRegistry {
            codes: BTreeMap::new(),
        }
    }

    /// The published MeowThreads codes: `MEOW10`, `GATO15`, `PRIMERACOMPRA`.
    pub fn standard() -> Self {
        let mut registry = PromotionRegistry::new();
        for (code, pct) in STANDARD_CODES {
            // STANDARD_CODES only holds in-range values
            if let Ok(pct) = DiscountPercent::new(pct) {
                registry.insert(code, pct);
            }
        }
        registry
    }

    /// Registers a code. The key is stored upper-cased.
    pub fn insert(&mut self, code: &str, discount: DiscountPercent) {
        self.codes.insert(code.to_uppercase(), discount);
    }

    /// Upper-cases `code` and looks it up exactly.
    pub fn lookup(&self, code: &str) -> Option<DiscountPercent> {
        self.codes.get(&code.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = (&str, DiscountPercent)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for PromotionRegistry {
    fn default() -> Self {
        PromotionRegistry::standard()
    }
}

/// Resolves user input against `registry`.
///
/// ## Returns
/// - `Ok(Some(pct))`: the code is valid; the caller replaces its discount.
/// - `Ok(None)`: the input is empty or whitespace; nothing to apply.
/// - `Err(InvalidPromotionCode)`: anything else.
///
/// Only case is folded. Surrounding whitespace is part of the code, so
/// `" MEOW10"` is rejected.
///
/// ```rust
/// use meow_core::promo::{apply_promotion_code, PromotionRegistry};
///
/// let registry = PromotionRegistry::standard();
/// assert_eq!(apply_promotion_code("meow10", &registry).unwrap().map(|p| p.value()), Some(10));
/// assert!(apply_promotion_code("   ", &registry).unwrap().is_none());
/// assert!(apply_promotion_code("BADCODE", &registry).is_err());
/// ```
pub fn apply_promotion_code(
    code: &str,
    registry: &PromotionRegistry,
) -> CoreResult<Option<DiscountPercent>> {
    if let Some(pct) = registry.lookup(code) {
        return Ok(Some(pct));
    }

    if code.trim().is_empty() {
        return Ok(None);
    }

    Err(CoreError::InvalidPromotionCode {
        code: code.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
