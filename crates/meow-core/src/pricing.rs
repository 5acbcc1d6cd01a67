//! # Pricing Engine
//!
//! Pure computation from cart lines to order totals.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Totals                                     │
//! │                                                                         │
//! │  items ──► compute_subtotal ──► subtotal ─┬─► compute_shipping         │
//! │                                           │      > 150.000 → $0         │
//! │                                           │      otherwise → $15.000    │
//! │                                           │                             │
//! │  discount % ─────────────────────────────►└─► compute_discount_amount  │
//! │                                                  floor(sub × % / 100)   │
//! │                                                                         │
//! │  total = subtotal + shipping − discount_amount                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored. [`OrderTotals`] is recomputed from the cart on
//! every read.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::money::Money;
use crate::types::DiscountPercent;

/// Subtotals strictly above this ship for free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_units(150_000);

/// Flat shipping fee charged at or below the threshold.
pub const SHIPPING_FEE: Money = Money::from_units(15_000);

// =============================================================================
// Shipping Policy
// =============================================================================

/// Free-shipping threshold and flat fee.
///
/// The comparison is strict: a subtotal of exactly `free_over` still pays
/// the fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    pub free_over: Money,
    pub fee: Money,
}

impl ShippingPolicy {
    /// The storefront's published policy: free above $150.000, else $15.000.
    pub const STANDARD: ShippingPolicy = ShippingPolicy {
        free_over: FREE_SHIPPING_THRESHOLD,
        fee: SHIPPING_FEE,
    };

    /// Shipping fee owed for `subtotal`.
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_over {
            Money::zero()
        } else {
            self.fee
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::STANDARD
    }
}

// =============================================================================
// Pricing Operations
// =============================================================================

/// Σ(unit price × quantity). An empty cart yields zero.
///
/// ```rust
/// use meow_core::pricing::compute_subtotal;
///
/// assert!(compute_subtotal(&[]).is_zero());
/// ```
pub fn compute_subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Shipping under [`ShippingPolicy::STANDARD`].
///
/// ```rust
/// use meow_core::money::Money;
/// use meow_core::pricing::compute_shipping;
///
/// assert_eq!(compute_shipping(Money::from_units(150_000)).units(), 15_000);
/// assert_eq!(compute_shipping(Money::from_units(150_001)).units(), 0);
/// ```
pub fn compute_shipping(subtotal: Money) -> Money {
    ShippingPolicy::STANDARD.fee_for(subtotal)
}

/// The discount taken off `subtotal`, floored to a whole peso.
pub fn compute_discount_amount(subtotal: Money, discount: DiscountPercent) -> Money {
    subtotal.percentage(discount)
}

/// `subtotal + shipping − discount` under [`ShippingPolicy::STANDARD`].
pub fn compute_total(items: &[LineItem], discount: DiscountPercent) -> Money {
    OrderTotals::compute(items, discount, &ShippingPolicy::STANDARD).total
}

// =============================================================================
// Order Totals
// =============================================================================

/// Derived cart summary. Never mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Number of distinct lines.
    pub item_count: usize,
    /// Units across all lines.
    pub total_quantity: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub discount_percent: DiscountPercent,
    pub discount_amount: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Computes every figure shown in the order summary.
    ///
    /// ```rust
    /// use meow_core::pricing::{OrderTotals, ShippingPolicy};
    /// use meow_core::types::DiscountPercent;
    ///
    /// let totals = OrderTotals::compute(&[], DiscountPercent::zero(), &ShippingPolicy::STANDARD);
    /// assert_eq!(totals.total.units(), 15_000);
    /// ```
    pub fn compute(items: &[LineItem], discount: DiscountPercent, policy: &ShippingPolicy) -> Self {
        let subtotal = compute_subtotal(items);
        let shipping = policy.fee_for(subtotal);
        let discount_amount = compute_discount_amount(subtotal, discount);

        OrderTotals {
            item_count: items.len(),
            total_quantity: items.iter().map(|i| i.quantity).sum(),
            subtotal,
            shipping,
            discount_percent: discount,
            discount_amount,
            total: subtotal + shipping - discount_amount,
        }
    }

    /// Whether the order ships for free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, quantity: i64, stock: i64) -> LineItem {
        LineItem {
            id: id.to_string(),
            product_id: 0,
            name: id.to_string(),
            size: "M".to_string(),
            unit_price: Money::from_units(price),
            quantity,
            stock_limit: stock,
            image: String::new(),
        }
    }

    fn pct(value: u8) -> DiscountPercent {
        DiscountPercent::new(value).unwrap()
    }

    fn sample_cart() -> Vec<LineItem> {
        vec![
            line("1-M", 35_000, 2, 15),
            line("2-Único", 20_000, 1, 8),
            line("3-L", 170_000, 1, 3),
        ]
    }

    #[test]
    fn test_subtotal_empty() {
        assert_eq!(compute_subtotal(&[]), Money::zero());
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let items = vec![line("a", 35_000, 2, 15), line("b", 20_000, 1, 8)];
        assert_eq!(compute_subtotal(&items).units(), 90_000);
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        assert_eq!(compute_shipping(Money::from_units(150_000)).units(), 15_000);
        assert_eq!(compute_shipping(Money::from_units(150_001)).units(), 0);
        assert_eq!(compute_shipping(Money::zero()).units(), 15_000);
    }

    #[test]
    fn test_custom_shipping_policy() {
        let policy = ShippingPolicy {
            free_over: Money::from_units(100_000),
            fee: Money::from_units(9_900),
        };
        assert_eq!(policy.fee_for(Money::from_units(100_000)).units(), 9_900);
        assert!(policy.fee_for(Money::from_units(100_001)).is_zero());
    }

    #[test]
    fn test_discount_amount_exact() {
        assert_eq!(
            compute_discount_amount(Money::from_units(90_000), pct(10)).units(),
            9_000
        );
    }

    #[test]
    fn test_discount_amount_fraction_is_floored() {
        // 12345 × 15 / 100 = 1851.75
        assert_eq!(
            compute_discount_amount(Money::from_units(12_345), pct(15)).units(),
            1_851
        );
    }

    #[test]
    fn test_total_matches_formula() {
        let carts = vec![
            vec![],
            vec![line("a", 1, 1, 1)],
            vec![line("a", 35_000, 2, 15), line("b", 20_000, 1, 8)],
            sample_cart(),
            vec![line("a", 75_000, 2, 2)],
            vec![line("a", 12_345, 1, 1)],
        ];

        for items in &carts {
            for discount in [0, 1, 10, 15, 20, 33, 99, 100] {
                let discount = pct(discount);
                let subtotal = compute_subtotal(items);
                let expected = subtotal + compute_shipping(subtotal)
                    - compute_discount_amount(subtotal, discount);
                let total = compute_total(items, discount);
                assert_eq!(total, expected);
                assert!(!total.is_negative());
            }
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let items = sample_cart();

        let totals = OrderTotals::compute(&items, DiscountPercent::zero(), &ShippingPolicy::STANDARD);
        assert_eq!(totals.subtotal.units(), 260_000);
        assert_eq!(totals.shipping.units(), 0);
        assert!(totals.has_free_shipping());
        assert_eq!(totals.discount_amount.units(), 0);
        assert_eq!(totals.total.units(), 260_000);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.total_quantity, 4);

        let totals = OrderTotals::compute(&items, pct(15), &ShippingPolicy::STANDARD);
        assert_eq!(totals.discount_amount.units(), 39_000);
        assert_eq!(totals.total.units(), 221_000);
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let totals = OrderTotals::compute(&sample_cart(), pct(10), &ShippingPolicy::STANDARD);
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["discountPercent"], 10);
        assert_eq!(json["discountAmount"], 26_000);
        assert_eq!(json["total"], 234_000);
    }
}
