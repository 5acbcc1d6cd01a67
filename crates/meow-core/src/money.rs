//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    12345 * 15 / 100 = 1851.75  → a fractional peso on the receipt      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pesos                                            │
//! │    Prices are whole pesos (COP has no minor unit in the catalog)       │
//! │    Percentages are floored explicitly: 1851.75 → 1851                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use meow_core::money::Money;
//!
//! let price = Money::from_units(35_000);
//! let line = price * 2;
//! assert_eq!(line.units(), 70_000);
//! assert_eq!(line.to_string(), "$70.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountPercent;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units (Colombian pesos).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as `total - discount` stay representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No floats anywhere**: percentages go through [`Money::percentage`]
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► LineItem.unit_price ──► LineItem.line_total
///                                                  │
///                                                  ▼
///                   OrderTotals { subtotal, shipping, discount, total }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use meow_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(150_000).units(), 150_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use meow_core::money::Money;
    ///
    /// let unit_price = Money::from_units(20_000);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 60_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Returns `pct` percent of this amount, floored to a whole unit.
    ///
    /// ## Rounding
    /// Integer division on `i128` truncates, which for the non-negative
    /// amounts a cart produces is a floor. The result is never larger
    /// than the exact value.
    ///
    /// ```rust
    /// use meow_core::money::Money;
    /// use meow_core::types::DiscountPercent;
    ///
    /// let pct = DiscountPercent::new(15).unwrap();
    /// assert_eq!(Money::from_units(12_345).percentage(pct).units(), 1_851);
    /// ```
    pub fn percentage(&self, pct: DiscountPercent) -> Money {
        // i128 keeps `amount * 100` clear of overflow for any i64 amount
        let part = (self.0 as i128 * pct.value() as i128) / 100;
        Money(part as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the storefront prints prices: `$305.000`.
///
/// Thousands are grouped with `.`, matching the `es-CO` locale. Use
/// `StoreConfig::format_currency` when the separator or symbol is configurable.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, group_thousands(self.0.unsigned_abs(), '.'))
    }
}

/// Groups the digits of `value` in threes using `separator`.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Operators saturate at the i64 bounds instead of panicking on overflow.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(value: u8) -> DiscountPercent {
        DiscountPercent::new(value).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(305_000).to_string(), "$305.000");
        assert_eq!(Money::from_units(15_000).to_string(), "$15.000");
        assert_eq!(Money::from_units(999).to_string(), "$999");
        assert_eq!(Money::from_units(0).to_string(), "$0");
        assert_eq!(Money::from_units(-1_500).to_string(), "-$1.500");
        assert_eq!(Money::from_units(1_234_567).to_string(), "$1.234.567");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(35_000);
        let b = Money::from_units(20_000);

        assert_eq!((a + b).units(), 55_000);
        assert_eq!((a - b).units(), 15_000);
        assert_eq!((a * 2).units(), 70_000);

        let mut c = a;
        c += b;
        c -= Money::from_units(5_000);
        assert_eq!(c.units(), 50_000);
    }

    #[test]
    fn test_overflow_saturates() {
        let max = Money::from_units(i64::MAX);
        assert_eq!((max + Money::from_units(1)).units(), i64::MAX);
        assert_eq!((Money::from_units(i64::MIN) - Money::from_units(1)).units(), i64::MIN);
        assert_eq!(Money::from_units(370_000).multiply_quantity(i64::MAX).units(), i64::MAX);
        assert_eq!((max * 2).units(), i64::MAX);

        assert!(max.checked_add(Money::from_units(1)).is_none());
        assert_eq!(
            Money::from_units(1).checked_add(Money::from_units(2)),
            Some(Money::from_units(3))
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [70_000, 20_000, 170_000]
            .into_iter()
            .map(Money::from_units)
            .sum();
        assert_eq!(total.units(), 260_000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_exact() {
        assert_eq!(Money::from_units(90_000).percentage(pct(10)).units(), 9_000);
        assert_eq!(Money::from_units(260_000).percentage(pct(15)).units(), 39_000);
    }

    #[test]
    fn test_percentage_floors_fractions() {
        // 12345 × 15% = 1851.75
        assert_eq!(Money::from_units(12_345).percentage(pct(15)).units(), 1_851);
        // 99 × 10% = 9.9
        assert_eq!(Money::from_units(99).percentage(pct(10)).units(), 9);
    }

    #[test]
    fn test_percentage_bounds() {
        let amount = Money::from_units(48_000);
        assert!(amount.percentage(pct(0)).is_zero());
        assert_eq!(amount.percentage(pct(100)), amount);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_units(1).is_positive());
        assert!(Money::from_units(-1).is_negative());
    }
}
