//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, sku        │   │  id (PED-...)   │   │  product_id     │       │
//! │  │  name           │   │  date           │   │  name (frozen)  │       │
//! │  │  price          │   │  status,payment │   │  size           │       │
//! │  │  sizes, stock   │   │  customer,total │   │  unit_price     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DiscountPercent │   │   OrderStatus   │   │    Category     │       │
//! │  │  0..=100        │   │  Pendiente      │   │  camisetas      │       │
//! │  │                 │   │  Enviado ...    │   │  accesorios ... │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::user::UserId;
use crate::LOW_STOCK_THRESHOLD;

/// Numeric product identifier, as used by the catalog.
pub type ProductId = u32;

// =============================================================================
// Discount Percent
// =============================================================================

/// A whole-number discount percentage, always within `0..=100`.
///
/// The only way to build one is [`DiscountPercent::new`], so every value that
/// reaches the pricing engine is already in range and the discount can never
/// exceed the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Largest accepted value.
    pub const MAX: u8 = 100;

    /// Creates a discount percentage.
    ///
    /// ```rust
    /// use meow_core::types::DiscountPercent;
    ///
    /// assert_eq!(DiscountPercent::new(15).unwrap().value(), 15);
    /// assert!(DiscountPercent::new(101).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: i64::from(Self::MAX),
            });
        }
        Ok(DiscountPercent(value))
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountPercent(0)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        DiscountPercent::zero()
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DiscountPercent::new(value)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(pct: DiscountPercent) -> Self {
        pct.0
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category, serialized with the storefront's URL slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "camisetas")]
    Shirts,
    #[serde(rename = "accesorios")]
    Accessories,
    #[serde(rename = "edicion")]
    LimitedEdition,
}

impl Category {
    /// The slug used in URLs and filters.
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::Shirts => "camisetas",
            Category::Accessories => "accesorios",
            Category::LimitedEdition => "edicion",
        }
    }

    /// Parses a slug. Returns `None` for unknown slugs.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "camisetas" => Some(Category::Shirts),
            "accesorios" => Some(Category::Accessories),
            "edicion" => Some(Category::LimitedEdition),
            _ => None,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// How much of a product is left, as shown on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    /// At or below [`LOW_STOCK_THRESHOLD`] units.
    Low,
    InStock,
}

/// A product available in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    /// Stock-keeping code shown in the back office, e.g. `CAM-001`.
    pub sku: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    pub description: String,

    /// Unit price in whole pesos.
    pub price: Money,

    /// Image path relative to the site root.
    pub image: String,

    /// Sizes the product is sold in (e.g. `["S", "M", "L"]`, `["Único"]`).
    pub sizes: Vec<String>,

    /// Units available. This is the stock limit of any cart line.
    pub stock: i64,

    pub category: Category,
}

impl Product {
    /// Classifies the remaining stock.
    pub fn stock_level(&self) -> StockLevel {
        if self.stock <= 0 {
            StockLevel::OutOfStock
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    /// Checks whether `size` is one of the sizes this product is sold in.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Checks if `quantity` units can be sold from current stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle state of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    /// Placed, waiting to ship.
    Pendiente,
    Enviado,
    Entregado,
    Cancelado,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pendiente
    }
}

/// Where the payment for an order stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    #[default]
    Pendiente,
    Pagado,
    Fallido,
}

// =============================================================================
// Order
// =============================================================================

/// A line of a placed order.
/// Uses the snapshot pattern to freeze product data at time of purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    /// Product name at time of purchase (frozen).
    pub name: String,
    pub size: String,
    pub quantity: i64,
    /// Unit price at time of purchase (frozen).
    pub unit_price: Money,
    pub image: String,
}

impl OrderItem {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The signed-in user an order was placed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// A placed order, as listed in the customer's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, `PED-{year}-{seq:03}`.
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment: PaymentStatus,
    /// `None` for orders placed by guests.
    #[serde(default)]
    pub customer: Option<Customer>,
    pub items: Vec<OrderItem>,
    /// Amount charged, including shipping and discount.
    pub total: Money,
    pub shipping_address: String,
}

impl Order {
    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Builds the order number for the `seq`-th order of `year`.
    ///
    /// ```rust
    /// use meow_core::types::Order;
    ///
    /// assert_eq!(Order::number_for(2025, 7), "PED-2025-007");
    /// ```
    pub fn number_for(year: i32, seq: u32) -> String {
        format!("PED-{}-{:03}", year, seq)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
