//! # meow-core: Pricing and Cart Logic for MeowThreads
//!
//! This crate holds the storefront's business rules as pure functions and
//! plain data types. It never touches storage, the network or a clock beyond
//! stamping a cart's creation time.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     MeowThreads Storefront                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Product grid ──► Cart page ──► Promo box ──► Order summary    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/storefront (commands)                     │   │
//! │  │   add_to_cart, apply_promotion_code, checkout, list_orders      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ meow-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │ pricing │ │  promo  │ │  cart   │ │ filter  │  │   │
//! │  │   │  Money  │ │ Totals  │ │ Registry│ │  Cart   │ │ search  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               meow-data (catalog + order repositories)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-peso `Money` type
//! - [`types`] - Products, orders and the `DiscountPercent` newtype
//! - [`pricing`] - Subtotal, shipping, discount and total
//! - [`promo`] - Promotion code registry
//! - [`cart`] - Cart lines and quantity rules
//! - [`filter`] - Catalog, inventory, order and user search
//! - [`session`] - Who is asking, and may they
//! - [`user`] - Back-office user accounts
//! - [`validation`] - Input checks shared by the commands
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use meow_core::cart::{Cart, LineItem};
//! use meow_core::money::Money;
//! use meow_core::pricing::ShippingPolicy;
//! use meow_core::promo::PromotionRegistry;
//!
//! let line = LineItem {
//!     id: "1-M".to_string(),
//!     product_id: 1,
//!     name: "Camiseta Gatuna".to_string(),
//!     size: "M".to_string(),
//!     unit_price: Money::from_units(35_000),
//!     quantity: 2,
//!     stock_limit: 15,
//!     image: String::new(),
//! };
//! let mut cart = Cart::from_lines(vec![line]).unwrap();
//! cart.apply_promotion_code("meow10", &PromotionRegistry::standard()).unwrap();
//!
//! let totals = cart.totals(&ShippingPolicy::STANDARD);
//! assert_eq!(totals.subtotal.units(), 70_000);
//! assert_eq!(totals.shipping.units(), 15_000);
//! assert_eq!(totals.discount_amount.units(), 7_000);
//! assert_eq!(totals.total.units(), 78_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod filter;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod session;
pub mod types;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem, QuantityChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{InventoryFilter, OrderFilter, ProductFilter, UserFilter};
pub use money::Money;
pub use pricing::{OrderTotals, ShippingPolicy};
pub use promo::PromotionRegistry;
pub use session::{Identity, Role, Session};
pub use types::*;
pub use user::{NewUser, User, UserId, UserStatus};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum units of one line, and of one add-to-cart request.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Stock at or below this (but above zero) is shown as "low stock".
pub const LOW_STOCK_THRESHOLD: i64 = 5;
