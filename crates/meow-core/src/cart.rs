//! # Cart
//!
//! The shopping cart of a single browsing session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Cart Method               State Change        │
//! │  ───────────              ───────────               ────────────        │
//! │                                                                         │
//! │  "Agregar al carrito" ──► add_product() ──────────► push / merge line   │
//! │                                                                         │
//! │  "+" / "−" ──────────────► set_quantity() ─────────► qty = n            │
//! │                                 │                    or line removed    │
//! │                                 └── n > stock ─────► rejected           │
//! │                                                                         │
//! │  "Eliminar" ─────────────► remove_item() ──────────► line removed       │
//! │                                                                         │
//! │  "Aplicar" code ─────────► apply_promotion_code() ─► discount replaced  │
//! │                                                                         │
//! │  Render summary ─────────► totals() ───────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Line ids are unique (`{product_id}-{size}`); adding the same product
//!   and size again merges into the existing line
//! - Every line satisfies `0 < quantity <= stock_limit`
//! - A rejected operation leaves the cart exactly as it was

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{OrderTotals, ShippingPolicy};
use crate::promo::{apply_promotion_code, PromotionRegistry};
use crate::types::{DiscountPercent, OrderItem, Product, ProductId};
use crate::validation::{validate_quantity, validate_size};
use crate::MAX_CART_ITEMS;

// =============================================================================
// Line Item
// =============================================================================

/// One product/size/quantity entry in the cart.
///
/// Name, price and image are frozen when the line is created, so the cart
/// keeps showing what the customer picked even if the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within the cart: `{product_id}-{size}`.
    pub id: String,
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// Maximum purchasable quantity, taken from product stock.
    pub stock_limit: i64,
    pub image: String,
}

impl LineItem {
    /// Builds the cart line id for a product and size.
    pub fn line_id(product_id: ProductId, size: &str) -> String {
        format!("{}-{}", product_id, size)
    }

    /// Creates a line for `quantity` units of `product` in `size`.
    ///
    /// No validation happens here. [`Cart::add_product`] checks the inputs
    /// before calling this.
    pub fn from_product(product: &Product, size: &str, quantity: i64) -> Self {
        LineItem {
            id: LineItem::line_id(product.id, size),
            product_id: product.id,
            name: product.name.clone(),
            size: size.to_string(),
            unit_price: product.price,
            quantity,
            stock_limit: product.stock,
            image: product.image.clone(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Snapshot of this line for a placed order.
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            name: self.name.clone(),
            size: self.size.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            image: self.image.clone(),
        }
    }
}

// =============================================================================
// Quantity Changes
// =============================================================================

/// Successful outcome of [`set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds the new quantity.
    Updated(i64),
    /// The requested quantity was zero or less; the caller must drop the line.
    Remove,
}

/// Validates and applies a new quantity to one line.
///
/// ## Rules
/// - `new_quantity <= 0` → [`QuantityChange::Remove`]; the item is untouched
/// - `new_quantity > MAX_ITEM_QUANTITY` → `Validation`; the item is untouched
/// - `new_quantity > stock_limit` → `StockExceeded`; the item is untouched
/// - otherwise the quantity is updated
///
/// ```rust
/// use meow_core::cart::{set_quantity, LineItem, QuantityChange};
/// use meow_core::money::Money;
///
/// let mut item = LineItem {
///     id: "2-Único".into(),
///     product_id: 2,
///     name: "Accesorio Gatuno".into(),
///     size: "Único".into(),
///     unit_price: Money::from_units(20_000),
///     quantity: 1,
///     stock_limit: 8,
///     image: String::new(),
/// };
///
/// assert!(set_quantity(&mut item, 9).is_err());
/// assert_eq!(item.quantity, 1);
/// assert_eq!(set_quantity(&mut item, 0).unwrap(), QuantityChange::Remove);
/// ```
pub fn set_quantity(item: &mut LineItem, new_quantity: i64) -> CoreResult<QuantityChange> {
    if new_quantity <= 0 {
        return Ok(QuantityChange::Remove);
    }
    validate_quantity(new_quantity)?;

    if new_quantity > item.stock_limit {
        warn!(
            line = %item.id,
            requested = new_quantity,
            available = item.stock_limit,
            "Quantity change rejected: stock exceeded"
        );
        return Err(CoreError::StockExceeded {
            available: item.stock_limit,
            requested: new_quantity,
        });
    }

    item.quantity = new_quantity;
    Ok(QuantityChange::Updated(new_quantity))
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines are kept in insertion order. At most one promotion code is active;
/// applying another valid code replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// Currently applied discount (zero if none).
    discount: DiscountPercent,

    /// The code that produced `discount`, upper-cased.
    promotion_code: Option<String>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount: DiscountPercent::zero(),
            promotion_code: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a cart pre-seeded with `lines`.
    ///
    /// Every line must satisfy `0 < quantity <= stock_limit` and ids must be
    /// unique. The first offending line is reported.
    pub fn from_lines(lines: Vec<LineItem>) -> CoreResult<Self> {
        if lines.len() > MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        for (index, line) in lines.iter().enumerate() {
            validate_quantity(line.quantity)?;
            if line.quantity > line.stock_limit {
                return Err(CoreError::StockExceeded {
                    available: line.stock_limit,
                    requested: line.quantity,
                });
            }
            if lines[..index].iter().any(|other| other.id == line.id) {
                return Err(ValidationError::Duplicate {
                    field: "line id".to_string(),
                    value: line.id.clone(),
                }
                .into());
            }
        }

        Ok(Cart {
            items: lines,
            ..Cart::new()
        })
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by id.
    pub fn item(&self, line_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == line_id)
    }

    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    pub fn promotion_code(&self) -> Option<&str> {
        self.promotion_code.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds `quantity` units of `product` in `size`, merging with an
    /// existing line for the same product and size.
    ///
    /// ## Errors
    /// - `Validation`: blank or unknown size, requested or merged quantity
    ///   outside `1..=MAX_ITEM_QUANTITY`
    /// - `StockExceeded`: the resulting line quantity would exceed stock
    /// - `CartTooLarge`: a new line would exceed [`MAX_CART_ITEMS`]
    pub fn add_product(&mut self, product: &Product, size: &str, quantity: i64) -> CoreResult<()> {
        validate_size(size, &product.sizes)?;
        validate_quantity(quantity)?;

        let line_id = LineItem::line_id(product.id, size);

        if let Some(item) = self.items.iter_mut().find(|i| i.id == line_id) {
            let merged = item.quantity.saturating_add(quantity);
            validate_quantity(merged)?;
            if merged > product.stock {
                warn!(line = %line_id, requested = merged, available = product.stock, "Add rejected: stock exceeded");
                return Err(CoreError::StockExceeded {
                    available: product.stock,
                    requested: merged,
                });
            }
            item.quantity = merged;
            item.stock_limit = product.stock;
            return Ok(());
        }

        if !product.can_sell(quantity) {
            warn!(line = %line_id, requested = quantity, available = product.stock, "Add rejected: stock exceeded");
            return Err(CoreError::StockExceeded {
                available: product.stock,
                requested: quantity,
            });
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_product(product, size, quantity));
        Ok(())
    }

    /// Sets the quantity of a line, removing it when `quantity <= 0`.
    ///
    /// Returns what happened to the line. On `StockExceeded` the line keeps
    /// its previous quantity.
    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) -> CoreResult<QuantityChange> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == line_id)
            .ok_or_else(|| CoreError::LineNotFound(line_id.to_string()))?;

        let change = set_quantity(item, quantity)?;
        if change == QuantityChange::Remove {
            self.items.retain(|i| i.id != line_id);
        }
        Ok(change)
    }

    /// Removes a line by id.
    pub fn remove_item(&mut self, line_id: &str) -> CoreResult<LineItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == line_id)
            .ok_or_else(|| CoreError::LineNotFound(line_id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Applies a promotion code from `registry`.
    ///
    /// A valid code replaces the current discount. Blank input changes
    /// nothing. An unknown code is rejected and the current discount stays.
    /// Returns the discount in effect afterwards.
    pub fn apply_promotion_code(
        &mut self,
        code: &str,
        registry: &PromotionRegistry,
    ) -> CoreResult<DiscountPercent> {
        match apply_promotion_code(code, registry) {
            Ok(Some(pct)) => {
                self.discount = pct;
                self.promotion_code = Some(code.to_uppercase());
            }
            Ok(None) => {}
            Err(err) => {
                warn!(code = %code, "Promotion code rejected");
                return Err(err);
            }
        }
        Ok(self.discount)
    }

    /// Removes all lines and any applied discount.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = DiscountPercent::zero();
        self.promotion_code = None;
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes the order summary under `policy`.
    pub fn totals(&self, policy: &ShippingPolicy) -> OrderTotals {
        OrderTotals::compute(&self.items, self.discount, policy)
    }

    /// Order lines for checkout.
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.items.iter().map(LineItem::to_order_item).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
