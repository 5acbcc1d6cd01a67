//! # Cart Commands
//!
//! Commands behind the cart page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│  Promo   │────►│  Order   │        │
//! │  │  Cart    │     │          │     │ applied  │     │  placed  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                 │                              │
//! │                   add_to_cart   apply_promotion_code    checkout        │
//! │                   update_cart_item                      (order.rs)      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart with freshly computed totals.

use meow_core::validation::validate_promotion_input;
use meow_core::{Cart, CoreError, LineItem, OrderTotals, ProductId};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, DataState, StoreConfig};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    /// Upper-cased code behind the current discount, if any.
    pub promotion_code: Option<String>,
    /// `totals.total` formatted for display, e.g. `"$221.000"`.
    pub total_display: String,
}

impl CartResponse {
    pub fn build(cart: &Cart, config: &StoreConfig) -> Self {
        let totals = cart.totals(&config.shipping);
        CartResponse {
            items: cart.items().to_vec(),
            totals,
            promotion_code: cart.promotion_code().map(str::to_string),
            total_display: config.format_currency(totals.total),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Resumen del pedido                                                     │
/// │  ──────────────────────────────────────────────                         │
/// │  Subtotal (4 productos)                        $260.000                 │
/// │  Envío                                           Gratis                 │
/// │  Descuento (15%)                               -$39.000                 │
/// │  ──────────────────────────────────────────────                         │
/// │  Total                                         $221.000                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &StoreConfig) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::build(c, config))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Same product and size already in cart: quantity increases
/// - Otherwise: added as a new line with the product's current price
///
/// ## Arguments
/// * `product_id` - Catalog id
/// * `size` - One of the product's sizes
/// * `quantity` - Units to add (default: 1)
pub fn add_to_cart(
    data: &DataState,
    cart: &CartState,
    config: &StoreConfig,
    product_id: ProductId,
    size: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, size, quantity, "add_to_cart command");

    let product = data
        .inner()
        .products()
        .get_by_id(product_id)?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.add_product(&product, size, quantity)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Quantity above the line's stock limit: rejected, line unchanged
pub fn update_cart_item(
    cart: &CartState,
    config: &StoreConfig,
    line_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.set_quantity(line_id, quantity)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(
    cart: &CartState,
    config: &StoreConfig,
    line_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(line_id, "remove_from_cart command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.remove_item(line_id)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Applies a promotion code.
///
/// ## User Workflow
/// ```text
/// Type "gato15" ──► Aplicar
///      │
///      ├── known code  → discount replaced, summary shows "Descuento (15%)"
///      ├── blank input → nothing happens, however long
///      └── unknown     → INVALID_PROMOTION_CODE, previous discount kept
///                        (over-long input included)
/// ```
pub fn apply_promotion_code(
    cart: &CartState,
    config: &StoreConfig,
    code: &str,
) -> Result<CartResponse, ApiError> {
    debug!(code, "apply_promotion_code command");
    if let Err(e) = validate_promotion_input(code) {
        if !code.trim().is_empty() {
            debug!(error = %e, "Promotion code rejected before lookup");
            return Err(CoreError::InvalidPromotionCode {
                code: code.to_string(),
            }
            .into());
        }
    }

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.apply_promotion_code(code, &config.promotions)?;
        Ok(CartResponse::build(c, config))
    })
}

/// Clears all lines and the applied discount.
pub fn clear_cart(cart: &CartState, config: &StoreConfig) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::build(c, config)
    })
}
