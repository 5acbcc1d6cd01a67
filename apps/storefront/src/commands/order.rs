//! # Order Commands
//!
//! Order history and checkout.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Proceder al pago"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_shipping_address                                              │
//! │       │                                                                 │
//! │       ▼  (cart lock held from here)                                     │
//! │  cart empty? ───────────────────────────► EMPTY cart error              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  take_stock(lines) ── short? ───────────► INSUFFICIENT_STOCK            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  orders().create(...) ── fails? ──► return_stock(lines), error out      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PED-YYYY-NNN, Pendiente, unpaid, cart total, customer if signed in     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.clear() ──► Order returned to the confirmation page               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use meow_core::validation::{validate_search_query, validate_shipping_address};
use meow_core::{CoreError, Order, OrderFilter, OrderStatus, Session};
use meow_data::NewOrder;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::state::{CartState, DataState, StoreConfig};

/// Lists past orders, newest first.
///
/// ## Arguments
/// * `status` - Only orders in this state
/// * `search` - Matched against the order number, item names and customer
pub fn list_orders(
    data: &DataState,
    status: Option<OrderStatus>,
    search: &str,
) -> Result<Vec<Order>, ApiError> {
    let search = validate_search_query(search)?;
    debug!(?status, search = %search, "list_orders command");

    let filter = OrderFilter {
        status,
        search,
        ..Default::default()
    };
    let orders = data.inner().orders().list(&filter)?;
    Ok(orders)
}

/// Gets one order by number.
pub fn get_order(data: &DataState, order_id: &str) -> Result<Order, ApiError> {
    debug!(order_id, "get_order command");

    data.inner()
        .orders()
        .get_by_id(order_id)?
        .ok_or_else(|| ApiError::not_found("Order", order_id))
}

/// Places an order for everything in the cart.
///
/// The order total is the cart's `OrderTotals.total` under the configured
/// shipping policy. A signed-in caller is recorded as the order's customer.
/// On success the cart is emptied and its discount dropped. On failure the
/// cart is untouched, and stock taken for an order that could not be stored
/// is put back.
pub fn checkout(
    data: &DataState,
    cart: &CartState,
    config: &StoreConfig,
    session: &Session,
    shipping_address: &str,
) -> Result<Order, ApiError> {
    let shipping_address = validate_shipping_address(shipping_address)?;
    debug!(session = %session.id, "checkout command");

    cart.with_cart_mut(|c| -> Result<Order, ApiError> {
        if c.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let totals = c.totals(&config.shipping);
        let lines: Vec<_> = c.items().iter().map(|i| (i.product_id, i.quantity)).collect();
        data.inner().products().take_stock(&lines)?;

        let created = data.inner().orders().create(NewOrder {
            date: Utc::now().date_naive(),
            customer: session.identity.as_ref().map(|i| i.to_customer()),
            items: c.to_order_items(),
            total: totals.total,
            shipping_address,
        });
        let order = match created {
            Ok(order) => order,
            Err(err) => {
                warn!(session = %session.id, error = %err, "Order not stored, returning stock");
                if let Err(undo) = data.inner().products().return_stock(&lines) {
                    error!(session = %session.id, error = %undo, "Failed to return stock");
                }
                return Err(err.into());
            }
        };

        info!(
            order = %order.id,
            session = %session.id,
            total = %config.format_currency(order.total),
            discount = totals.discount_percent.value(),
            "Checkout completed"
        );

        c.clear();
        Ok(order)
    })
}
