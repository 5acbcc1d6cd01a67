//! # MeowThreads Storefront Library
//!
//! Command and state layer of the MeowThreads storefront, plus the demo
//! session run by the `storefront` binary.
//!
//! ## Module Organization
//! ```text
//! meow_storefront_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & demo run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── data.rs     ◄─── Store wrapper
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── config.rs   ◄─── Store configuration
//! │   └── session.rs  ◄─── Current session
//! ├── commands/
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── order.rs    ◄─── Checkout and order history
//! │   ├── admin.rs    ◄─── Back-office inventory and orders
//! │   ├── users.rs    ◄─── Back-office user accounts
//! │   ├── auth.rs     ◄─── Login and logout
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use meow_core::{Cart, OrderFilter, OrderStatus, PaymentStatus, UserFilter};
use meow_data::{seed, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{admin, auth, cart, order, product, users};
use error::ApiError;
use state::{CartState, DataState, SessionState, StoreConfig};

/// Runs a scripted storefront session against the sample data.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (RUST_LOG, default: info, meow crates at debug)  │
/// │  2. Load StoreConfig from MEOW_* variables                              │
/// │  3. Seed the store and the starter cart                                 │
/// │  4. Browse: search "edición"                                            │
/// │  5. Apply GATO15, print the order summary                               │
/// │  6. Log in as a customer and check out                                  │
/// │  7. Log in as an admin: inventory report, ship and mark the new order   │
/// │     paid, list active users                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Starting storefront");

    let data = DataState::new(Store::seeded());
    let cart_state = CartState::from_cart(Cart::from_lines(seed::cart_lines())?);
    let session = SessionState::new();

    let found = product::search_products(&data, &config, "edición", None)?;
    for p in &found {
        info!(id = p.product.id, name = %p.product.name, price = %p.price_display, "Catalog");
    }

    let summary = cart::apply_promotion_code(&cart_state, &config, "GATO15")?;
    let totals = summary.totals;
    info!(
        subtotal = %config.format_currency(totals.subtotal),
        shipping = %config.format_currency(totals.shipping),
        discount = %config.format_currency(totals.discount_amount),
        total = %summary.total_display,
        "Order summary"
    );

    let customer = auth::login(&data, &session, "maria@example.com", "miau")?;
    let placed = order::checkout(
        &data,
        &cart_state,
        &config,
        &customer,
        "Calle 123 #45-67, Bogotá",
    )?;
    print_json(&placed)?;

    let admin = auth::login(&data, &session, "andres@meowthreads.com", "miau")?;
    let report = admin::inventory_report(&data, &admin)?;
    print_json(&report)?;

    admin::update_order_status(&data, &admin, &placed.id, OrderStatus::Enviado)?;
    admin::update_payment_status(&data, &admin, &placed.id, PaymentStatus::Pagado)?;
    let paid = admin::list_payment_orders(
        &data,
        &admin,
        &OrderFilter {
            payment: Some(PaymentStatus::Pagado),
            ..Default::default()
        },
    )?;
    info!(paid = paid.len(), latest = %placed.id, "Payment orders");

    let accounts = users::list_users(&data, &admin, &UserFilter::default())?;
    info!(users = accounts.len(), "User accounts");

    auth::logout(&session);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=meow_core=trace` - Trace one crate only
/// - Default: INFO, DEBUG for meow crates
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,meow_core=debug,meow_data=debug,meow_storefront_lib=debug")
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::internal(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_session_runs() {
        run().unwrap();
    }
}
