//! # MeowThreads Storefront Entry Point
//!
//! Runs a demo session against the sample catalog and prints the placed
//! order and the inventory report as JSON.
//!
//! ## Environment
//! - `RUST_LOG`: log filter
//! - `MEOW_STORE_NAME`, `MEOW_FREE_SHIPPING_OVER`, `MEOW_SHIPPING_FEE`:
//!   see `StoreConfig::from_env`

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = meow_storefront_lib::run() {
        eprintln!("storefront: {}", err);
        std::process::exit(1);
    }
}
