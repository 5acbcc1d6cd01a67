//! # Commands Module
//!
//! Every operation the storefront frontend can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here
//! ├── product.rs  ◄─── Catalog search, product detail
//! ├── cart.rs     ◄─── Cart manipulation, promotion codes
//! ├── order.rs    ◄─── Checkout, order history
//! ├── admin.rs    ◄─── Inventory, order and payment status (admin only)
//! ├── users.rs    ◄─── User accounts (admin only)
//! ├── auth.rs     ◄─── Login and logout
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! Each command takes only the state it needs and returns
//! `Result<T, ApiError>`, where `T` serializes to JSON for the frontend.
//! ```rust,ignore
//! // Only needs the store
//! fn get_order(data: &DataState, order_id: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &StoreConfig)
//!
//! // Needs the caller's session
//! fn inventory_report(data: &DataState, session: &Session)
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod config;
pub mod order;
pub mod product;
pub mod users;
