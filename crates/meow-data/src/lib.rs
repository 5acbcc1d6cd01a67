//! # meow-data: Catalog and Order Storage for MeowThreads
//!
//! This crate owns the storefront's product catalog, order history and user
//! accounts. Each table is reached through a repository trait. The shipped
//! implementations keep their rows in memory behind `RwLock`s.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     MeowThreads Data Flow                               │
//! │                                                                         │
//! │  Storefront command (search_products, checkout)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   meow-data (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │    Store      │    │  Repositories │    │    Seed      │   │   │
//! │  │   │  (store.rs)   │    │ (product.rs,  │    │  (seed.rs)   │   │   │
//! │  │   │               │◄───│  order.rs,    │    │              │   │   │
//! │  │   │ dyn repos     │    │  user.rs)     │    │ sample rows  │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Table ownership and repository access
//! - [`repository`] - Product, order and user repository traits and
//!   in-memory implementations
//! - [`seed`] - Sample catalog, orders, users and starter cart
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use meow_data::Store;
//!
//! let store = Store::seeded();
//! let saco = store.products().get_by_id(3).unwrap().unwrap();
//! assert_eq!(saco.stock, 3);
//! assert_eq!(store.orders().next_order_number(2025).unwrap(), "PED-2025-005");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult};
pub use repository::{
    MemoryOrderRepository, MemoryProductRepository, MemoryUserRepository, MockOrderRepository,
    MockProductRepository, MockUserRepository, NewOrder, OrderRepository, ProductRepository,
    UserRepository,
};
pub use store::Store;
