//! # Repository Module
//!
//! Repository traits for the storefront's tables, and their in-memory
//! implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Access                                    │
//! │                                                                         │
//! │  Storefront command                                                     │
//! │       │                                                                 │
//! │       │  store.products().search(&filter)                               │
//! │       ▼                                                                 │
//! │  dyn ProductRepository                                                  │
//! │  ├── list / get_by_id / search / search_inventory                       │
//! │  └── set_stock / take_stock / return_stock / insert                     │
//! │                                                                         │
//! │  dyn OrderRepository                                                    │
//! │  ├── list / get_by_id                                                   │
//! │  ├── create (numbers the order)                                         │
//! │  └── update_status / update_payment                                     │
//! │                                                                         │
//! │  dyn UserRepository                                                     │
//! │  ├── list / get_by_id / find_by_email                                   │
//! │  └── create / set_status / delete / record_login                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Memory*Repository over Arc<RwLock<Vec<_>>> tables                      │
//! │  (or a MockXRepository in tests)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every trait is `Send + Sync` so a [`Store`](crate::Store) can be shared
//! across threads. `#[automock]` generates a `Mock*` type per trait for
//! injecting failures.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Catalog reads and stock updates
//! - [`OrderRepository`] - Order history and order placement
//! - [`UserRepository`] - Back-office user accounts

use chrono::NaiveDate;
use meow_core::{
    InventoryFilter, NewUser, Order, OrderFilter, OrderStatus, PaymentStatus, Product,
    ProductFilter, ProductId, User, UserFilter, UserId, UserStatus,
};
use mockall::automock;

use crate::error::DataResult;

pub mod order;
pub mod product;
pub mod user;

pub use order::{MemoryOrderRepository, NewOrder};
pub use product::MemoryProductRepository;
pub use user::MemoryUserRepository;

/// Catalog persistence operations.
#[automock]
pub trait ProductRepository: Send + Sync {
    /// All products, in catalog order.
    fn list(&self) -> DataResult<Vec<Product>>;

    /// Products matching `filter`, in catalog order.
    fn search(&self, filter: &ProductFilter) -> DataResult<Vec<Product>>;

    /// Products matching the admin inventory `filter`, in catalog order.
    fn search_inventory(&self, filter: &InventoryFilter) -> DataResult<Vec<Product>>;

    /// Gets a product by its id. `Ok(None)` when there is none.
    fn get_by_id(&self, id: ProductId) -> DataResult<Option<Product>>;

    /// Adds a product. Fails with `UniqueViolation` on a taken id or SKU.
    fn insert(&self, product: Product) -> DataResult<()>;

    /// Sets the units in stock and returns the updated product.
    fn set_stock(&self, id: ProductId, stock: i64) -> DataResult<Product>;

    /// Removes sold units from stock, all or nothing.
    fn take_stock(&self, lines: &[(ProductId, i64)]) -> DataResult<()>;

    /// Puts back units removed by [`take_stock`](Self::take_stock).
    fn return_stock(&self, lines: &[(ProductId, i64)]) -> DataResult<()>;

    fn count(&self) -> DataResult<usize>;
}

/// Order persistence operations.
#[automock]
pub trait OrderRepository: Send + Sync {
    /// Orders matching `filter`, newest first.
    fn list(&self, filter: &OrderFilter) -> DataResult<Vec<Order>>;

    /// Gets an order by its number.
    fn get_by_id(&self, id: &str) -> DataResult<Option<Order>>;

    /// The number the next order placed in `year` would receive.
    fn next_order_number(&self, year: i32) -> DataResult<String>;

    /// Inserts an order that already carries its number.
    fn insert(&self, order: Order) -> DataResult<()>;

    /// Numbers and stores a new order, `Pendiente` and unpaid.
    fn create(&self, new_order: NewOrder) -> DataResult<Order>;

    /// Changes an order's fulfilment status.
    fn update_status(&self, id: &str, status: OrderStatus) -> DataResult<Order>;

    /// Changes an order's payment status.
    fn update_payment(&self, id: &str, payment: PaymentStatus) -> DataResult<Order>;
}

/// User account persistence operations.
#[automock]
pub trait UserRepository: Send + Sync {
    /// Users matching `filter`, by id.
    fn list(&self, filter: &UserFilter) -> DataResult<Vec<User>>;

    fn get_by_id(&self, id: UserId) -> DataResult<Option<User>>;

    /// Looks a user up by email, ignoring case and surrounding whitespace.
    fn find_by_email(&self, email: &str) -> DataResult<Option<User>>;

    /// Stores a new active user with the next free id.
    fn create(&self, new_user: NewUser, created_at: NaiveDate) -> DataResult<User>;

    fn set_status(&self, id: UserId, status: UserStatus) -> DataResult<User>;

    /// Removes a user and returns the removed row.
    fn delete(&self, id: UserId) -> DataResult<User>;

    /// Stamps a successful sign-in.
    fn record_login(&self, id: UserId, date: NaiveDate) -> DataResult<User>;

    fn count(&self) -> DataResult<usize>;
}
