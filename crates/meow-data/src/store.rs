//! # Store
//!
//! Holds one repository per table behind the repository traits.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Store                                          │
//! │                                                                         │
//! │  Store::seeded() / Store::with_data(...)   Store::new(p, o, u)          │
//! │       │  in-memory repositories               │  any implementation     │
//! │       ▼                                       ▼  (e.g. a mock in tests) │
//! │  ┌───────────────────────────┐ ┌─────────────────────────┐ ┌─────────┐  │
//! │  │ Arc<dyn ProductRepository>│ │ Arc<dyn OrderRepository>│ │ Arc<dyn │  │
//! │  │                           │ │                         │ │ UserRep>│  │
//! │  └────────────┬──────────────┘ └────────────┬────────────┘ └────┬────┘  │
//! │        store.products()             store.orders()      store.users()   │
//! │                                                                         │
//! │  The in-memory tables allow many readers at once (catalog browsing)    │
//! │  and one writer at a time (restock, checkout, status change).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use meow_core::{Order, Product, User};
use tracing::info;

use crate::error::{DataError, DataResult};
use crate::repository::{
    MemoryOrderRepository, MemoryProductRepository, MemoryUserRepository, OrderRepository,
    ProductRepository, UserRepository,
};
use crate::seed;

/// Storage handle providing repository access.
///
/// Cloning a `Store` shares the same repositories.
#[derive(Clone)]
pub struct Store {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::empty()
    }
}

impl Store {
    /// A store over the given repositories.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Store {
            products,
            orders,
            users,
        }
    }

    /// A store with no products, orders or users.
    pub fn empty() -> Self {
        Store::new(
            Arc::new(MemoryProductRepository::default()),
            Arc::new(MemoryOrderRepository::default()),
            Arc::new(MemoryUserRepository::default()),
        )
    }

    /// A store loaded with the sample catalog, order history and users.
    pub fn seeded() -> Self {
        let products = seed::products();
        let orders = seed::orders();
        let users = seed::users();
        info!(
            products = products.len(),
            orders = orders.len(),
            users = users.len(),
            "Loaded sample data"
        );

        Store::new(
            Arc::new(MemoryProductRepository::new(products)),
            Arc::new(MemoryOrderRepository::new(orders)),
            Arc::new(MemoryUserRepository::new(users)),
        )
    }

    /// An in-memory store over the given rows.
    ///
    /// ## Errors
    /// `UniqueViolation` if two products share an id or SKU, two orders
    /// share a number, or two users share an id or email.
    pub fn with_data(
        products: Vec<Product>,
        orders: Vec<Order>,
        users: Vec<User>,
    ) -> DataResult<Self> {
        let mut product_ids = HashSet::new();
        if let Some(dup) = products.iter().find(|p| !product_ids.insert(p.id)) {
            return Err(DataError::duplicate("product id", dup.id));
        }

        let mut skus = HashSet::new();
        if let Some(dup) = products.iter().find(|p| !skus.insert(p.sku.to_ascii_uppercase())) {
            return Err(DataError::duplicate("sku", &dup.sku));
        }

        let mut order_ids = HashSet::new();
        if let Some(dup) = orders.iter().find(|o| !order_ids.insert(o.id.as_str())) {
            return Err(DataError::duplicate("order id", &dup.id));
        }

        let mut user_ids = HashSet::new();
        if let Some(dup) = users.iter().find(|u| !user_ids.insert(u.id)) {
            return Err(DataError::duplicate("user id", dup.id));
        }

        let mut emails = HashSet::new();
        if let Some(dup) = users.iter().find(|u| !emails.insert(u.email.to_ascii_lowercase())) {
            return Err(DataError::duplicate("email", &dup.email));
        }

        Ok(Store::new(
            Arc::new(MemoryProductRepository::new(products)),
            Arc::new(MemoryOrderRepository::new(orders)),
            Arc::new(MemoryUserRepository::new(users)),
        ))
    }

    /// Catalog repository.
    pub fn products(&self) -> &dyn ProductRepository {
        self.products.as_ref()
    }

    /// Order repository.
    pub fn orders(&self) -> &dyn OrderRepository {
        self.orders.as_ref()
    }

    /// User repository.
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockOrderRepository;
    use meow_core::{OrderFilter, UserFilter};

    #[test]
    fn test_empty_store() {
        let store = Store::empty();
        assert_eq!(store.products().count().unwrap(), 0);
        assert!(store.orders().list(&OrderFilter::default()).unwrap().is_empty());
        assert_eq!(store.users().count().unwrap(), 0);
    }

    #[test]
    fn test_seeded_store() {
        let store = Store::seeded();
        assert_eq!(store.products().count().unwrap(), 6);
        assert_eq!(store.orders().list(&OrderFilter::default()).unwrap().len(), 4);
        assert_eq!(store.users().list(&UserFilter::default()).unwrap().len(), 4);
    }

    #[test]
    fn test_with_data_rejects_duplicates() {
        let mut products = seed::products();
        products.push(products[0].clone());
        assert!(matches!(
            Store::with_data(products, Vec::new(), Vec::new()),
            Err(DataError::UniqueViolation { .. })
        ));

        let mut products = seed::products();
        let mut copy = products[0].clone();
        copy.id = 7;
        copy.sku = "cam-001".to_string();
        products.push(copy);
        assert!(Store::with_data(products, Vec::new(), Vec::new()).is_err());

        let mut orders = seed::orders();
        orders.push(orders[1].clone());
        assert!(Store::with_data(Vec::new(), orders, Vec::new()).is_err());

        let mut users = seed::users();
        let mut copy = users[0].clone();
        copy.id = 9;
        copy.email = "Maria@Example.com".to_string();
        users.push(copy);
        assert!(Store::with_data(Vec::new(), Vec::new(), users).is_err());
    }

    #[test]
    fn test_clones_share_tables() {
        let store = Store::seeded();
        let clone = store.clone();
        clone.products().set_stock(6, 0).unwrap();
        assert_eq!(store.products().get_by_id(6).unwrap().unwrap().stock, 0);
    }

    #[test]
    fn test_new_accepts_injected_repositories() {
        let mut orders = MockOrderRepository::new();
        orders
            .expect_next_order_number()
            .once()
            .withf(|year| *year == 2030)
            .return_once(|_| Ok("PED-2030-042".to_string()));

        let store = Store::new(
            Arc::new(MemoryProductRepository::new(seed::products())),
            Arc::new(orders),
            Arc::new(MemoryUserRepository::default()),
        );
        assert_eq!(store.orders().next_order_number(2030).unwrap(), "PED-2030-042");
        assert_eq!(store.products().count().unwrap(), 6);
    }
}
