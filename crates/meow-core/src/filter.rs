//! # Catalog, Inventory, Order and User Filters
//!
//! The search boxes and drop-downs of the storefront and back-office pages,
//! as pure predicates over domain types.
//!
//! Matching is case-insensitive substring search. An empty search term
//! matches everything, and so does any `None` drop-down.
//!
//! | Filter            | Search covers                         | Drop-downs                |
//! |-------------------|---------------------------------------|---------------------------|
//! | `ProductFilter`   | name, description                     | category                  |
//! | `InventoryFilter` | name, SKU                             | category, stock level     |
//! | `OrderFilter`     | order id, item names, customer        | status, payment status    |
//! | `UserFilter`      | name, email                           | role, account status      |

use serde::{Deserialize, Serialize};

use crate::session::Role;
use crate::types::{Category, Order, OrderStatus, PaymentStatus, Product, StockLevel};
use crate::user::{User, UserStatus};

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter for the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Matched against name and description.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<Category>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| c == product.category);

        matches_search && matches_category
    }

    /// Products that match, in catalog order.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Filter for the admin inventory table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    /// Matched against name and SKU.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub stock_level: Option<StockLevel>,
}

impl InventoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        (contains(&product.name, &needle) || contains(&product.sku, &needle))
            && self.category.map_or(true, |c| c == product.category)
            && self.stock_level.map_or(true, |l| l == product.stock_level())
    }

    /// Products that match, in catalog order.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Filter for the order history and the payment-orders screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment: Option<PaymentStatus>,
    /// Matched against the order id, every item name, and the customer's
    /// name and email.
    #[serde(default)]
    pub search: String,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.to_lowercase();
        let matches_status = self.status.map_or(true, |s| s == order.status);
        let matches_payment = self.payment.map_or(true, |p| p == order.payment);
        let matches_search = contains(&order.id, &needle)
            || order.items.iter().any(|item| contains(&item.name, &needle))
            || order
                .customer
                .as_ref()
                .is_some_and(|c| contains(&c.name, &needle) || contains(&c.email, &needle));

        matches_status && matches_payment && matches_search
    }

    /// Matching orders, newest first. Orders on the same date keep their
    /// original relative order.
    pub fn apply<'a>(&self, orders: impl IntoIterator<Item = &'a Order>) -> Vec<Order> {
        let mut matched: Vec<Order> = orders
            .into_iter()
            .filter(|o| self.matches(o))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// Filter for the admin user list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    /// Matched against name and email.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.to_lowercase();
        (contains(&user.name, &needle) || contains(&user.email, &needle))
            && self.role.map_or(true, |r| r == user.role)
            && self.status.map_or(true, |s| s == user.status)
    }

    /// Users that match, in id order.
    pub fn apply<'a>(&self, users: impl IntoIterator<Item = &'a User>) -> Vec<User> {
        let mut matched: Vec<User> = users
            .into_iter()
            .filter(|u| self.matches(u))
            .cloned()
            .collect();
        matched.sort_by_key(|u| u.id);
        matched
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Customer, OrderItem};
    use chrono::NaiveDate;

    fn product(id: u32, name: &str, description: &str, category: Category) -> Product {
        Product {
            id,
            sku: format!("SKU-{id:03}"),
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_units(10_000),
            image: String::new(),
            sizes: vec!["M".to_string()],
            stock: 5,
            category,
        }
    }

    fn order(id: &str, date: (i32, u32, u32), status: OrderStatus, items: &[&str]) -> Order {
        Order {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status,
            payment: PaymentStatus::Pendiente,
            customer: None,
            items: items
                .iter()
                .map(|name| OrderItem {
                    product_id: 1,
                    name: name.to_string(),
                    size: "M".to_string(),
                    quantity: 1,
                    unit_price: Money::from_units(10_000),
                    image: String::new(),
                })
                .collect(),
            total: Money::from_units(25_000),
            shipping_address: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Camiseta Gatuna", "Camiseta con estampado de gato", Category::Shirts),
            product(2, "Accesorio Gatuno", "Collar de gato personalizado", Category::Accessories),
            product(3, "Saco Edición Limitada", "Saco exclusivo MeowThreads", Category::LimitedEdition),
        ]
    }

    fn history() -> Vec<Order> {
        vec![
            order("PED-2025-001", (2025, 1, 28), OrderStatus::Enviado, &["Camiseta Gatuna"]),
            order("PED-2025-002", (2025, 1, 30), OrderStatus::Pendiente, &["Accesorio Gatuno"]),
            order("PED-2025-003", (2025, 2, 1), OrderStatus::Entregado, &["Zapatos Edición Limitada"]),
            order("PED-2025-004", (2025, 1, 25), OrderStatus::Cancelado, &["Camiseta Gatuna"]),
        ]
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> String) -> Vec<String> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_empty_product_filter_matches_all() {
        let products = catalog();
        assert_eq!(ProductFilter::default().apply(&products).len(), 3);
    }

    #[test]
    fn test_product_search_is_case_insensitive_over_name_and_description() {
        let products = catalog();

        let filter = ProductFilter {
            search: "GATO".to_string(),
            category: None,
        };
        // "Gatuna"/"Gatuno" don't contain "gato", but both descriptions do
        assert_eq!(
            ids(&filter.apply(&products), |p| p.id.to_string()),
            vec!["1", "2"]
        );

        let filter = ProductFilter {
            search: "meowthreads".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter.apply(&products), |p| p.id.to_string()), vec!["3"]);
    }

    #[test]
    fn test_product_category_filter() {
        let products = catalog();
        let filter = ProductFilter {
            search: String::new(),
            category: Some(Category::Accessories),
        };
        assert_eq!(ids(&filter.apply(&products), |p| p.id.to_string()), vec!["2"]);

        let filter = ProductFilter {
            search: "saco".to_string(),
            category: Some(Category::Shirts),
        };
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn test_orders_sorted_newest_first() {
        let orders = history();
        assert_eq!(
            ids(&OrderFilter::default().apply(&orders), |o| o.id.clone()),
            vec!["PED-2025-003", "PED-2025-002", "PED-2025-001", "PED-2025-004"]
        );
    }

    #[test]
    fn test_order_status_filter() {
        let orders = history();
        let filter = OrderFilter {
            status: Some(OrderStatus::Pendiente),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-002"]);
    }

    #[test]
    fn test_order_search_by_id_or_item_name() {
        let orders = history();

        let filter = OrderFilter {
            search: "ped-2025-004".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-004"]);

        let filter = OrderFilter {
            search: "camiseta".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter.apply(&orders), |o| o.id.clone()),
            vec!["PED-2025-001", "PED-2025-004"]
        );

        let filter = OrderFilter {
            status: Some(OrderStatus::Cancelado),
            search: "camiseta".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-004"]);
    }

    #[test]
    fn test_order_search_by_customer_and_payment() {
        let mut orders = history();
        orders[0].payment = PaymentStatus::Pagado;
        orders[1].customer = Some(Customer {
            user_id: 3,
            name: "Ana Martínez".to_string(),
            email: "ana@example.com".to_string(),
        });

        let filter = OrderFilter {
            search: "MARTÍNEZ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-002"]);

        let filter = OrderFilter {
            search: "ana@example".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-002"]);

        let filter = OrderFilter {
            payment: Some(PaymentStatus::Pagado),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&orders), |o| o.id.clone()), vec!["PED-2025-001"]);

        let filter = OrderFilter {
            payment: Some(PaymentStatus::Fallido),
            ..Default::default()
        };
        assert!(filter.apply(&orders).is_empty());
    }

    #[test]
    fn test_inventory_filter() {
        let mut products = catalog();
        products[2].stock = 0;

        let filter = InventoryFilter {
            search: "sku-002".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products), |p| p.id.to_string()), vec!["2"]);

        // searches the name but not the description
        let filter = InventoryFilter {
            search: "meowthreads".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&products).is_empty());

        let filter = InventoryFilter {
            stock_level: Some(StockLevel::OutOfStock),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products), |p| p.id.to_string()), vec!["3"]);

        let filter = InventoryFilter {
            search: "gatun".to_string(),
            category: Some(Category::Shirts),
            stock_level: Some(StockLevel::Low),
        };
        assert_eq!(ids(&filter.apply(&products), |p| p.id.to_string()), vec!["1"]);
    }

    fn user(id: u32, name: &str, email: &str, role: Role, status: UserStatus) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn test_user_filter() {
        let users = vec![
            user(4, "Pedro Inactivo", "pedro@example.com", Role::Customer, UserStatus::Inactive),
            user(1, "María González", "maria@example.com", Role::Customer, UserStatus::Active),
            user(2, "Andres Pulecio", "andres@meowthreads.com", Role::Admin, UserStatus::Active),
        ];

        assert_eq!(
            ids(&UserFilter::default().apply(&users), |u| u.id.to_string()),
            vec!["1", "2", "4"]
        );

        let filter = UserFilter {
            search: "EXAMPLE.COM".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&users), |u| u.id.to_string()), vec!["1", "4"]);

        let filter = UserFilter {
            search: "pulecio".to_string(),
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&users), |u| u.id.to_string()), vec!["2"]);

        let filter = UserFilter {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&users), |u| u.id.to_string()), vec!["4"]);
    }
}
