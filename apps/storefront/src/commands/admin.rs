//! # Admin Commands
//!
//! Back-office commands. Every command here checks the caller's session
//! before touching the store.
//!
//! ```text
//! Session ──► require_admin(action)
//!                 │
//!                 ├── guest / customer → FORBIDDEN
//!                 └── admin ──► inventory_report, list_inventory,
//!                               restock_product, update_order_status,
//!                               list_payment_orders, update_payment_status
//! ```
//!
//! User accounts are managed in [`super::users`].

use meow_core::validation::validate_search_query;
use meow_core::{
    Category, InventoryFilter, Order, OrderFilter, OrderStatus, PaymentStatus, Product, ProductId,
    Session, StockLevel,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DataState;

/// One row of the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: Category,
    pub stock: i64,
    pub stock_level: StockLevel,
}

impl From<Product> for InventoryLine {
    fn from(p: Product) -> Self {
        InventoryLine {
            stock_level: p.stock_level(),
            id: p.id,
            sku: p.sku,
            name: p.name,
            category: p.category,
            stock: p.stock,
        }
    }
}

/// Stock overview for the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub total_products: usize,
    /// Products with some stock left, but at or below the low-stock threshold
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub items: Vec<InventoryLine>,
}

/// Builds the inventory report.
pub fn inventory_report(data: &DataState, session: &Session) -> Result<InventoryReport, ApiError> {
    let admin = session.require_admin("view inventory")?;
    debug!(user = %admin.user_id, "inventory_report command");

    let items: Vec<InventoryLine> = data
        .inner()
        .products()
        .list()?
        .into_iter()
        .map(InventoryLine::from)
        .collect();

    let count = |level: StockLevel| items.iter().filter(|i| i.stock_level == level).count();

    Ok(InventoryReport {
        total_products: items.len(),
        low_stock: count(StockLevel::Low),
        out_of_stock: count(StockLevel::OutOfStock),
        items,
    })
}

/// Inventory rows matching the search box and drop-downs.
///
/// ## Arguments
/// * `filter.search` - Matched against name and SKU, trimmed
/// * `filter.category`, `filter.stock_level` - `None` means all
pub fn list_inventory(
    data: &DataState,
    session: &Session,
    filter: &InventoryFilter,
) -> Result<Vec<InventoryLine>, ApiError> {
    let admin = session.require_admin("view inventory")?;
    let filter = InventoryFilter {
        search: validate_search_query(&filter.search)?,
        ..filter.clone()
    };
    debug!(user = %admin.user_id, ?filter, "list_inventory command");

    let products = data.inner().products().search_inventory(&filter)?;
    Ok(products.into_iter().map(InventoryLine::from).collect())
}

/// Sets a product's units in stock.
pub fn restock_product(
    data: &DataState,
    session: &Session,
    product_id: ProductId,
    stock: i64,
) -> Result<InventoryLine, ApiError> {
    let admin = session.require_admin("restock products")?;
    debug!(user = %admin.user_id, product_id, stock, "restock_product command");

    let product = data.inner().products().set_stock(product_id, stock)?;
    Ok(InventoryLine::from(product))
}

/// Moves an order to a new status.
pub fn update_order_status(
    data: &DataState,
    session: &Session,
    order_id: &str,
    status: OrderStatus,
) -> Result<Order, ApiError> {
    let admin = session.require_admin("update order status")?;
    debug!(user = %admin.user_id, order_id, ?status, "update_order_status command");

    let order = data.inner().orders().update_status(order_id, status)?;
    info!(order = %order.id, by = %admin.user_id, "Order status changed from back office");
    Ok(order)
}

/// Orders for the payment-orders screen, newest first.
///
/// ## Arguments
/// * `filter.search` - Matched against the order id, item names, and the
///   customer's name and email
/// * `filter.status`, `filter.payment` - `None` means all
pub fn list_payment_orders(
    data: &DataState,
    session: &Session,
    filter: &OrderFilter,
) -> Result<Vec<Order>, ApiError> {
    let admin = session.require_admin("view payment orders")?;
    let filter = OrderFilter {
        search: validate_search_query(&filter.search)?,
        ..filter.clone()
    };
    debug!(user = %admin.user_id, ?filter, "list_payment_orders command");

    Ok(data.inner().orders().list(&filter)?)
}

/// Records the outcome of an order's payment.
pub fn update_payment_status(
    data: &DataState,
    session: &Session,
    order_id: &str,
    payment: PaymentStatus,
) -> Result<Order, ApiError> {
    let admin = session.require_admin("update payment status")?;
    debug!(user = %admin.user_id, order_id, ?payment, "update_payment_status command");

    let order = data.inner().orders().update_payment(order_id, payment)?;
    info!(order = %order.id, by = %admin.user_id, ?payment, "Payment status changed from back office");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use meow_core::{Identity, Role};
    use meow_data::Store;

    fn session(role: Role) -> Session {
        Session::signed_in(Identity {
            user_id: 2,
            display_name: "Michi".to_string(),
            email: format!("{}@meowthreads.com", role.as_str()),
            role,
        })
    }

    #[test]
    fn test_inventory_report() {
        let data = DataState::new(Store::seeded());
        let report = inventory_report(&data, &session(Role::Admin)).unwrap();

        assert_eq!(report.total_products, 6);
        assert_eq!(report.low_stock, 1);
        assert_eq!(report.out_of_stock, 0);
        assert_eq!(report.items[2].id, 3);
        assert_eq!(report.items[2].sku, "SAC-001");
        assert_eq!(report.items[2].stock_level, StockLevel::Low);
    }

    #[test]
    fn test_list_inventory_filters() {
        let data = DataState::new(Store::seeded());
        let admin = session(Role::Admin);

        let filter = InventoryFilter {
            search: "  acc-001 ".to_string(),
            ..Default::default()
        };
        let lines = list_inventory(&data, &admin, &filter).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Accesorio Gatuno");

        let filter = InventoryFilter {
            category: Some(Category::LimitedEdition),
            stock_level: Some(StockLevel::InStock),
            ..Default::default()
        };
        let ids: Vec<_> = list_inventory(&data, &admin, &filter)
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![4, 5, 6]);

        let filter = InventoryFilter {
            search: "x".repeat(101),
            ..Default::default()
        };
        assert_eq!(
            list_inventory(&data, &admin, &filter).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_list_payment_orders() {
        let data = DataState::new(Store::seeded());
        let admin = session(Role::Admin);
        let ids = |orders: Vec<Order>| orders.into_iter().map(|o| o.id).collect::<Vec<_>>();

        let all = list_payment_orders(&data, &admin, &OrderFilter::default()).unwrap();
        assert_eq!(all.len(), 4);

        let filter = OrderFilter {
            payment: Some(PaymentStatus::Fallido),
            ..Default::default()
        };
        assert_eq!(ids(list_payment_orders(&data, &admin, &filter).unwrap()), vec!["PED-2025-004"]);

        let filter = OrderFilter {
            search: "ana@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(list_payment_orders(&data, &admin, &filter).unwrap()), vec!["PED-2025-002"]);

        let filter = OrderFilter {
            status: Some(OrderStatus::Enviado),
            payment: Some(PaymentStatus::Pagado),
            search: "gonzález".to_string(),
        };
        assert_eq!(ids(list_payment_orders(&data, &admin, &filter).unwrap()), vec!["PED-2025-001"]);
    }

    #[test]
    fn test_update_payment_status() {
        let data = DataState::new(Store::seeded());
        let admin = session(Role::Admin);

        let order = update_payment_status(&data, &admin, "PED-2025-002", PaymentStatus::Pagado).unwrap();
        assert_eq!(order.payment, PaymentStatus::Pagado);
        assert_eq!(order.status, OrderStatus::Pendiente);

        let err = update_payment_status(&data, &admin, "PED-2025-999", PaymentStatus::Pagado)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_restock_product() {
        let data = DataState::new(Store::seeded());
        let admin = session(Role::Admin);

        let line = restock_product(&data, &admin, 3, 0).unwrap();
        assert_eq!(line.stock_level, StockLevel::OutOfStock);
        assert_eq!(inventory_report(&data, &admin).unwrap().out_of_stock, 1);

        let err = restock_product(&data, &admin, 3, -2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = restock_product(&data, &admin, 99, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_update_order_status() {
        let data = DataState::new(Store::seeded());
        let order =
            update_order_status(&data, &session(Role::Admin), "PED-2025-003", OrderStatus::Enviado)
                .unwrap();
        assert_eq!(order.status, OrderStatus::Enviado);

        let err = update_order_status(
            &data,
            &session(Role::Admin),
            "PED-2025-999",
            OrderStatus::Enviado,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_non_admin_sessions_are_forbidden() {
        let data = DataState::new(Store::seeded());

        for s in [Session::guest(), session(Role::Customer)] {
            assert_eq!(
                inventory_report(&data, &s).unwrap_err().code,
                ErrorCode::Forbidden
            );
            assert_eq!(
                restock_product(&data, &s, 1, 50).unwrap_err().code,
                ErrorCode::Forbidden
            );
            assert_eq!(
                update_order_status(&data, &s, "PED-2025-003", OrderStatus::Cancelado)
                    .unwrap_err()
                    .code,
                ErrorCode::Forbidden
            );
            assert_eq!(
                list_inventory(&data, &s, &InventoryFilter::default()).unwrap_err().code,
                ErrorCode::Forbidden
            );
            assert_eq!(
                list_payment_orders(&data, &s, &OrderFilter::default()).unwrap_err().code,
                ErrorCode::Forbidden
            );
            assert_eq!(
                update_payment_status(&data, &s, "PED-2025-002", PaymentStatus::Fallido)
                    .unwrap_err()
                    .code,
                ErrorCode::Forbidden
            );
        }

        assert_eq!(data.inner().products().get_by_id(1).unwrap().unwrap().stock, 15);
    }
}
