//! # Order Repository
//!
//! Order history and order placement.
//!
//! ## Order Numbers
//! ```text
//! PED-2025-001, PED-2025-002, ... PED-2025-004
//!                                      │
//!              create(2025, ...) ──────┴──► PED-2025-005
//!
//!              create(2026, ...) ─────────► PED-2026-001
//! ```
//! Numbering and insertion happen under one write lock, so two checkouts
//! can never receive the same number. Once a year's sequence reaches
//! `u32::MAX`, `create` fails with `UniqueViolation`.

use std::sync::{Arc, RwLock};

use chrono::{Datelike, NaiveDate};
use meow_core::{Customer, Money, Order, OrderFilter, OrderItem, OrderStatus, PaymentStatus};
use tracing::{debug, info};

use super::OrderRepository;
use crate::error::{DataError, DataResult};

/// An order about to be placed. The repository assigns its number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub date: NaiveDate,
    /// `None` for guest checkouts
    pub customer: Option<Customer>,
    pub items: Vec<OrderItem>,
    pub total: Money,
    pub shipping_address: String,
}

/// Order repository over a shared in-memory table.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderRepository {
    table: Arc<RwLock<Vec<Order>>>,
}

impl MemoryOrderRepository {
    /// Creates a repository over `orders`.
    pub fn new(orders: Vec<Order>) -> Self {
        MemoryOrderRepository {
            table: Arc::new(RwLock::new(orders)),
        }
    }

    fn update(&self, id: &str, change: impl FnOnce(&mut Order)) -> DataResult<Order> {
        let mut table = self.table.write()?;
        let order = table
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| DataError::not_found("Order", id))?;
        change(order);
        Ok(order.clone())
    }
}

impl OrderRepository for MemoryOrderRepository {
    fn list(&self, filter: &OrderFilter) -> DataResult<Vec<Order>> {
        debug!(
            status = ?filter.status,
            payment = ?filter.payment,
            search = %filter.search,
            "Listing orders"
        );
        Ok(filter.apply(self.table.read()?.iter()))
    }

    fn get_by_id(&self, id: &str) -> DataResult<Option<Order>> {
        Ok(self.table.read()?.iter().find(|o| o.id == id).cloned())
    }

    fn next_order_number(&self, year: i32) -> DataResult<String> {
        next_number(&self.table.read()?, year)
    }

    fn insert(&self, order: Order) -> DataResult<()> {
        let mut table = self.table.write()?;
        if table.iter().any(|o| o.id == order.id) {
            return Err(DataError::duplicate("order id", &order.id));
        }
        table.push(order);
        Ok(())
    }

    fn create(&self, new_order: NewOrder) -> DataResult<Order> {
        let mut table = self.table.write()?;

        let order = Order {
            id: next_number(&table, new_order.date.year())?,
            date: new_order.date,
            status: OrderStatus::Pendiente,
            payment: PaymentStatus::Pendiente,
            customer: new_order.customer,
            items: new_order.items,
            total: new_order.total,
            shipping_address: new_order.shipping_address,
        };

        info!(id = %order.id, total = %order.total, "Order placed");
        table.push(order.clone());
        Ok(order)
    }

    fn update_status(&self, id: &str, status: OrderStatus) -> DataResult<Order> {
        self.update(id, |order| {
            info!(id, from = ?order.status, to = ?status, "Order status updated");
            order.status = status;
        })
    }

    fn update_payment(&self, id: &str, payment: PaymentStatus) -> DataResult<Order> {
        self.update(id, |order| {
            info!(id, from = ?order.payment, to = ?payment, "Order payment updated");
            order.payment = payment;
        })
    }
}

/// Highest sequence used in `year`, plus one.
fn next_number(orders: &[Order], year: i32) -> DataResult<String> {
    let prefix = format!("PED-{}-", year);
    let last = orders
        .iter()
        .filter_map(|o| o.id.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    let seq = last
        .checked_add(1)
        .ok_or_else(|| DataError::duplicate("order number", Order::number_for(year, last)))?;
    Ok(Order::number_for(year, seq))
}
