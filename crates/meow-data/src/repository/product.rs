//! # Product Repository
//!
//! In-memory catalog.
//!
//! ## Key Operations
//! - Filtered search (name/description + category)
//! - Inventory search (name/SKU + category + stock level)
//! - Lookup by id
//! - Inventory updates from the back office
//! - Taking stock at checkout, and putting it back if the order is not stored

use std::sync::{Arc, RwLock};

use meow_core::validation::validate_stock;
use meow_core::{InventoryFilter, Product, ProductFilter, ProductId};
use tracing::{debug, info, warn};

use super::ProductRepository;
use crate::error::{DataError, DataResult};

/// Catalog repository over a shared in-memory table.
///
/// ## Usage
/// ```rust
/// use meow_core::{Category, ProductFilter};
/// use meow_data::Store;
///
/// let store = Store::seeded();
/// let filter = ProductFilter {
///     search: String::new(),
///     category: Some(Category::Accessories),
/// };
/// let accessories = store.products().search(&filter).unwrap();
/// assert_eq!(accessories.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProductRepository {
    table: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductRepository {
    /// Creates a repository over `products`.
    pub fn new(products: Vec<Product>) -> Self {
        MemoryProductRepository {
            table: Arc::new(RwLock::new(products)),
        }
    }
}

/// Sums quantities per product, keeping first-seen order.
fn group_lines(lines: &[(ProductId, i64)]) -> Vec<(ProductId, i64)> {
    let mut grouped: Vec<(ProductId, i64)> = Vec::new();
    for &(id, qty) in lines {
        match grouped.iter_mut().find(|(g, _)| *g == id) {
            Some((_, total)) => *total = total.saturating_add(qty),
            None => grouped.push((id, qty)),
        }
    }
    grouped
}

impl ProductRepository for MemoryProductRepository {
    fn list(&self) -> DataResult<Vec<Product>> {
        Ok(self.table.read()?.clone())
    }

    fn search(&self, filter: &ProductFilter) -> DataResult<Vec<Product>> {
        debug!(search = %filter.search, category = ?filter.category, "Searching products");

        let products = filter.apply(self.table.read()?.iter());

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    fn search_inventory(&self, filter: &InventoryFilter) -> DataResult<Vec<Product>> {
        debug!(
            search = %filter.search,
            category = ?filter.category,
            stock_level = ?filter.stock_level,
            "Searching inventory"
        );
        Ok(filter.apply(self.table.read()?.iter()))
    }

    fn get_by_id(&self, id: ProductId) -> DataResult<Option<Product>> {
        Ok(self.table.read()?.iter().find(|p| p.id == id).cloned())
    }

    fn insert(&self, product: Product) -> DataResult<()> {
        let mut table = self.table.write()?;
        if table.iter().any(|p| p.id == product.id) {
            return Err(DataError::duplicate("product id", product.id));
        }
        if table.iter().any(|p| p.sku.eq_ignore_ascii_case(&product.sku)) {
            return Err(DataError::duplicate("sku", &product.sku));
        }

        debug!(id = product.id, name = %product.name, "Inserting product");
        table.push(product);
        Ok(())
    }

    /// Cart lines already holding the product keep their own stock limit
    /// until the product is added again.
    fn set_stock(&self, id: ProductId, stock: i64) -> DataResult<Product> {
        validate_stock(stock)?;

        let mut table = self.table.write()?;
        let product = table
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DataError::not_found("Product", id))?;

        info!(id, from = product.stock, to = stock, "Stock updated");
        product.stock = stock;
        Ok(product.clone())
    }

    /// Quantities for the same product are summed before checking. If any
    /// product is unknown or short, no stock changes.
    fn take_stock(&self, lines: &[(ProductId, i64)]) -> DataResult<()> {
        let wanted = group_lines(lines);

        let mut table = self.table.write()?;
        for &(id, qty) in &wanted {
            let product = table
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| DataError::not_found("Product", id))?;
            if qty > product.stock {
                return Err(DataError::OutOfStock {
                    id,
                    available: product.stock,
                    requested: qty,
                });
            }
        }

        for product in table.iter_mut() {
            if let Some((_, qty)) = wanted.iter().find(|(id, _)| *id == product.id) {
                product.stock -= qty;
            }
        }

        debug!(products = wanted.len(), "Stock taken");
        Ok(())
    }

    /// Products deleted since the stock was taken are skipped with a warning.
    fn return_stock(&self, lines: &[(ProductId, i64)]) -> DataResult<()> {
        let returned = group_lines(lines);

        let mut table = self.table.write()?;
        for &(id, qty) in &returned {
            match table.iter_mut().find(|p| p.id == id) {
                Some(product) => product.stock = product.stock.saturating_add(qty),
                None => warn!(id, qty, "Cannot return stock to a missing product"),
            }
        }

        info!(products = returned.len(), "Stock returned");
        Ok(())
    }

    fn count(&self) -> DataResult<usize> {
        Ok(self.table.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use meow_core::{Category, StockLevel};

    fn repo() -> MemoryProductRepository {
        MemoryProductRepository::new(seed::products())
    }

    #[test]
    fn test_list_and_count() {
        let repo = repo();
        assert_eq!(repo.list().unwrap().len(), 6);
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn test_get_by_id() {
        let repo = repo();
        assert_eq!(repo.get_by_id(3).unwrap().unwrap().name, "Saco Edición Limitada");
        assert!(repo.get_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_search_by_text_and_category() {
        let repo = repo();

        let filter = ProductFilter {
            search: "edición".to_string(),
            category: None,
        };
        assert_eq!(repo.search(&filter).unwrap().len(), 4);

        let filter = ProductFilter {
            search: "zapatos".to_string(),
            category: Some(Category::LimitedEdition),
        };
        let found = repo.search(&filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 6);
    }

    #[test]
    fn test_set_stock() {
        let repo = repo();
        let updated = repo.set_stock(2, 0).unwrap();
        assert_eq!(updated.stock_level(), StockLevel::OutOfStock);
        assert_eq!(repo.get_by_id(2).unwrap().unwrap().stock, 0);
    }

    #[test]
    fn test_set_stock_rejects_negative_and_unknown() {
        let repo = repo();
        assert!(matches!(repo.set_stock(2, -1), Err(DataError::Invalid(_))));
        assert!(matches!(repo.set_stock(42, 5), Err(DataError::NotFound { .. })));
        assert_eq!(repo.get_by_id(2).unwrap().unwrap().stock, 8);
    }

    #[test]
    fn test_take_stock_is_all_or_nothing() {
        let repo = repo();

        // product 3 has 3 units; two lines for it add up to 4
        let err = repo.take_stock(&[(1, 2), (3, 2), (3, 2)]).unwrap_err();
        assert!(matches!(
            err,
            DataError::OutOfStock {
                id: 3,
                available: 3,
                requested: 4
            }
        ));
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().stock, 15);

        assert!(matches!(
            repo.take_stock(&[(1, 1), (77, 1)]),
            Err(DataError::NotFound { .. })
        ));
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().stock, 15);

        repo.take_stock(&[(1, 2), (3, 3)]).unwrap();
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().stock, 13);
        assert_eq!(
            repo.get_by_id(3).unwrap().unwrap().stock_level(),
            StockLevel::OutOfStock
        );
    }

    #[test]
    fn test_return_stock_undoes_take_stock() {
        let repo = repo();
        let lines = [(1, 2), (3, 1), (3, 2)];

        repo.take_stock(&lines).unwrap();
        assert_eq!(repo.get_by_id(3).unwrap().unwrap().stock, 0);

        repo.return_stock(&lines).unwrap();
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().stock, 15);
        assert_eq!(repo.get_by_id(3).unwrap().unwrap().stock, 3);

        // unknown products are skipped
        repo.return_stock(&[(77, 1), (2, 1)]).unwrap();
        assert_eq!(repo.get_by_id(2).unwrap().unwrap().stock, 9);
    }

    #[test]
    fn test_search_inventory_by_sku_and_level() {
        let repo = repo();

        let filter = InventoryFilter {
            search: "zap".to_string(),
            ..Default::default()
        };
        let found = repo.search_inventory(&filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sku, "ZAP-001");

        let filter = InventoryFilter {
            stock_level: Some(StockLevel::Low),
            ..Default::default()
        };
        let found = repo.search_inventory(&filter).unwrap();
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_insert_duplicate_id_or_sku() {
        let repo = repo();
        let mut product = repo.get_by_id(1).unwrap().unwrap();
        assert!(matches!(
            repo.insert(product.clone()),
            Err(DataError::UniqueViolation { .. })
        ));

        product.id = 7;
        assert!(matches!(
            repo.insert(product.clone()),
            Err(DataError::UniqueViolation { .. })
        ));

        product.sku = "CAM-002".to_string();
        repo.insert(product).unwrap();
        assert_eq!(repo.count().unwrap(), 7);
    }

    #[test]
    fn test_clones_share_table() {
        let repo = repo();
        let other = repo.clone();
        other.set_stock(1, 4).unwrap();
        assert_eq!(repo.get_by_id(1).unwrap().unwrap().stock_level(), StockLevel::Low);
    }
}
