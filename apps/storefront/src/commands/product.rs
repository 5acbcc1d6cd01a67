//! # Product Commands
//!
//! Commands behind the product grid.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types "gato" and picks "Accesorios"                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products("gato", Some(Accessories))                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_search_query ──► trimmed, ≤ 100 chars                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::search(ProductFilter)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> with display price and stock badge                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use meow_core::validation::validate_search_query;
use meow_core::{Category, Product, ProductFilter, ProductId, StockLevel};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DataState, StoreConfig};

/// Product DTO for the frontend.
///
/// Carries the domain product plus the two values the product card
/// renders but the domain does not store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,
    /// e.g. `"$35.000"`
    pub price_display: String,
    pub stock_level: StockLevel,
}

impl ProductDto {
    pub fn build(product: Product, config: &StoreConfig) -> Self {
        ProductDto {
            price_display: config.format_currency(product.price),
            stock_level: product.stock_level(),
            product,
        }
    }
}

/// Searches the catalog.
///
/// ## Arguments
/// * `query` - Matched against name and description (empty matches all)
/// * `category` - Restrict to one category
pub fn search_products(
    data: &DataState,
    config: &StoreConfig,
    query: &str,
    category: Option<Category>,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let search = validate_search_query(query)?;
    debug!(query = %search, ?category, "search_products command");

    let filter = ProductFilter { search, category };
    let products = data.inner().products().search(&filter)?;

    info!(
        count = products.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Product search completed"
    );

    Ok(products
        .into_iter()
        .map(|p| ProductDto::build(p, config))
        .collect())
}

/// Gets a single product.
pub fn get_product(
    data: &DataState,
    config: &StoreConfig,
    product_id: ProductId,
) -> Result<ProductDto, ApiError> {
    debug!(product_id, "get_product command");

    let product = data
        .inner()
        .products()
        .get_by_id(product_id)?
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(ProductDto::build(product, config))
}
