//! # Store Configuration
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEOW_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use meow_core::money::group_thousands;
use meow_core::{Money, PromotionRegistry, ShippingPolicy};
use serde::Serialize;
use tracing::warn;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown in the header and on order confirmations
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places the frontend should render. Pesos have none.
    pub currency_decimals: u8,

    /// Digit group separator, `.` for Colombian pesos
    pub thousands_separator: char,

    /// Free-shipping threshold and flat fee used for every cart total
    pub shipping: ShippingPolicy,

    /// Redeemable promotion codes. Never sent to the frontend.
    #[serde(skip)]
    pub promotions: PromotionRegistry,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "MeowThreads"
    /// - Currency: COP ($, no decimals, `.` separator)
    /// - Shipping: free above $150.000, else $15.000
    /// - Codes: MEOW10, GATO15, PRIMERACOMPRA
    fn default() -> Self {
        StoreConfig {
            store_name: "MeowThreads".to_string(),
            currency_code: "COP".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
            thousands_separator: '.',
            shipping: ShippingPolicy::STANDARD,
            promotions: PromotionRegistry::standard(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MEOW_STORE_NAME`: Override store name
    /// - `MEOW_FREE_SHIPPING_OVER`: Free-shipping threshold in pesos
    /// - `MEOW_SHIPPING_FEE`: Flat shipping fee in pesos
    pub fn from_env() -> Self {
        StoreConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("MEOW_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(amount) = parse_amount(&lookup, "MEOW_FREE_SHIPPING_OVER") {
            config.shipping.free_over = amount;
        }

        if let Some(amount) = parse_amount(&lookup, "MEOW_SHIPPING_FEE") {
            config.shipping.fee = amount;
        }

        config
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use meow_core::Money;
    /// use meow_storefront_lib::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_units(305_000)), "$305.000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            group_thousands(amount.units().unsigned_abs(), self.thousands_separator)
        )
    }
}

/// Reads a non-negative whole-peso amount. Invalid values are logged and
/// ignored.
fn parse_amount(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Money> {
    let raw = lookup(key)?;
    match raw.trim().parse::<i64>() {
        Ok(units) if units >= 0 => Some(Money::from_units(units)),
        _ => {
            warn!(key, value = %raw, "Ignoring invalid amount");
            None
        }
    }
}
