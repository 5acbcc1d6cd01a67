//! # Config Commands
//!
//! Read-only access to the storefront configuration.

use tracing::debug;

use crate::state::StoreConfig;

/// Gets the storefront configuration.
///
/// ## When Used
/// - Page load (store name, currency formatting)
/// - Cart summary ("Envío gratis desde $150.000")
///
/// Promotion codes are not part of the serialized config.
pub fn get_config(config: &StoreConfig) -> StoreConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hides_promotion_codes() {
        let json = serde_json::to_value(get_config(&StoreConfig::default())).unwrap();
        assert_eq!(json["storeName"], "MeowThreads");
        assert_eq!(json["currencyCode"], "COP");
        assert_eq!(json["shipping"]["fee"], 15_000);
        assert!(json.get("promotions").is_none());
    }
}
