//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VELO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};
use velo_core::{ShopInfo, DEFAULT_GST_RATE_BPS};

/// Application configuration.
///
/// Most fields have sensible defaults for development. A shop deploys
/// with its own identity via `VELO_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shop name (displayed in the window and on invoices)
    pub shop_name: String,

    /// Shop address (single line, for invoices)
    pub shop_address: String,

    /// Shop phone number (for invoices)
    pub shop_phone: String,

    /// GST registration number; empty when unregistered
    pub gstin: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Default GST rate in basis points, e.g. 500 = 5%.
    /// Individual orders may override and always snapshot their rate.
    pub default_gst_rate_bps: u32,

    /// Stock level at or below which a product counts as low stock
    pub low_stock_threshold: i64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Shop: "Velo Cycles"
    /// - Currency: INR (Rs)
    /// - GST: 5%
    fn default() -> Self {
        ConfigState {
            shop_name: "Velo Cycles".to_string(),
            shop_address: "14 MG Road, Pune 411001".to_string(),
            shop_phone: "+91 20 2612 3456".to_string(),
            gstin: String::new(),
            currency_code: "INR".to_string(),
            currency_symbol: "Rs".to_string(),
            default_gst_rate_bps: DEFAULT_GST_RATE_BPS,
            low_stock_threshold: 5,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VELO_SHOP_NAME`: Override shop name
    /// - `VELO_SHOP_ADDRESS`: Override shop address
    /// - `VELO_SHOP_PHONE`: Override shop phone
    /// - `VELO_GSTIN`: Override GST registration number
    /// - `VELO_GST_RATE`: Override default GST rate as a percentage (e.g. "5")
    /// - `VELO_LOW_STOCK_THRESHOLD`: Override low stock threshold
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(name) = std::env::var("VELO_SHOP_NAME") {
            config.shop_name = name;
        }

        if let Ok(address) = std::env::var("VELO_SHOP_ADDRESS") {
            config.shop_address = address;
        }

        if let Ok(phone) = std::env::var("VELO_SHOP_PHONE") {
            config.shop_phone = phone;
        }

        if let Ok(gstin) = std::env::var("VELO_GSTIN") {
            config.gstin = gstin;
        }

        if let Ok(rate_str) = std::env::var("VELO_GST_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.default_gst_rate_bps = (rate * 100.0).round() as u32;
            }
        }

        if let Ok(threshold_str) = std::env::var("VELO_LOW_STOCK_THRESHOLD") {
            if let Ok(threshold) = threshold_str.parse::<i64>() {
                config.low_stock_threshold = threshold;
            }
        }

        config
    }

    /// Builds the shop identity block used on invoices.
    pub fn shop_info(&self) -> ShopInfo {
        ShopInfo {
            name: self.shop_name.clone(),
            address: self.shop_address.clone(),
            phone: self.shop_phone.clone(),
            gstin: self.gstin.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(123456), "Rs 1234.56");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        format!(
            "{}{} {}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            whole,
            frac
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.default_gst_rate_bps, 500);
        assert_eq!(config.currency_code, "INR");
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(123456), "Rs 1234.56");
        assert_eq!(config.format_currency(100), "Rs 1.00");
        assert_eq!(config.format_currency(1), "Rs 0.01");
        assert_eq!(config.format_currency(0), "Rs 0.00");
        assert_eq!(config.format_currency(-950), "-Rs 9.50");
    }

    #[test]
    fn test_shop_info_carries_identity() {
        let config = ConfigState::default();
        let info = config.shop_info();
        assert_eq!(info.name, "Velo Cycles");
        assert_eq!(info.currency_symbol, "Rs");
    }
}
