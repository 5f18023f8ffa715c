//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `AMONEPH_DATA_DIR` - Directory for the cart and wishlist documents
//!   (default: `.amoneph`)
//! - `AMONEPH_WHATSAPP_NUMBER` - Order destination, international format,
//!   digits only (default: the shop's number)
//! - `AMONEPH_FREE_DELIVERY_THRESHOLD` - Subtotal in KSh at which delivery
//!   is free (default: 2000)
//! - `AMONEPH_DELIVERY_FEE` - Flat delivery fee in KSh below the threshold
//!   (default: 200)

use std::path::PathBuf;

use amoneph_core::Price;
use amoneph_store::CheckoutConfig;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".amoneph";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration: where state lives and how checkout behaves.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the persisted cart and wishlist documents.
    pub data_dir: PathBuf,
    /// Checkout rules and destination.
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails validation (malformed
    /// number, non-numeric fee).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir =
            PathBuf::from(get_env_or_default("AMONEPH_DATA_DIR", DEFAULT_DATA_DIR));

        let mut checkout = CheckoutConfig::default();
        if let Some(number) = get_optional_env("AMONEPH_WHATSAPP_NUMBER") {
            validate_whatsapp_number(&number)?;
            checkout.whatsapp_number = number;
        }
        if let Some(threshold) = get_optional_env("AMONEPH_FREE_DELIVERY_THRESHOLD") {
            checkout.free_delivery_threshold = parse_price("AMONEPH_FREE_DELIVERY_THRESHOLD", &threshold)?;
        }
        if let Some(fee) = get_optional_env("AMONEPH_DELIVERY_FEE") {
            checkout.delivery_fee = parse_price("AMONEPH_DELIVERY_FEE", &fee)?;
        }

        Ok(Self { data_dir, checkout })
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_price(key: &str, value: &str) -> Result<Price, ConfigError> {
    value
        .parse::<u64>()
        .map(Price::new)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// A `wa.me` path segment is the number in international format with no
/// punctuation, so accept digits only.
fn validate_whatsapp_number(number: &str) -> Result<(), ConfigError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "AMONEPH_WHATSAPP_NUMBER".to_string(),
            "must be digits only, international format without '+'".to_string(),
        ));
    }
    Ok(())
}
