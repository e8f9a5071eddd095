//! Configuration management for the storefront
//!
//! Remote endpoints, local storage location and display settings. Loaded from
//! `charmane.toml`; every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{CharmaneError, Result};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "charmane.toml";

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Product catalog endpoint (GET)
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Payment endpoint (POST)
    #[serde(default = "default_payment_url")]
    pub payment_url: String,

    /// File backing the local key-value storage
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Description sent with every checkout
    #[serde(default = "default_checkout_description")]
    pub checkout_description: String,

    /// Prefix for every displayed price
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Image used for products that have none
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Timeout applied to each remote request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

// Default value providers
fn default_catalog_url() -> String {
    "https://charmane-backend.onrender.com/produtos".to_string()
}

fn default_payment_url() -> String {
    "https://charmane-backend.onrender.com/api/pagamento".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".charmane/storage.json")
}

fn default_checkout_description() -> String {
    "Compra em CHARMANE VÊTEMENTS".to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_placeholder_image() -> String {
    "https://via.placeholder.com/300x300".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl StoreConfig {
    /// Load configuration from `path`, or defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CharmaneError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Write default configuration to `dir/charmane.toml`
    pub fn write_default(dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| CharmaneError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            payment_url: default_payment_url(),
            storage_path: default_storage_path(),
            checkout_description: default_checkout_description(),
            currency_symbol: default_currency_symbol(),
            placeholder_image: default_placeholder_image(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::load_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.currency_symbol, "R$");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = StoreConfig::from_toml(r#"catalog_url = "http://localhost:3000/produtos""#)
            .unwrap();
        assert_eq!(config.catalog_url, "http://localhost:3000/produtos");
        assert_eq!(config.payment_url, default_payment_url());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = StoreConfig::from_toml("catalog_url = [").unwrap_err();
        assert!(matches!(err, CharmaneError::Config(_)));
    }

    #[test]
    fn test_write_default_round_trips() {
        let dir = tempdir().unwrap();
        let path = StoreConfig::write_default(dir.path()).unwrap();
        let loaded = StoreConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded, StoreConfig::default());
    }
}
