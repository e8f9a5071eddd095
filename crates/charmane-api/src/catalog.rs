//! Product catalog client

use crate::http::{build_client, ensure_success};
use async_trait::async_trait;
use charmane_core::{CharmaneError, Product, Result, StoreConfig};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Source of the product list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product the storefront should display
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Catalog service reached over HTTP
#[derive(Debug, Clone)]
pub struct CatalogClient {
    url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client for the catalog at `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            client: build_client(timeout)?,
        })
    }

    /// Create a client from the storefront configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(config.catalog_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        debug!("Requesting product catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CharmaneError::Catalog(format!("Failed to send request: {}", e)))?;

        let products: Vec<Product> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| CharmaneError::Catalog(format!("Failed to parse response: {}", e)))?;

        info!("Fetched {} products", products.len());
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_catalog_url() {
        let config = StoreConfig {
            catalog_url: "http://localhost:3000/produtos".to_string(),
            ..StoreConfig::default()
        };
        let client = CatalogClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://localhost:3000/produtos");
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_error() {
        // Port 9 (discard) on loopback is not expected to be listening.
        let client = CatalogClient::new("http://127.0.0.1:9/produtos", Duration::from_secs(2)).unwrap();
        let result = client.fetch_products().await;
        assert!(matches!(result, Err(CharmaneError::Catalog(_))));
    }
}
