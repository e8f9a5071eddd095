//! Payment service client

use crate::http::{build_client, ensure_success};
use crate::types::{PaymentRequest, PaymentResponse};
use async_trait::async_trait;
use charmane_core::{CharmaneError, Result, StoreConfig};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Remote service that turns a purchase into a hosted checkout page
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment and return the URL the shopper must be sent to
    async fn create_payment(&self, description: &str, amount: f64) -> Result<String>;
}

/// Payment service reached over HTTP
#[derive(Debug, Clone)]
pub struct PaymentClient {
    url: String,
    client: reqwest::Client,
}

impl PaymentClient {
    /// Create a client for the payment endpoint at `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            client: build_client(timeout)?,
        })
    }

    /// Create a client from the storefront configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(config.payment_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PaymentGateway for PaymentClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn create_payment(&self, description: &str, amount: f64) -> Result<String> {
        let request = PaymentRequest {
            description: description.to_string(),
            amount,
        };

        debug!("Requesting payment session");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CharmaneError::Payment(format!("Failed to send request: {}", e)))?;

        let body: PaymentResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| CharmaneError::Payment(format!("Failed to parse response: {}", e)))?;

        if body.url.trim().is_empty() {
            return Err(CharmaneError::Payment(
                "Payment response has an empty url".to_string(),
            ));
        }

        info!("Payment session created");
        Ok(body.url)
    }
}
