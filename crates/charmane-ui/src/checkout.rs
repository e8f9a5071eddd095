//! Checkout initiator
//!
//! Hands the purchase to the payment service and sends the shopper to the
//! hosted checkout page. A failure never navigates.

use crate::page::Page;
use charmane_api::PaymentGateway;
use charmane_core::{CheckoutSession, Result};
use tracing::{error, info};

/// Alert shown when the payment service cannot start a checkout
pub const PAYMENT_FAILED: &str = "Não foi possível iniciar o pagamento. Tente novamente.";

/// Warning shown when checkout is attempted with an empty cart
pub const EMPTY_CART: &str = "Seu carrinho está vazio!";

pub struct CheckoutInitiator<P> {
    gateway: P,
}

impl<P: PaymentGateway> CheckoutInitiator<P> {
    pub fn new(gateway: P) -> Self {
        Self { gateway }
    }

    /// Request a checkout session without touching the page
    pub async fn request(&self, description: &str, amount: f64) -> Result<CheckoutSession> {
        let url = self.gateway.create_payment(description, amount).await?;
        Ok(CheckoutSession::new(url, description, amount))
    }

    /// Request a checkout session and apply the outcome to the page
    ///
    /// Success navigates to the session URL; failure raises [`PAYMENT_FAILED`].
    pub async fn checkout(
        &self,
        description: &str,
        amount: f64,
        page: &mut Page,
    ) -> Result<CheckoutSession> {
        match self.request(description, amount).await {
            Ok(session) => {
                info!("Redirecting to checkout ({:.2})", amount);
                page.navigate(session.url.clone());
                Ok(session)
            }
            Err(e) => {
                error!("Payment failed: {}", e);
                page.alert(PAYMENT_FAILED);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use charmane_core::CharmaneError;

    struct FixedGateway(&'static str);

    #[async_trait]
    impl PaymentGateway for FixedGateway {
        async fn create_payment(&self, _description: &str, _amount: f64) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct RejectingGateway;

    #[async_trait]
    impl PaymentGateway for RejectingGateway {
        async fn create_payment(&self, _description: &str, _amount: f64) -> Result<String> {
            Err(CharmaneError::HttpStatus {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_success_navigates() {
        let initiator = CheckoutInitiator::new(FixedGateway("https://pay.example/c/1"));
        let mut page = Page::default();

        let session = initiator.checkout("Compra", 139.8, &mut page).await.unwrap();
        assert_eq!(session.url, "https://pay.example/c/1");
        assert_eq!(session.amount, 139.8);
        assert_eq!(page.location(), Some("https://pay.example/c/1"));
        assert!(page.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_failure_alerts_without_navigating() {
        let initiator = CheckoutInitiator::new(RejectingGateway);
        let mut page = Page::default();

        let result = initiator.checkout("Compra", 139.8, &mut page).await;
        assert!(result.is_err());
        assert_eq!(page.location(), None);
        assert_eq!(page.alerts(), &[PAYMENT_FAILED.to_string()]);
    }
}
