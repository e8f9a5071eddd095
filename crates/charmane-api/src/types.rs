//! Wire types for the payment service

use serde::{Deserialize, Serialize};

/// Payment request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
}

/// Payment response body
///
/// Only the redirect URL is consumed; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_request_wire_names() {
        let request = PaymentRequest {
            description: "Compra em CHARMANE VÊTEMENTS".to_string(),
            amount: 139.8,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"descricao": "Compra em CHARMANE VÊTEMENTS", "valor": 139.8})
        );
    }

    #[test]
    fn test_payment_response_ignores_extra_fields() {
        let response: PaymentResponse =
            serde_json::from_str(r#"{"id":"pref-1","url":"https://pay.example/c/1"}"#).unwrap();
        assert_eq!(response.url, "https://pay.example/c/1");
    }
}
