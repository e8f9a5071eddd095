//! Shared reqwest plumbing

use charmane_core::{CharmaneError, Result};
use std::time::Duration;

/// Build a client with the configured per-request timeout
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CharmaneError::Other(format!("Failed to build HTTP client: {}", e)))
}

/// Turn a non-success response into `CharmaneError::HttpStatus`
pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown".to_string());
    Err(CharmaneError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}
