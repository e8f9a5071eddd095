//! Fail-open utilities for graceful degradation
//!
//! Nothing on the storefront is allowed to take the page down. Operations
//! whose failure only degrades the experience (persisting the cart, loading
//! the catalog) run through these helpers, which log and swallow the error.
//!
//! DO NOT use fail-open where the caller must tell the shopper what happened
//! (checkout): match on the `Result` there instead.

use std::future::Future;
use tracing::warn;

use crate::Result;

/// Await an operation that should fail open
///
/// Logs the error via `tracing::warn!` on failure and returns `None`.
///
/// # Usage
///
/// ```no_run
/// use charmane_core::fail_open::fail_open;
/// use charmane_core::{Product, Result};
///
/// async fn fetch_products() -> Result<Vec<Product>> {
///     Ok(Vec::new())
/// }
///
/// async fn example() {
///     let products = fail_open("catalog", || fetch_products()).await;
///     // products is None if fetch_products() failed
/// }
/// ```
pub async fn fail_open<F, Fut, T>(operation_name: &str, f: F) -> Option<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match f().await {
        Ok(val) => Some(val),
        Err(e) => {
            warn!("{} failed (fail-open): {}", operation_name, e);
            None
        }
    }
}

/// Synchronous counterpart of [`fail_open`]
///
/// Used for local side effects such as storage writes.
pub fn fail_open_sync<F, T>(operation_name: &str, f: F) -> Option<T>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(val) => Some(val),
        Err(e) => {
            warn!("{} failed (fail-open): {}", operation_name, e);
            None
        }
    }
}
