//! # charmane-api
//!
//! HTTP clients for the two remote services the storefront talks to:
//! - The product catalog (one GET returning every product)
//! - The payment service (one POST returning a hosted checkout URL)
//!
//! ## Key Pattern
//!
//! Each call is single-shot: no retry, no cancellation. A failure is returned
//! to the caller, which decides what the shopper sees. Both services sit
//! behind traits so the storefront can run against fakes.

mod catalog;
mod http;
mod payment;
mod types;

pub use catalog::{CatalogClient, CatalogSource};
pub use payment::{PaymentClient, PaymentGateway};
pub use types::*;
