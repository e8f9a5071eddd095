//! # charmane-core
//!
//! Core types for the Charmane storefront.
//!
//! ## Core Paradigm
//!
//! - The cart is an owned value; updates take it by value and return the new cart
//! - Persistence and rendering are separate steps driven by a thin controller
//! - Remote products are read-only and live only as long as the rendered page
//! - No failure is fatal: callers turn errors into page feedback

pub mod config;
mod error;
pub mod fail_open;
mod types;

pub use config::StoreConfig;
pub use error::{CharmaneError, Result};
pub use types::*;
