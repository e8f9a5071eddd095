//! Unified error types for the storefront

use thiserror::Error;

/// Unified error type for all storefront operations
#[derive(Error, Debug)]
pub enum CharmaneError {
    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Remote service errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using CharmaneError
pub type Result<T> = std::result::Result<T, CharmaneError>;
