//! Error types for the mandi negotiation engine

use thiserror::Error;

/// Main error type for mandi operations
#[derive(Error, Debug)]
pub enum MandiError {
    // Negotiation errors
    #[error("Negotiation session not found: {0}")]
    SessionNotFound(String),

    #[error("Negotiation session already closed: {0}")]
    SessionClosed(String),

    #[error("Market price must be positive, got {0}")]
    InvalidMarketPrice(f64),

    // Locale errors
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mandi operations
pub type Result<T> = std::result::Result<T, MandiError>;
