//! Error types for Warden
//!
//! Uses `thiserror` for library errors; the binary edge wraps these in
//! `anyhow::Result`.
//!
//! Lookup misses are deliberately *not* errors: store operations addressed
//! by an unknown id are silent no-ops (single-trusted-actor tool).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Warden operations
pub type WardenResult<T> = Result<T, WardenError>;

/// Main error type for Warden operations
#[derive(Error, Debug)]
pub enum WardenError {
    /// A transaction id already belongs to another payment record
    #[error("transaction id '{transaction_id}' is already recorded on payment {payment_id}")]
    DuplicateTransaction {
        transaction_id: String,
        payment_id: u32,
    },

    /// Hostel profile could not be parsed
    #[error("invalid hostel profile {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Text-generation credential missing from the environment
    #[error("no API key found - set {env_var}")]
    MissingApiKey { env_var: &'static str },

    /// Text-generation service failure (network, HTTP status, or malformed body)
    #[error("text generation failed: {0}")]
    TextGeneration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
