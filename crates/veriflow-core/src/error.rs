//! Error types for the Veriflow core library.

use thiserror::Error;

/// Result type alias using the Veriflow Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Veriflow operations.
///
/// The coordinator itself has no fatal error class: modal interactions are
/// user-interruptible and every failure there degrades to an empty result.
/// These variants cover the surrounding machinery (configuration loading,
/// entry-URL construction).
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parse/build error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
