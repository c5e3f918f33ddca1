//! Error types for the completion client.

use thiserror::Error;

/// Result type for LLM client operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Completion-provider errors.
///
/// Only [`LlmError::Config`] ever reaches callers directly (at startup);
/// request-time failures are folded into the error envelope string.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Configuration error (missing API key, invalid settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// API error (non-2xx response, missing completion choice).
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (malformed response body).
    #[error("parse error: {0}")]
    Parse(String),
}
