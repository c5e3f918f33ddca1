//! LLM-assisted data structuring.
//!
//! Two-stage pipeline over a chat-completions provider: a raw-data
//! extraction prompt, then a schema-mapping prompt. The completion client
//! never surfaces transport failures to its caller; every invocation
//! yields a string payload, on failure a JSON error envelope.

pub mod client;
pub mod error;
pub mod prompt;
pub mod structuring;
pub mod types;

pub use client::StructuringClient;
pub use error::{LlmError, Result};
pub use structuring::DataStructurer;
pub use types::{ChatRequest, Message};

/// Build the JSON error envelope returned in place of a completion.
///
/// The message is escaped through serde_json, so arbitrary failure text
/// stays valid JSON.
pub(crate) fn error_envelope(message: &str) -> String {
    format!(
        r#"{{"error": {}}}"#,
        serde_json::Value::String(message.to_string())
    )
}
