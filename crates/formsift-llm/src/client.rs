//! Chat-completions client for the structuring pipeline.

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{LlmError, Result};
use crate::error_envelope;
use crate::types::{ChatRequest, ChatResponseRaw, Message};

/// Fixed system instruction sent with every completion request.
const SYSTEM_PROMPT: &str =
    "You are a highly accurate data extraction and transformation assistant.";

/// Default chat-completions endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gpt-4o";

/// Client for the completion provider.
///
/// One provider call per invocation: no retry, no streaming, transport
/// default timeouts. The public [`complete`](Self::complete) path never
/// returns an error; failures become a JSON error envelope string so the
/// boundary layer can always answer 200 with a payload.
#[derive(Clone)]
pub struct StructuringClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl StructuringClient {
    /// Create a client with an explicit bearer credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable, failing fast
    /// when it is absent rather than sending an empty credential.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (proxies, compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a prompt and return the completion text, or the error envelope
    /// `{"error": "Failed to process request: <message>"}` on any failure.
    pub async fn complete(&self, prompt: &str) -> String {
        match self.try_complete(prompt).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "completion request failed");
                error_envelope(&format!("Failed to process request: {}", e))
            }
        }
    }

    async fn try_complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(
            self.model.clone(),
            vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
        );

        let start = std::time::Instant::now();
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{}: {}", status, error_text)));
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion finished"
        );

        raw.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Api("no completion choice in response".into()))
    }
}
