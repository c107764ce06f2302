//! Chat backends — the [`ChatBackend`] seam and the OpenAI client behind it.

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::LlmError;
use crate::types::{ChatRequest, ChatResponse};

/// Default OpenAI API origin.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Anything that can answer a [`ChatRequest`].
///
/// The forwarder only ever sees `Arc<dyn ChatBackend>`, so tests can swap
/// in scripted or failing stand-ins without a network.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Issue one completion request. Exactly one attempt is made.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

/// Client for OpenAI's chat-completion endpoint (or any compatible server).
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// # Errors
    /// Returns `LlmError::ConfigError` if the HTTP client cannot be built
    /// (e.g. no TLS backend available).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let http = Client::builder()
            .build()
            .map_err(|e| LlmError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Full URL of the completions endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let url = self.endpoint();
        debug!(%url, model = %request.model, "Sending chat completion request");

        let start = Instant::now();
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if !status.is_success() {
            warn!("OpenAI API returned error: HTTP {}", status);
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response = ChatResponse::from_completion_json(&body, latency_ms)?;
        debug!(
            latency_ms,
            completion_tokens = response.completion_tokens,
            "Chat completion received"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = OpenAiClient::new("http://localhost:8080/", "sk-test").expect("client");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn debug_redacts_key() {
        let client = OpenAiClient::new(OPENAI_BASE_URL, "sk-secret").expect("client");
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("api.openai.com"));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        // Port 9 (discard) on loopback is not expected to serve HTTP.
        let client = OpenAiClient::new("http://127.0.0.1:9", "sk-test").expect("client");
        let req = ChatRequest::single_turn("gpt-4o-mini", "hello");
        let err = client.complete(&req).await.expect_err("no server");
        assert!(matches!(
            err,
            LlmError::Unavailable(_) | LlmError::RequestFailed(_) | LlmError::Timeout
        ));
    }
}
