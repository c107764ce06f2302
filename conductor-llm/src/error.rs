//! LLM error types.

use thiserror::Error;

/// Errors that can occur while talking to a chat-completion provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed before a response was received.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-success status (auth, quota, bad input).
    #[error("LLM provider returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, as returned by the provider.
        body: String,
    },

    /// Response body was not a valid chat completion.
    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    /// Request timed out.
    #[error("LLM request timed out")]
    Timeout,

    /// LLM provider is unreachable.
    #[error("LLM provider unavailable: {0}")]
    Unavailable(String),

    /// Configuration error.
    #[error("LLM configuration error: {0}")]
    ConfigError(String),

    /// Required credential variable is unset or empty.
    #[error("{0} environment variable required")]
    MissingCredential(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Unavailable(err.to_string())
        } else if err.is_decode() {
            LlmError::ParseError(err.to_string())
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::ParseError(err.to_string())
    }
}
