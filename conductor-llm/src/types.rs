//! Core types for chat-completion requests and responses.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::prompt;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions that frame the whole exchange.
    System,
    /// The end user's turn.
    User,
    /// A model turn.
    Assistant,
}

/// One message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// A user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A chat-completion request. Serializes directly as the OpenAI request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Conversation sent to the model, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl ChatRequest {
    /// The fixed two-message exchange: assistant instruction plus the user's query.
    ///
    /// Sampling is pinned to [`prompt::TEMPERATURE`] and [`prompt::MAX_TOKENS`].
    #[must_use]
    pub fn single_turn(model: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(prompt::ASSISTANT_SYSTEM),
                ChatMessage::user(query),
            ],
            temperature: prompt::TEMPERATURE,
            max_tokens: prompt::MAX_TOKENS,
        }
    }

    /// Content of the first message with the given role.
    #[must_use]
    pub fn content_of(&self, role: ChatRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// A response from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// The generated text.
    pub text: String,
    /// Model that produced the answer, as reported by the provider.
    pub model: String,
    /// Tokens generated, 0 when the provider did not report usage.
    pub completion_tokens: u32,
    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
}

impl ChatResponse {
    /// Parse an OpenAI chat-completion body.
    ///
    /// # Errors
    /// Returns `LlmError::ParseError` if the body is not JSON or has no choices.
    pub fn from_completion_json(body: &str, latency_ms: u64) -> Result<Self, LlmError> {
        let completion: CompletionBody = serde_json::from_str(body)?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::ParseError("response contained no choices".into()))?;

        Ok(Self {
            // Null content happens on refusals; the caller still gets a result.
            text: choice.message.content.unwrap_or_default(),
            model: completion.model.unwrap_or_default(),
            completion_tokens: completion.usage.map_or(0, |u| u.completion_tokens),
            latency_ms,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire format (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    #[serde(default)]
    completion_tokens: u32,
}
