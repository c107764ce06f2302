//! # conductor-llm — Chat-Completion Transport
//!
//! Everything that touches the remote provider lives here:
//!   - **Wire types** for the OpenAI `/v1/chat/completions` endpoint
//!   - **[`ChatBackend`]**, the seam the forwarder calls through
//!   - **[`OpenAiClient`]**, the live backend over `reqwest`
//!   - The fixed prompt and sampling constants
//!
//! One request in, one response out. No retries, no streaming, no
//! fallback chain: a failed call surfaces as an [`LlmError`] and the
//! caller decides what to do with it.

#![deny(missing_docs)]

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{ChatBackend, OpenAiClient};
pub use error::LlmError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
