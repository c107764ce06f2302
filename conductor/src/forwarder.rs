//! The query forwarder: one query in, one provider answer out.
//!
//! No memory and no retrieval, so every result carries an empty `sources`
//! list and `context_used = false`. The shape matches what callers of the
//! memory-backed conductor expect.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use conductor_llm::client::OpenAiClient;
use conductor_llm::{prompt, ChatBackend, ChatRequest, LlmError};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{LlmConfig, ProviderKind};
use crate::error::Result;

/// Extra per-call options. Accepted for call-site compatibility, never read.
pub type SubmitOptions = HashMap<String, serde_json::Value>;

/// Builds the backend on first use.
pub type BackendFactory = Arc<
    dyn Fn(&ForwarderConfig) -> std::result::Result<Arc<dyn ChatBackend>, LlmError> + Send + Sync,
>;

/// Answer to a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Provider's generated text, verbatim.
    pub response: String,
    /// Citations backing the answer. Always empty here.
    pub sources: Vec<serde_json::Value>,
    /// Whether retrieved context was used. Always false here.
    pub context_used: bool,
}

impl ChatResult {
    /// A result carrying only the provider's answer.
    #[must_use]
    pub fn answered(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            sources: Vec::new(),
            context_used: false,
        }
    }
}

/// Resolved settings for one forwarder instance, credential included.
#[derive(Clone)]
pub struct ForwarderConfig {
    /// Backend the factory should build.
    pub provider: ProviderKind,
    /// Model identifier sent with every request.
    pub model: String,
    /// API origin for the backend.
    pub base_url: String,
    /// Credential read from the environment at construction.
    pub api_key: String,
}

impl fmt::Debug for ForwarderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwarderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Default factory: the live backend for the configured provider.
///
/// # Errors
/// Propagates HTTP client construction failures.
pub fn default_backend(
    config: &ForwarderConfig,
) -> std::result::Result<Arc<dyn ChatBackend>, LlmError> {
    match config.provider {
        ProviderKind::OpenAi => Ok(Arc::new(OpenAiClient::new(
            config.base_url.clone(),
            config.api_key.clone(),
        )?)),
    }
}

/// Forwards queries to a chat-completion provider.
pub struct QueryForwarder {
    config: ForwarderConfig,
    factory: BackendFactory,
    backend: Mutex<Option<Arc<dyn ChatBackend>>>,
}

impl QueryForwarder {
    /// Build a forwarder reading the credential from the process environment.
    ///
    /// # Errors
    /// Returns `LlmError::MissingCredential` (wrapped) if the variable named
    /// by `config.api_key_env` is unset or empty.
    pub fn from_env(config: &LlmConfig) -> Result<Self> {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Build a forwarder with a custom environment lookup.
    ///
    /// # Errors
    /// See [`Self::from_env`].
    pub fn from_lookup(
        config: &LlmConfig,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self> {
        Self::with_factory(config, lookup, Arc::new(default_backend))
    }

    /// Build a forwarder whose backend is produced by `factory` on first use.
    ///
    /// The factory is not called here; construction never touches the network.
    ///
    /// # Errors
    /// See [`Self::from_env`].
    pub fn with_factory(
        config: &LlmConfig,
        lookup: impl FnOnce(&str) -> Option<String>,
        factory: BackendFactory,
    ) -> Result<Self> {
        let api_key = lookup(&config.api_key_env)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| LlmError::MissingCredential(config.api_key_env.clone()))?;

        let forwarder = Self {
            config: ForwarderConfig {
                provider: config.provider,
                model: config.model.clone(),
                base_url: config.base_url.clone(),
                api_key,
            },
            factory,
            backend: Mutex::new(None),
        };

        info!(
            "Initialized minimal conductor with {}, model: {}",
            forwarder.config.provider, forwarder.config.model
        );
        Ok(forwarder)
    }

    /// Provider identifier.
    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        self.config.provider
    }

    /// Model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Whether the backend has been created yet.
    #[must_use]
    pub fn is_client_initialized(&self) -> bool {
        self.backend.lock().is_some()
    }

    /// Send `query` to the provider and wrap its answer.
    ///
    /// `options` is ignored. Any backend error is returned as-is: no retry,
    /// no fallback.
    ///
    /// # Errors
    /// Whatever the backend (or its construction) returns.
    pub async fn submit(
        &self,
        query: &str,
        _options: &SubmitOptions,
    ) -> std::result::Result<ChatResult, LlmError> {
        let backend = self.backend()?;

        info!("Processing query: {}...", prompt::preview(query));

        let request = ChatRequest::single_turn(self.config.model.as_str(), query);
        let answer = backend.complete(&request).await?;

        Ok(ChatResult::answered(answer.text))
    }

    /// Cached backend, created under the lock on first call.
    fn backend(&self) -> std::result::Result<Arc<dyn ChatBackend>, LlmError> {
        let mut slot = self.backend.lock();
        if let Some(backend) = slot.as_ref() {
            return Ok(Arc::clone(backend));
        }

        let backend = (self.factory)(&self.config)?;
        debug!(backend = backend.name(), "Created chat backend");
        *slot = Some(Arc::clone(&backend));
        Ok(backend)
    }
}

impl fmt::Debug for QueryForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryForwarder")
            .field("config", &self.config)
            .field("client_initialized", &self.is_client_initialized())
            .finish_non_exhaustive()
    }
}
