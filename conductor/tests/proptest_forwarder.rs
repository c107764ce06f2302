//! Property-based tests for the forwarder's result contract.
//!
//! Whatever the query and whatever the provider says, the result carries
//! the provider text verbatim, no sources, and `context_used = false`.

use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;

use conductor::{BackendFactory, ForwarderConfig, LlmConfig, QueryForwarder, SubmitOptions};
use conductor_llm::{prompt, ChatBackend, ChatRequest, ChatResponse, ChatRole, LlmError};

/// Answers with a transformation of the user message so the reply depends on the input.
struct EchoBackend;

#[async_trait]
impl ChatBackend for EchoBackend {
    fn name(&self) -> &str {
        "echo"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let user = request.content_of(ChatRole::User).unwrap_or_default();
        Ok(ChatResponse {
            text: format!("echo: {user}"),
            model: request.model.clone(),
            completion_tokens: 0,
            latency_ms: 0,
        })
    }
}

fn echo_forwarder() -> QueryForwarder {
    let factory: BackendFactory = Arc::new(
        |_config: &ForwarderConfig| -> Result<Arc<dyn ChatBackend>, LlmError> {
            Ok(Arc::new(EchoBackend))
        },
    );
    QueryForwarder::with_factory(&LlmConfig::default(), |_| Some("sk-test".into()), factory)
        .expect("construct")
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

// ---------------------------------------------------------------------------
// Property: result shape is constant for any non-empty query
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn result_never_claims_context(query in "\\PC{1,300}") {
        let fwd = echo_forwarder();
        let result = runtime()
            .block_on(fwd.submit(&query, &SubmitOptions::new()))
            .expect("submit");

        prop_assert!(result.sources.is_empty());
        prop_assert!(!result.context_used);
        prop_assert_eq!(result.response, format!("echo: {query}"));
    }

    #[test]
    fn credential_presence_decides_construction(
        key in proptest::option::of("[a-zA-Z0-9-]{0,40}"),
    ) {
        let expect_ok = key.as_deref().is_some_and(|k| !k.is_empty());
        let result = QueryForwarder::from_lookup(&LlmConfig::default(), move |_| key);
        prop_assert_eq!(result.is_ok(), expect_ok);
    }

    #[test]
    fn preview_is_a_bounded_prefix(query in "\\PC{0,400}") {
        let p = prompt::preview(&query);
        prop_assert!(query.starts_with(p));
        prop_assert!(p.chars().count() <= prompt::PREVIEW_CHARS);
        if query.chars().count() <= prompt::PREVIEW_CHARS {
            prop_assert_eq!(p, query.as_str());
        }
    }
}
