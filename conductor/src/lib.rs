//! # Conductor (minimal)
//!
//! Direct access to a chat-completion model without conversation memory.
//! A [`QueryForwarder`] attaches a fixed assistant instruction to each
//! query, makes one provider call, and returns a [`ChatResult`] shaped like
//! the memory-backed conductor's: `response`, an empty `sources` list, and
//! `context_used = false`.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use conductor::{ConductorConfig, QueryForwarder, SubmitOptions};
//!
//! let config = ConductorConfig::default();
//! let forwarder = QueryForwarder::from_env(&config.llm)?;
//! let result = forwarder.submit("What is 2+2?", &SubmitOptions::new()).await?;
//! println!("{}", result.response);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod forwarder;
pub mod logging;

pub use config::{ConductorConfig, LlmConfig, ProviderKind};
pub use error::ConductorError;
pub use forwarder::{BackendFactory, ChatResult, ForwarderConfig, QueryForwarder, SubmitOptions};
