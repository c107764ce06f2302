//! Error types for the conductor crate.

use conductor_llm::LlmError;
use thiserror::Error;

/// Errors raised while configuring or constructing a conductor.
///
/// Calls to [`crate::QueryForwarder::submit`] return [`LlmError`] directly;
/// this type only covers setup.
#[derive(Error, Debug)]
pub enum ConductorError {
    /// Configuration file is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-level failure, including a missing credential.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ConductorError>;
