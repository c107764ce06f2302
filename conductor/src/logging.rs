//! Log setup for the `conductor` binary.

use tracing_subscriber::EnvFilter;

use crate::error::{ConductorError, Result};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is used.
///
/// # Errors
/// Returns `ConductorError::Config` if `default_level` is not a valid
/// filter or a subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            ConductorError::Config(format!("invalid log level '{default_level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConductorError::Config(format!("failed to install logger: {e}")))
}
