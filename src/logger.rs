//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after configuration is loaded. Output goes
//! to stderr so diagnostics never mix with answers on stdout.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to set subscriber: {e}"))
}

/// Build a filter from a level name or a full `EnvFilter` directive list.
fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level.trim()).map_err(|e| anyhow!("invalid log level '{level}': {e}"))
}
