use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// Diagnostics written to stderr through `tracing`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive (`error`, `warn`, `info`, `debug`, `trace` or a full
    /// `EnvFilter` expression). `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}
