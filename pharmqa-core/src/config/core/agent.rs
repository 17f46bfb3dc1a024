use crate::config::constants::{defaults, urls};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    /// AI provider (only `gemini` is available)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model used for both classification and answer generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API key fallback when no environment variable is set.
    /// Prefer the environment or a `.env` file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the Gemini REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature forwarded as `generationConfig.temperature`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Whole-request deadline for model calls. Unset means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            base_url: default_base_url(),
            temperature: None,
            request_timeout_seconds: None,
        }
    }
}

impl AgentConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

fn default_provider() -> String {
    defaults::DEFAULT_PROVIDER.to_string()
}
fn default_model() -> String {
    defaults::DEFAULT_MODEL.to_string()
}
fn default_api_key_env() -> String {
    defaults::DEFAULT_API_KEY_ENV.to_string()
}
fn default_base_url() -> String {
    urls::GEMINI_API_BASE.to_string()
}
