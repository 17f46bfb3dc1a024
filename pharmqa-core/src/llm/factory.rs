use super::provider::LLMProvider;
use super::providers::GeminiProvider;
use crate::config::constants::models;
use crate::config::core::AgentConfig;
use anyhow::{Result, bail};
use std::sync::Arc;
use tracing::warn;

/// Provider names accepted in `agent.provider`
pub const AVAILABLE_PROVIDERS: &[&str] = &["gemini"];

/// Build the provider named by `config.provider`.
pub fn create_provider(config: &AgentConfig, api_key: String) -> Result<Arc<dyn LLMProvider>> {
    match config.provider.trim().to_lowercase().as_str() {
        "gemini" | "google" => {
            if !models::google::SUPPORTED_MODELS.contains(&config.model.as_str()) {
                warn!(model = %config.model, "model is not in the known Gemini model list; sending anyway");
            }
            Ok(Arc::new(GeminiProvider::from_config(config, api_key)?))
        }
        other => bail!(
            "Unsupported provider '{other}' (available: {})",
            AVAILABLE_PROVIDERS.join(", ")
        ),
    }
}
