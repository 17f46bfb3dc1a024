//! API key retrieval from environment variables, `.env` files and the
//! configuration file.
//!
//! Environment variables always win over the configuration file so the key
//! can stay out of `pharmqa.toml`. A missing key is a fatal
//! [`QaError::Configuration`]: the CLI must not start serving questions
//! without one.

use crate::config::constants::env as key_env;
use crate::config::core::AgentConfig;
use crate::error::QaError;
use std::env;
use tracing::{debug, warn};

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is fine; an unreadable one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment from .env"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

/// Resolve the API key for `agent` from the process environment, falling back
/// to `agent.api_key`.
pub fn resolve_api_key(agent: &AgentConfig) -> Result<String, QaError> {
    resolve_with(agent, |name| env::var(name).ok())
}

/// Same as [`resolve_api_key`] with an injectable variable lookup.
pub fn resolve_with<F>(agent: &AgentConfig, lookup: F) -> Result<String, QaError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_names = vec![agent.api_key_env.as_str()];
    env_names.extend(
        key_env::FALLBACK_API_KEY_ENVS
            .iter()
            .copied()
            .filter(|name| *name != agent.api_key_env),
    );

    for name in &env_names {
        if let Some(key) = lookup(name).filter(|key| !key.trim().is_empty()) {
            debug!(source = %name, "API key resolved from environment");
            return Ok(key.trim().to_string());
        }
    }

    if let Some(key) = agent.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
        debug!("API key resolved from configuration file");
        return Ok(key.trim().to_string());
    }

    Err(QaError::Configuration(format!(
        "No API key found for the {} provider. Set {} (or add it to a .env file) or configure agent.api_key in pharmqa.toml",
        agent.provider,
        env_names.join(" or ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn configured_env_var_has_priority() {
        let mut agent = AgentConfig::default();
        agent.api_key_env = "PHARMQA_KEY".into();
        agent.api_key = Some("from-config".into());
        let key = resolve_with(
            &agent,
            lookup_from(&[("PHARMQA_KEY", "primary"), ("GOOGLE_API_KEY", "google")]),
        )
        .unwrap();
        assert_eq!(key, "primary");
    }

    #[test]
    fn falls_back_to_gemini_env_then_config() {
        let agent = AgentConfig::default();
        let key = resolve_with(&agent, lookup_from(&[("GEMINI_API_KEY", " gemini ")])).unwrap();
        assert_eq!(key, "gemini");

        let mut agent = AgentConfig::default();
        agent.api_key = Some("from-config".into());
        let key = resolve_with(&agent, lookup_from(&[("GOOGLE_API_KEY", "   ")])).unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let agent = AgentConfig::default();
        let err = resolve_with(&agent, lookup_from(&[])).unwrap_err();
        assert!(matches!(err, QaError::Configuration(_)));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
