pub mod config;

pub use config::ClientConfig;

use crate::gemini::models::{GenerateContentRequest, GenerateContentResponse};
use crate::llm::provider::LLMError;
use anyhow::{Context, Result};
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;
use std::time::Instant;
use tracing::debug;

/// Thin client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    model: String,
    base_url: String,
    http: ReqwestClient,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self> {
        Self::with_config(api_key, model, base_url, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(
        api_key: String,
        model: String,
        base_url: String,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .tcp_keepalive(config.tcp_keepalive)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content with the Gemini API
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        let start_time = Instant::now();

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            // reqwest errors embed the URL, which carries the key
            .map_err(|e| LLMError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LLMError::Authentication(format!("HTTP {status}: {error_text}"))
                }
                StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimit,
                _ => LLMError::Provider(format!("HTTP {status}: {error_text}")),
            });
        }

        let data = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                LLMError::Provider(format!("Failed to parse response: {}", e.without_url()))
            })?;

        debug!(
            model = %self.model,
            elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
            candidates = data.candidates.len(),
            "gemini generateContent completed"
        );

        Ok(data)
    }
}
