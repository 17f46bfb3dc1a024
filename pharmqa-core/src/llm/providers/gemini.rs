use crate::config::core::AgentConfig;
use crate::gemini::{Client, ClientConfig, GenerateContentRequest, GenerateContentResponse};
use crate::llm::provider::{LLMError, LLMProvider, LLMResponse, Usage};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// [`LLMProvider`] backed by the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    temperature: Option<f32>,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self> {
        Ok(Self {
            client: Client::new(api_key, model, base_url)?,
            temperature: None,
        })
    }

    pub fn from_config(config: &AgentConfig, api_key: String) -> Result<Self> {
        let client_config = ClientConfig::default().with_request_timeout(config.request_timeout());
        let client = Client::with_config(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
            client_config,
        )?;
        Ok(Self {
            client,
            temperature: config.temperature,
        })
    }

    fn convert_from_gemini_format(
        &self,
        response: GenerateContentResponse,
    ) -> Result<LLMResponse, LLMError> {
        let block_reason = response.block_reason();
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(LLMError::EmptyResponse {
                reason: block_reason,
            })?;

        let text = candidate
            .content
            .as_ref()
            .map(|content| content.text())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LLMError::EmptyResponse {
                reason: candidate.finish_reason,
            });
        }

        let usage = response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LLMResponse {
            content: text,
            model: self.client.model().to_string(),
            usage,
            finish_reason: candidate.finish_reason,
        })
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        self.client.model()
    }

    async fn generate(&self, prompt: &str) -> Result<LLMResponse, LLMError> {
        let request = GenerateContentRequest::from_prompt(prompt).with_temperature(self.temperature);
        let response = self.client.generate(&request).await?;
        let response = self.convert_from_gemini_format(response)?;
        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "gemini token usage"
            );
        }
        Ok(response)
    }
}
