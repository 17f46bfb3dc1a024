//! Model service boundary
//!
//! Everything the interaction layer needs from a language model is one call:
//! prompt text in, response text out. Any non-success outcome, including an
//! empty body, is an [`LLMError`].

use async_trait::async_trait;

/// Model response
#[derive(Debug, Clone, PartialEq)]
pub struct LLMResponse {
    pub content: String,
    pub model: String,
    pub usage: Option<Usage>,
    pub finish_reason: Option<String>,
}

impl LLMResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            usage: None,
            finish_reason: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Universal LLM provider trait
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Generate a completion for a single prompt. One attempt, no retry.
    async fn generate(&self, prompt: &str) -> Result<LLMResponse, LLMError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    /// `reason` is the candidate's finish reason, or the prompt block reason
    /// when no candidate came back.
    #[error("Empty response from model{}", reason_suffix(.reason))]
    EmptyResponse { reason: Option<String> },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" (reason: {r})"))
        .unwrap_or_default()
}
