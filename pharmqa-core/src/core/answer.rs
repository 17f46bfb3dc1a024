use crate::llm::provider::{LLMError, LLMProvider};
use std::time::Instant;
use tracing::debug;

/// Send a built answer prompt and return the model's text. One call, no retry.
pub async fn generate_answer(provider: &dyn LLMProvider, prompt: &str) -> Result<String, LLMError> {
    let started = Instant::now();
    let response = provider.generate(prompt).await?;
    debug!(
        model = %response.model,
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        chars = response.content.chars().count(),
        "answer generated"
    );
    Ok(response.content)
}
