//! Errors surfaced to the user by the interaction layer.

use crate::llm::provider::LLMError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// Missing or unusable startup configuration. Fatal.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The question is too short to submit.
    #[error("please enter a question of at least {min_chars} characters (got {actual})")]
    Validation { min_chars: usize, actual: usize },

    /// The model answered the classification prompt with something outside
    /// the subject set.
    #[error("automatic subject classification failed; please pick a subject manually (model said: {raw})")]
    ClassificationMismatch { raw: String },

    /// The model call itself failed.
    #[error("model call failed: {0}")]
    ModelInvocation(#[from] LLMError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_shows_raw_output() {
        let e = QaError::ClassificationMismatch {
            raw: "dosage".into(),
        };
        assert!(e.to_string().contains("dosage"));
    }

    #[test]
    fn model_errors_keep_cause() {
        let e: QaError = LLMError::Network("connection reset".into()).into();
        assert!(e.to_string().contains("connection reset"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
