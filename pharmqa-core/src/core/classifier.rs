use crate::config::types::Locale;
use crate::llm::provider::{LLMError, LLMProvider};
use crate::prompts::build_classification_prompt;
use crate::subject::Subject;
use tracing::{debug, info};

/// Result of asking the model which subject a question belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched(Subject),
    /// The model answered with something outside the subject set.
    Mismatch { raw: String },
}

impl Classification {
    /// Subject to carry forward; a mismatch stays unclassified.
    pub fn subject(&self) -> Subject {
        match self {
            Self::Matched(subject) => *subject,
            Self::Mismatch { .. } => Subject::Unclassified,
        }
    }
}

/// One classification call, no retry. Transport failures propagate.
pub async fn classify(
    provider: &dyn LLMProvider,
    question: &str,
    locale: Locale,
) -> Result<Classification, LLMError> {
    let prompt = build_classification_prompt(question, locale);
    let response = provider.generate(&prompt).await?;
    let raw = response.content.trim();
    debug!(raw, "classifier output");

    let classification = match Subject::from_label(raw, locale) {
        Some(subject) => Classification::Matched(subject),
        None => Classification::Mismatch {
            raw: raw.to_string(),
        },
    };
    info!(
        subject = %classification.subject(),
        matched = matches!(classification, Classification::Matched(_)),
        "question classified"
    );
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_falls_back_to_unclassified() {
        let c = Classification::Mismatch {
            raw: "dosage".into(),
        };
        assert_eq!(c.subject(), Subject::Unclassified);
        assert_eq!(
            Classification::Matched(Subject::Microbiology).subject(),
            Subject::Microbiology
        );
    }
}
