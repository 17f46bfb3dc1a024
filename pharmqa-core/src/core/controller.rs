//! Intent dispatch over a [`Session`].
//!
//! `Submit` is the only intent that reaches the model. Every other intent is
//! a synchronous edit of the pending question.

use super::answer::generate_answer;
use super::classifier::{Classification, classify};
use crate::config::constants::session::MIN_QUESTION_CHARS;
use crate::config::types::Locale;
use crate::error::QaError;
use crate::llm::provider::LLMProvider;
use crate::prompts::{build_answer_prompt, more_examples_suffix, re_explain_suffix};
use crate::session::Session;
use crate::subject::Subject;
use std::sync::Arc;
use tracing::{info, warn};

/// User actions understood by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit { question: String, subject: Subject },
    Reset,
    ReExplain,
    MoreExamples,
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "submit",
            Self::Reset => "reset",
            Self::ReExplain => "re_explain",
            Self::MoreExamples => "more_examples",
        }
    }
}

/// Long-running steps of a submission, reported so the caller can show progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classifying,
    Answering,
}

#[derive(Debug)]
pub enum Notice {
    /// Recovered locally; processing went on.
    Warning(QaError),
    /// The submission was aborted.
    Error(QaError),
}

impl Notice {
    pub fn error(&self) -> &QaError {
        match self {
            Self::Warning(e) | Self::Error(e) => e,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// What happened while handling one intent.
#[derive(Debug, Default)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub answer: Option<String>,
    /// The intent needs an answer to extend and none exists yet.
    pub unavailable: bool,
}

impl Outcome {
    fn warning(error: QaError) -> Self {
        Self {
            notices: vec![Notice::Warning(error)],
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &QaError> {
        self.notices
            .iter()
            .filter(|n| !n.is_error())
            .map(Notice::error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &QaError> {
        self.notices
            .iter()
            .filter(|n| n.is_error())
            .map(Notice::error)
    }
}

pub struct InteractionController {
    provider: Arc<dyn LLMProvider>,
    locale: Locale,
}

impl InteractionController {
    pub fn new(provider: Arc<dyn LLMProvider>, locale: Locale) -> Self {
        Self { provider, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn provider(&self) -> &dyn LLMProvider {
        self.provider.as_ref()
    }

    pub async fn handle(&self, session: &mut Session, intent: Intent) -> Outcome {
        self.handle_with(session, intent, |_| {}).await
    }

    /// Like [`handle`](Self::handle), calling `on_stage` before each model call.
    pub async fn handle_with<F>(&self, session: &mut Session, intent: Intent, mut on_stage: F) -> Outcome
    where
        F: FnMut(Stage),
    {
        info!(intent = intent.name(), "handling intent");
        match intent {
            Intent::Submit { question, subject } => {
                self.submit(session, question, subject, &mut on_stage).await
            }
            Intent::Reset => {
                session.set_pending(String::new());
                Outcome::default()
            }
            Intent::ReExplain => self.extend(session, re_explain_suffix(self.locale)),
            Intent::MoreExamples => self.extend(session, more_examples_suffix(self.locale)),
        }
    }

    async fn submit<F>(
        &self,
        session: &mut Session,
        question: String,
        subject: Subject,
        on_stage: &mut F,
    ) -> Outcome
    where
        F: FnMut(Stage),
    {
        let actual = question.trim().chars().count();
        if actual < MIN_QUESTION_CHARS {
            return Outcome::warning(QaError::Validation {
                min_chars: MIN_QUESTION_CHARS,
                actual,
            });
        }

        session.select(subject);
        session.set_pending(question.as_str());

        let mut outcome = Outcome::default();
        let mut resolved = subject;
        if subject.is_unclassified() {
            on_stage(Stage::Classifying);
            match classify(self.provider.as_ref(), &question, self.locale).await {
                Ok(Classification::Matched(found)) => resolved = found,
                Ok(Classification::Mismatch { raw }) => {
                    warn!(raw = %raw, "classifier answered outside the subject set");
                    outcome
                        .notices
                        .push(Notice::Warning(QaError::ClassificationMismatch { raw }));
                }
                Err(err) => {
                    warn!(error = %err, "classification call failed");
                    outcome.notices.push(Notice::Error(err.into()));
                    return outcome;
                }
            }
            session.select(resolved);
        }

        on_stage(Stage::Answering);
        let prompt = build_answer_prompt(&question, resolved, self.locale);
        match generate_answer(self.provider.as_ref(), &prompt).await {
            Ok(answer) => {
                session.record_exchange(&question, answer.clone(), resolved);
                info!(subject = %resolved, turns = session.history().len(), "answer recorded");
                outcome.answer = Some(answer);
            }
            Err(err) => {
                warn!(error = %err, "answer call failed");
                outcome.notices.push(Notice::Error(err.into()));
            }
        }
        outcome
    }

    fn extend(&self, session: &mut Session, suffix: &str) -> Outcome {
        if !session.can_expand() {
            return Outcome {
                unavailable: true,
                ..Outcome::default()
            };
        }
        session.append_to_pending(suffix);
        Outcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::{LLMError, LLMResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Echo {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LLMProvider for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn generate(&self, prompt: &str) -> Result<LLMResponse, LLMError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(LLMResponse::new("answer", "echo-1"))
        }
    }

    fn controller() -> (Arc<Echo>, InteractionController) {
        let echo = Arc::new(Echo {
            prompts: Mutex::new(Vec::new()),
        });
        let controller = InteractionController::new(echo.clone(), Locale::English);
        (echo, controller)
    }

    #[tokio::test]
    async fn explicit_subject_skips_classification() {
        let (echo, controller) = controller();
        let mut session = Session::new();
        let mut stages = Vec::new();
        let outcome = controller
            .handle_with(
                &mut session,
                Intent::Submit {
                    question: "what is a Grignard reagent".into(),
                    subject: Subject::OrganicChemistry,
                },
                |stage| stages.push(stage),
            )
            .await;
        assert_eq!(outcome.answer.as_deref(), Some("answer"));
        assert!(outcome.notices.is_empty());
        assert_eq!(stages, vec![Stage::Answering]);
        assert_eq!(echo.prompts.lock().unwrap().len(), 1);
        assert_eq!(session.selected_subject(), Subject::OrganicChemistry);
    }

    #[tokio::test]
    async fn whitespace_padding_does_not_count_toward_length() {
        let (echo, controller) = controller();
        let mut session = Session::new();
        let outcome = controller
            .handle(
                &mut session,
                Intent::Submit {
                    question: "   abcd   ".into(),
                    subject: Subject::Pharmacology,
                },
            )
            .await;
        assert!(matches!(
            outcome.warnings().next(),
            Some(QaError::Validation { actual: 4, .. })
        ));
        assert!(echo.prompts.lock().unwrap().is_empty());
        assert_eq!(session.selected_subject(), Subject::Unclassified);
    }

    #[tokio::test]
    async fn reset_clears_pending_question_only() {
        let (_echo, controller) = controller();
        let mut session = Session::new();
        controller
            .handle(
                &mut session,
                Intent::Submit {
                    question: "define bioavailability".into(),
                    subject: Subject::Pharmacotherapy,
                },
            )
            .await;
        let outcome = controller.handle(&mut session, Intent::Reset).await;
        assert!(outcome.notices.is_empty());
        assert_eq!(session.pending_question(), "");
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.selected_subject(), Subject::Pharmacotherapy);
        assert!(session.last_answer().is_some());
    }
}
