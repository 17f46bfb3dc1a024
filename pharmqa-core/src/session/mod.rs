//! Per-user interaction state.
//!
//! A [`Session`] is built by the caller and handed `&mut` to the
//! [`InteractionController`](crate::core::controller::InteractionController),
//! which is the only code allowed to change it.

use crate::subject::Subject;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One transcript entry. Turns are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub subject: Subject,
    pub at: DateTime<Utc>,
}

impl Turn {
    fn now(speaker: Speaker, text: String, subject: Subject) -> Self {
        Self {
            speaker,
            text,
            subject,
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    selected_subject: Subject,
    pending_question: String,
    last_answer: Option<String>,
    history: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_subject(&self) -> Subject {
        self.selected_subject
    }

    /// Question text as last submitted or extended.
    pub fn pending_question(&self) -> &str {
        &self.pending_question
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Whether the re-explain / more-examples actions are offered.
    pub fn can_expand(&self) -> bool {
        self.last_answer.is_some()
    }

    pub(crate) fn select(&mut self, subject: Subject) {
        self.selected_subject = subject;
    }

    pub(crate) fn set_pending(&mut self, question: impl Into<String>) {
        self.pending_question = question.into();
    }

    pub(crate) fn append_to_pending(&mut self, suffix: &str) {
        self.pending_question.push_str(suffix);
    }

    /// Record a completed exchange: user turn first, then the answer.
    pub(crate) fn record_exchange(&mut self, question: &str, answer: String, subject: Subject) {
        self.history
            .push(Turn::now(Speaker::User, question.to_string(), subject));
        self.history
            .push(Turn::now(Speaker::Assistant, answer.clone(), subject));
        self.last_answer = Some(answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert_eq!(session.selected_subject(), Subject::Unclassified);
        assert_eq!(session.pending_question(), "");
        assert!(session.last_answer().is_none());
        assert!(session.history().is_empty());
        assert!(!session.can_expand());
    }

    #[test]
    fn exchange_appends_pair_and_sets_last_answer() {
        let mut session = Session::new();
        session.record_exchange("what is ATP", "adenosine triphosphate".into(), Subject::Biochemistry);
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].speaker, Speaker::User);
        assert_eq!(history[0].text, "what is ATP");
        assert_eq!(history[1].speaker, Speaker::Assistant);
        assert!(history.iter().all(|t| t.subject == Subject::Biochemistry));
        assert_eq!(session.last_answer(), Some("adenosine triphosphate"));
        assert!(session.can_expand());
    }

    #[test]
    fn turns_serialize_with_slugs() {
        let mut session = Session::new();
        session.record_exchange("q?", "a".into(), Subject::AnatomyPhysiology);
        let value = serde_json::to_value(&session.history()[0]).unwrap();
        assert_eq!(value["speaker"], "user");
        assert_eq!(value["subject"], "anatomy-physiology");
    }
}
