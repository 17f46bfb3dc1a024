//! Prompt construction
//!
//! Pure functions turning a question (and subject) into model-ready text.
//! The question is inserted verbatim: it is never escaped and never scanned
//! for placeholders, so building the same prompt twice yields the same text.

mod templates;

use crate::config::types::Locale;
use crate::subject::Subject;

/// Instruction asking the model to name the single best-fitting subject,
/// followed by the question.
pub fn build_classification_prompt(question: &str, locale: Locale) -> String {
    let t = templates::for_locale(locale);
    let labels = Subject::CONCRETE
        .iter()
        .map(|s| s.label(locale))
        .collect::<Vec<_>>()
        .join(t.label_separator);
    format!(
        "{}({}){}\n{}{}",
        t.classify_intro, labels, t.classify_rules, t.question_prefix, question
    )
}

/// Full answer request: explanation, quiz and exam summary sections, then
/// the subject label and the question.
pub fn build_answer_prompt(question: &str, subject: Subject, locale: Locale) -> String {
    let t = templates::for_locale(locale);
    format!(
        "{}\n\n{}{}\n{}{}\n",
        t.answer_body,
        t.subject_prefix,
        subject.label(locale),
        t.question_prefix,
        question
    )
}

/// Text appended to the pending question by the re-explain action.
pub fn re_explain_suffix(locale: Locale) -> &'static str {
    templates::for_locale(locale).re_explain_suffix
}

/// Text appended to the pending question by the more-examples action.
pub fn more_examples_suffix(locale: Locale) -> &'static str {
    templates::for_locale(locale).more_examples_suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_prompt_lists_every_label_and_ends_with_question() {
        for locale in [Locale::English, Locale::Korean] {
            let prompt = build_classification_prompt("what is the mechanism of penicillin", locale);
            for subject in Subject::CONCRETE {
                assert!(prompt.contains(subject.label(locale)), "{locale}: {subject}");
            }
            assert!(!prompt.contains(Subject::Unclassified.label(locale)));
            assert!(prompt.ends_with("what is the mechanism of penicillin"));
        }
    }

    #[test]
    fn korean_classification_prompt_keeps_original_wording() {
        let prompt = build_classification_prompt("페니실린의 기전은?", Locale::Korean);
        assert_eq!(
            prompt,
            "아래 질문이 어떤 약학 과목(약물학, 약물치료학, 생화학, 해부생리학, 미생물학, 유기화학)에 가장 적합한지 한 단어로만 답해줘.\n질문: 페니실린의 기전은?"
        );
    }

    #[test]
    fn answer_prompt_has_sections_subject_and_question() {
        let prompt = build_answer_prompt(
            "what is the mechanism of penicillin",
            Subject::Pharmacology,
            Locale::English,
        );
        assert!(prompt.contains("[Textbook-style explanation]"));
        assert!(prompt.contains("[Multiple-choice quiz (3-5 options)]"));
        assert!(prompt.contains("[Exam summary]"));
        assert!(prompt.contains("Subject: pharmacology\n"));
        assert!(prompt.contains("Question: what is the mechanism of penicillin"));
    }

    #[test]
    fn answer_prompt_is_deterministic() {
        let a = build_answer_prompt("ACE inhibitors?", Subject::Pharmacotherapy, Locale::Korean);
        let b = build_answer_prompt("ACE inhibitors?", Subject::Pharmacotherapy, Locale::Korean);
        assert_eq!(a, b);
    }

    #[test]
    fn question_text_is_not_reinterpreted() {
        let question = "what does {subject} mean in \"Subject: x\"?";
        let prompt = build_answer_prompt(question, Subject::Unclassified, Locale::English);
        assert!(prompt.contains(question));
        assert!(prompt.contains("Subject: auto-classify\n"));
    }

    #[test]
    fn suffixes_per_locale() {
        assert_eq!(
            re_explain_suffix(Locale::English),
            "\nPlease explain it again, more simply!"
        );
        assert_eq!(more_examples_suffix(Locale::Korean), "\n예시를 더 많이 보여줘.");
    }
}
