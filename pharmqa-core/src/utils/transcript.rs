//! Conversation history formatting.

use crate::config::types::Locale;
use crate::session::{Speaker, Turn};

pub fn speaker_label(speaker: Speaker, locale: Locale) -> &'static str {
    match (speaker, locale) {
        (Speaker::User, Locale::English) => "You",
        (Speaker::User, Locale::Korean) => "나",
        (Speaker::Assistant, _) => "Gemini",
    }
}

/// `Speaker: **[label]** text`
pub fn format_turn(turn: &Turn, locale: Locale) -> String {
    format!(
        "{}: **[{}]** {}",
        speaker_label(turn.speaker, locale),
        turn.subject.label(locale),
        turn.text
    )
}

/// Every turn in order, as markdown paragraphs.
pub fn format_history(turns: &[Turn], locale: Locale) -> String {
    turns
        .iter()
        .map(|turn| format_turn(turn, locale))
        .collect::<Vec<_>>()
        .join("\n\n")
}
