use crate::config::types::Locale;
use serde::{Deserialize, Serialize};

/// Interaction settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Language of prompts, subject labels and follow-up phrases
    #[serde(default)]
    pub language: Locale,
}
