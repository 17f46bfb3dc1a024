//! Common types shared across configuration and the interaction layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for prompts, subject labels and follow-up phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Korean => "ko",
        }
    }

    /// Enumerate the allowed configuration values for validation and messaging
    pub fn allowed_values() -> &'static [&'static str] {
        &["en", "ko"]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("en") || normalized.eq_ignore_ascii_case("english") {
            Ok(Self::English)
        } else if normalized.eq_ignore_ascii_case("ko") || normalized.eq_ignore_ascii_case("korean")
        {
            Ok(Self::Korean)
        } else {
            Err(format!(
                "unsupported language '{value}' (allowed: {})",
                Self::allowed_values().join(", ")
            ))
        }
    }
}
