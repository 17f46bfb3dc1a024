//! Curriculum subjects a question can be filed under.
//!
//! The set is closed. [`Subject::Unclassified`] is the "let the classifier
//! decide" sentinel: it can be *selected*, but it is never accepted as the
//! result of a classification.

use crate::config::types::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    #[default]
    Unclassified,
    Pharmacology,
    Pharmacotherapy,
    Biochemistry,
    AnatomyPhysiology,
    Microbiology,
    OrganicChemistry,
}

impl Subject {
    /// Every subject, sentinel first, in selector order.
    pub const ALL: [Subject; 7] = [
        Subject::Unclassified,
        Subject::Pharmacology,
        Subject::Pharmacotherapy,
        Subject::Biochemistry,
        Subject::AnatomyPhysiology,
        Subject::Microbiology,
        Subject::OrganicChemistry,
    ];

    /// The six subjects a classification may resolve to.
    pub const CONCRETE: [Subject; 6] = [
        Subject::Pharmacology,
        Subject::Pharmacotherapy,
        Subject::Biochemistry,
        Subject::AnatomyPhysiology,
        Subject::Microbiology,
        Subject::OrganicChemistry,
    ];

    /// Stable identifier used on the command line and in serialized turns.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Pharmacology => "pharmacology",
            Self::Pharmacotherapy => "pharmacotherapy",
            Self::Biochemistry => "biochemistry",
            Self::AnatomyPhysiology => "anatomy-physiology",
            Self::Microbiology => "microbiology",
            Self::OrganicChemistry => "organic-chemistry",
        }
    }

    /// Label shown to the user and sent to the model for `locale`.
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::Unclassified => "auto-classify",
                other => other.slug(),
            },
            Locale::Korean => match self {
                Self::Unclassified => "자동 분류",
                Self::Pharmacology => "약물학",
                Self::Pharmacotherapy => "약물치료학",
                Self::Biochemistry => "생화학",
                Self::AnatomyPhysiology => "해부생리학",
                Self::Microbiology => "미생물학",
                Self::OrganicChemistry => "유기화학",
            },
        }
    }

    pub fn is_unclassified(self) -> bool {
        self == Self::Unclassified
    }

    /// Membership check for raw classifier output.
    ///
    /// Only an exact match against one of the six concrete labels of `locale`
    /// is accepted; surrounding whitespace is ignored, casing is not.
    pub fn from_label(raw: &str, locale: Locale) -> Option<Subject> {
        let raw = raw.trim();
        Self::CONCRETE
            .into_iter()
            .find(|subject| subject.label(locale) == raw)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject '{0}' (expected one of: auto, {list})", list = concrete_slugs())]
pub struct ParseSubjectError(pub String);

fn concrete_slugs() -> String {
    Subject::CONCRETE
        .iter()
        .map(|s| s.slug())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if matches!(needle.as_str(), "auto" | "auto-classify") {
            return Ok(Self::Unclassified);
        }
        Self::ALL
            .into_iter()
            .find(|subject| subject.slug() == needle)
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_set_excludes_sentinel() {
        assert!(!Subject::CONCRETE.contains(&Subject::Unclassified));
        assert_eq!(Subject::ALL.len(), Subject::CONCRETE.len() + 1);
    }

    #[test]
    fn from_label_accepts_exact_labels_only() {
        assert_eq!(
            Subject::from_label("pharmacology", Locale::English),
            Some(Subject::Pharmacology)
        );
        assert_eq!(
            Subject::from_label("  microbiology\n", Locale::English),
            Some(Subject::Microbiology)
        );
        assert_eq!(Subject::from_label("Pharmacology", Locale::English), None);
        assert_eq!(Subject::from_label("dosage", Locale::English), None);
        assert_eq!(Subject::from_label("pharmacology.", Locale::English), None);
    }

    #[test]
    fn sentinel_label_is_never_a_classification() {
        for locale in [Locale::English, Locale::Korean] {
            let label = Subject::Unclassified.label(locale);
            assert_eq!(Subject::from_label(label, locale), None);
        }
    }

    #[test]
    fn korean_labels_round_trip() {
        for subject in Subject::CONCRETE {
            let label = subject.label(Locale::Korean);
            assert_eq!(Subject::from_label(label, Locale::Korean), Some(subject));
            assert_eq!(Subject::from_label(label, Locale::English), None);
        }
    }

    #[test]
    fn parses_slugs_and_aliases() {
        assert_eq!("auto".parse::<Subject>(), Ok(Subject::Unclassified));
        assert_eq!("Auto-Classify".parse::<Subject>(), Ok(Subject::Unclassified));
        assert_eq!(
            "anatomy-physiology".parse::<Subject>(),
            Ok(Subject::AnatomyPhysiology)
        );
        let err = "toxicology".parse::<Subject>().unwrap_err();
        assert!(err.to_string().contains("toxicology"));
        assert!(err.to_string().contains("organic-chemistry"));
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&Subject::OrganicChemistry).unwrap();
        assert_eq!(json, "\"organic-chemistry\"");
    }
}
