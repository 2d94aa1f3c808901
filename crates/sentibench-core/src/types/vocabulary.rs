//! Closed label sets for a suite

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Every sentiment label any built-in suite uses, in canonical casing
pub const KNOWN_LABELS: &[&str] = &["Positive", "Negative", "Neutral", "Mixed"];

/// Ordered set of labels a suite accepts.
///
/// Lookups are case-insensitive; [`LabelVocabulary::canonical`] hands back the
/// casing the vocabulary was declared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelVocabulary {
    labels: Vec<String>,
}

impl LabelVocabulary {
    /// Build a vocabulary, rejecting empty sets, blank labels and labels that
    /// collide case-insensitively
    pub fn new<I, S>(labels: I) -> BenchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for label in labels {
            let label: String = label.into();
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(BenchError::invalid_input_field(
                    "vocabulary contains a blank label",
                    "vocabulary",
                ));
            }
            if collected.iter().any(|l| l.eq_ignore_ascii_case(trimmed)) {
                return Err(BenchError::invalid_input_field(
                    format!("duplicate label '{}' in vocabulary", trimmed),
                    "vocabulary",
                ));
            }
            collected.push(trimmed.to_string());
        }

        if collected.is_empty() {
            return Err(BenchError::invalid_input_field(
                "vocabulary is empty",
                "vocabulary",
            ));
        }

        Ok(Self { labels: collected })
    }

    /// {Positive, Negative, Neutral, Mixed}
    pub fn four_way() -> Self {
        Self::from_static(&["Positive", "Negative", "Neutral", "Mixed"])
    }

    /// {Positive, Negative, Mixed}
    pub fn polar_mixed() -> Self {
        Self::from_static(&["Positive", "Negative", "Mixed"])
    }

    /// {Positive, Negative, Neutral}
    pub fn three_way() -> Self {
        Self::from_static(&["Positive", "Negative", "Neutral"])
    }

    fn from_static(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Declared casing of `label`, matched case-insensitively
    pub fn canonical(&self, label: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(label))
            .map(String::as_str)
    }

    /// Whether `label` is a member with exactly the declared casing
    pub fn contains_exact(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels in declaration order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels ordered longest first, so a label that is a prefix of another
    /// never shadows it during matching
    pub fn longest_first(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));
        sorted
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Human list: "A, B, or C"
    pub fn to_prose(&self) -> String {
        match self.labels.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{} or {}", first, second),
            [init @ .., last] => format!("{}, or {}", init.join(", "), last),
        }
    }
}

impl TryFrom<Vec<String>> for LabelVocabulary {
    type Error = BenchError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<LabelVocabulary> for Vec<String> {
    fn from(vocabulary: LabelVocabulary) -> Self {
        vocabulary.labels
    }
}

impl fmt::Display for LabelVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_is_case_insensitive() {
        let vocab = LabelVocabulary::four_way();
        assert_eq!(vocab.canonical("POSITIVE"), Some("Positive"));
        assert_eq!(vocab.canonical("mixed"), Some("Mixed"));
        assert_eq!(vocab.canonical("Happy"), None);
    }

    #[test]
    fn test_contains_exact_respects_casing() {
        let vocab = LabelVocabulary::three_way();
        assert!(vocab.contains_exact("Neutral"));
        assert!(!vocab.contains_exact("neutral"));
        assert!(!vocab.contains_exact("Mixed"));
    }

    #[test]
    fn test_rejects_invalid_vocabularies() {
        assert!(LabelVocabulary::new(Vec::<String>::new()).is_err());
        assert!(LabelVocabulary::new(["Positive", "positive"]).is_err());
        assert!(LabelVocabulary::new(["Positive", "  "]).is_err());
    }

    #[test]
    fn test_longest_first_ordering() {
        let vocab = LabelVocabulary::new(["Pos", "Positive", "Neg"]).unwrap();
        assert_eq!(vocab.longest_first()[0], "Positive");
    }

    #[test]
    fn test_prose_rendering() {
        assert_eq!(
            LabelVocabulary::four_way().to_prose(),
            "Positive, Negative, Neutral, or Mixed"
        );
        assert_eq!(
            LabelVocabulary::new(["Yes", "No"]).unwrap().to_prose(),
            "Yes or No"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let vocab: LabelVocabulary = serde_yaml::from_str("[Positive, Negative, Mixed]").unwrap();
        assert_eq!(vocab, LabelVocabulary::polar_mixed());

        let dup: Result<LabelVocabulary, _> = serde_yaml::from_str("[Positive, POSITIVE]");
        assert!(dup.is_err());
    }
}
