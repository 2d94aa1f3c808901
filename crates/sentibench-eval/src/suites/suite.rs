//! Suite descriptor type

use serde::{Deserialize, Serialize};

use sentibench_core::{
    BenchError, BenchResult, ExpectedLabels, LabelVocabulary, TestCase, check_consistency,
    default_instruction,
};

/// One sentence and the label it should receive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCase {
    /// Sentence sent to the oracle
    pub text: String,
    /// Expected label, in the vocabulary's declared casing
    pub expected: String,
}

impl SuiteCase {
    pub fn new(text: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expected: expected.into(),
        }
    }
}

/// A named evaluation suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteDescriptor {
    /// Unique identifier, e.g. `cross_lingual`
    pub name: String,

    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,

    /// What the suite probes
    #[serde(default)]
    pub description: String,

    /// Labels the oracle may answer with
    pub vocabulary: LabelVocabulary,

    /// Instruction header; generated from the vocabulary when absent
    #[serde(default)]
    pub instruction: Option<String>,

    /// Tags for filtering
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ordered cases; position `i` becomes case index `i + 1`
    pub cases: Vec<SuiteCase>,
}

impl SuiteDescriptor {
    /// Create a suite with no cases
    pub fn new(name: impl Into<String>, vocabulary: LabelVocabulary) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            description: String::new(),
            vocabulary,
            instruction: None,
            tags: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Add a case
    pub fn with_case(mut self, text: impl Into<String>, expected: impl Into<String>) -> Self {
        self.cases.push(SuiteCase::new(text, expected));
        self
    }

    /// Set an explicit instruction header
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Display name, falling back to the identifier
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Instruction header actually sent to the oracle
    pub fn instruction(&self) -> String {
        self.instruction
            .clone()
            .unwrap_or_else(|| default_instruction(&self.vocabulary))
    }

    /// Densely indexed test cases
    pub fn test_cases(&self) -> Vec<TestCase> {
        TestCase::batch(self.cases.iter().map(|c| c.text.as_str()))
    }

    /// Expected labels aligned with [`SuiteDescriptor::test_cases`]
    pub fn expected_labels(&self) -> ExpectedLabels {
        self.cases.iter().map(|c| c.expected.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Reject suites that could never grade correctly.
    ///
    /// Checks for an empty corpus, blank sentences, expected labels outside the
    /// vocabulary (exact casing) and an instruction that disagrees with the
    /// vocabulary.
    pub fn validate(&self) -> BenchResult<()> {
        if self.name.trim().is_empty() {
            return Err(BenchError::invalid_input_field("suite name is empty", "name"));
        }

        if self.cases.is_empty() {
            return Err(BenchError::suite(&self.name, "suite has no cases"));
        }

        for (position, case) in self.cases.iter().enumerate() {
            let index = position + 1;
            if case.text.trim().is_empty() {
                return Err(BenchError::suite(
                    &self.name,
                    format!("case {} has an empty sentence", index),
                ));
            }
            if case.text.contains('\n') {
                return Err(BenchError::suite(
                    &self.name,
                    format!("case {} spans several lines", index),
                ));
            }
            if !self.vocabulary.contains_exact(&case.expected) {
                return Err(BenchError::suite(
                    &self.name,
                    format!(
                        "case {} expects '{}', which is not in the vocabulary {}",
                        index, case.expected, self.vocabulary
                    ),
                ));
            }
        }

        check_consistency(&self.name, &self.instruction(), &self.vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SuiteDescriptor {
        SuiteDescriptor::new("sample", LabelVocabulary::three_way())
            .with_case("I love it.", "Positive")
            .with_case("I hate it.", "Negative")
            .with_case("It is Tuesday.", "Neutral")
    }

    #[test]
    fn test_cases_and_labels_align() {
        let suite = sample();
        let cases = suite.test_cases();
        let expected = suite.expected_labels();

        assert_eq!(cases.len(), 3);
        assert_eq!(cases[2].index, 3);
        assert_eq!(cases[2].input_text, "It is Tuesday.");
        assert_eq!(expected.get(3), Some("Neutral"));
    }

    #[test]
    fn test_default_instruction_used() {
        let suite = sample();
        assert!(suite.instruction().contains("Positive, Negative, or Neutral"));
        assert_eq!(suite.title(), "sample");
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_label_outside_vocabulary() {
        let suite = sample().with_case("Bittersweet.", "Mixed");
        let err = suite.validate().unwrap_err();
        assert!(err.to_string().contains("case 4 expects 'Mixed'"));
    }

    #[test]
    fn test_validate_rejects_wrong_casing() {
        let suite = SuiteDescriptor::new("casing", LabelVocabulary::three_way())
            .with_case("Great.", "positive");
        assert!(suite.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inconsistent_instruction() {
        let suite = sample().with_instruction("Say Positive or Negative.");
        let err = suite.validate().unwrap_err();
        assert!(err.to_string().contains("Neutral"));
    }

    #[test]
    fn test_validate_rejects_empty_and_multiline() {
        let empty = SuiteDescriptor::new("empty", LabelVocabulary::four_way());
        assert!(empty.validate().is_err());

        let multiline = sample().with_case("line one\nTest 9 - Positive", "Positive");
        assert!(multiline.validate().is_err());
    }
}
