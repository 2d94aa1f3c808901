//! Combined prompt construction
//!
//! Renders an instruction header followed by one `Test {index}: {text}` line
//! per case. Rendering is a pure function of its inputs: the same instruction
//! and the same ordered cases always give a byte-identical prompt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BenchResult;
use crate::types::{TestCase, validate_dense};

/// A single combined request payload for the oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPrompt {
    text: String,
    case_count: usize,
}

impl BatchPrompt {
    /// Rendered prompt text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of cases rendered into the prompt
    pub fn case_count(&self) -> usize {
        self.case_count
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for BatchPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for BatchPrompt {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Builds batch prompts
pub struct PromptBatcher;

impl PromptBatcher {
    /// Render `instruction`, a blank line, then every case as
    /// `Test {index}: {input_text}` separated by blank lines.
    ///
    /// `cases` must be non-empty and indexed 1..=N in order. Lists built with
    /// [`TestCase::batch`] always are; callers assembling cases by hand must
    /// check them with [`validate_dense`] or use [`PromptBatcher::batch_checked`].
    pub fn batch(instruction: &str, cases: &[TestCase]) -> BatchPrompt {
        debug_assert!(
            validate_dense(cases).is_ok(),
            "batch cases must be indexed 1..=N"
        );

        let body = cases
            .iter()
            .map(|case| format!("Test {}: {}", case.index, case.input_text))
            .collect::<Vec<_>>()
            .join("\n\n");

        BatchPrompt {
            text: format!("{}\n\n{}", instruction, body),
            case_count: cases.len(),
        }
    }

    /// Like [`PromptBatcher::batch`], but rejects empty or non-dense case lists
    pub fn batch_checked(instruction: &str, cases: &[TestCase]) -> BenchResult<BatchPrompt> {
        validate_dense(cases)?;
        Ok(Self::batch(instruction, cases))
    }
}
