//! Instruction headers and their agreement with a label vocabulary
//!
//! The oracle can only answer with labels the instruction tells it about, and
//! the parser only accepts labels in the vocabulary. If the two disagree the
//! suite silently scores zero, so suites are checked up front.

use regex::Regex;

use crate::error::{BenchError, BenchResult};
use crate::types::{KNOWN_LABELS, LabelVocabulary};

/// Standard instruction naming every label in `vocabulary`
pub fn default_instruction(vocabulary: &LabelVocabulary) -> String {
    format!(
        "Please analyze the sentiment of each of the following sentences. \
         For each, determine if it contains {} sentiment. \
         Provide your response in the format \"TestId - Sentiment\".",
        vocabulary.to_prose()
    )
}

/// Labels from `candidates` that `instruction` names as whole, exactly-cased words
pub fn labels_named_in<'a>(instruction: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|label| {
            Regex::new(&format!(r"\b{}\b", regex::escape(label)))
                .map(|re| re.is_match(instruction))
                .unwrap_or(false)
        })
        .collect()
}

/// Ensure `instruction` names every vocabulary label and no other known label
pub fn check_consistency(
    suite: &str,
    instruction: &str,
    vocabulary: &LabelVocabulary,
) -> BenchResult<()> {
    let vocab_labels: Vec<&str> = vocabulary.labels().iter().map(String::as_str).collect();

    let unnamed: Vec<&str> = vocab_labels
        .iter()
        .copied()
        .filter(|label| labels_named_in(instruction, &[label]).is_empty())
        .collect();
    if !unnamed.is_empty() {
        return Err(BenchError::suite(
            suite,
            format!(
                "instruction never names vocabulary label(s): {}",
                unnamed.join(", ")
            ),
        ));
    }

    let outside: Vec<&str> = labels_named_in(instruction, KNOWN_LABELS)
        .into_iter()
        .filter(|label| !vocabulary.contains_exact(label))
        .collect();
    if !outside.is_empty() {
        return Err(BenchError::suite(
            suite,
            format!(
                "instruction asks for label(s) outside the vocabulary {}: {}",
                vocabulary,
                outside.join(", ")
            ),
        ));
    }

    Ok(())
}
