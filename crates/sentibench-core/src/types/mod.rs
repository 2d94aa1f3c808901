//! Shared data contracts between the batcher, the parser and the grader
//!
//! Case indices are 1-based everywhere. They are the join key between a
//! rendered prompt line, the oracle's answer line and the expected label, so
//! nothing in this crate renumbers or reorders them.

mod case;
mod report;
mod verdict;
mod vocabulary;

pub use case::{ExpectedLabels, TestCase, validate_dense};
pub use report::{Failure, GradingReport};
pub use verdict::ParsedVerdict;
pub use vocabulary::{KNOWN_LABELS, LabelVocabulary};
