//! SentiBench core: the batch-evaluation engine
//!
//! A suite of sentences is sent to a classification oracle as a single
//! combined prompt, the free-text reply is parsed back into per-case verdicts,
//! and the verdicts are graded against expected labels.
//!
//! ```text
//! PromptBatcher::batch -> Oracle::invoke -> ResponseParser::parse -> GradingEngine::grade
//! ```
//!
//! # Example
//!
//! ```rust
//! use sentibench_core::{
//!     ExpectedLabels, GradingEngine, LabelVocabulary, PromptBatcher, ResponseParser, TestCase,
//! };
//!
//! let vocabulary = LabelVocabulary::four_way();
//! let cases = TestCase::batch(["I love this.", "This is awful."]);
//! let prompt = PromptBatcher::batch("Classify each sentence.", &cases);
//! assert!(prompt.as_str().contains("Test 2: This is awful."));
//!
//! let reply = "Sure!\nTest 1 - Positive\nTest 2 - Mixed";
//! let verdicts = ResponseParser::parse(reply, &vocabulary);
//! let report = GradingEngine::grade(&ExpectedLabels::new(["Positive", "Negative"]), &verdicts);
//! assert_eq!(report.summary_line(), "1/2 tests passed.");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod grading;
pub mod instruction;
pub mod oracle;
pub mod parser;
pub mod types;

pub use batch::{BatchPrompt, PromptBatcher};
pub use config::OracleConfig;
pub use error::{BenchError, BenchResult};
pub use grading::{DuplicatePolicy, GradingEngine};
pub use instruction::{check_consistency, default_instruction};
pub use oracle::{
    GeminiOracle, ORACLE_ERROR_SENTINEL, Oracle, OracleReply, ScriptedOracle, invoke_or_sentinel,
};
pub use parser::{LineMatch, ResponseParser};
pub use types::{
    ExpectedLabels, Failure, GradingReport, KNOWN_LABELS, LabelVocabulary, ParsedVerdict,
    TestCase, validate_dense,
};
