//! SentiBench: batch sentiment evaluation for generative language models
//!
//! Re-exports the engine ([`sentibench_core`]) and the suite harness
//! ([`sentibench_eval`]) under one crate.

pub use sentibench_core as core;
pub use sentibench_eval as eval;

pub use sentibench_core::{
    BenchError, BenchResult, DuplicatePolicy, ExpectedLabels, GradingEngine, GradingReport,
    LabelVocabulary, Oracle, PromptBatcher, ResponseParser, TestCase,
};
pub use sentibench_eval::{EvalConfig, EvalExecutor, SuiteDescriptor, SuiteLoader, SuiteRunner};
