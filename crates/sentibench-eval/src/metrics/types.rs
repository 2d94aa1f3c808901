//! Core metric types for evaluation
//!
//! Defines the data structures for tracking suite outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sentibench_core::{DuplicatePolicy, GradingReport, LabelVocabulary};

/// How a suite run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteStatus {
    /// The oracle replied and the reply was graded
    Completed,
    /// The oracle call failed; the sentinel reply was graded
    OracleError,
    /// The suite failed validation and was not sent
    Invalid,
}

impl SuiteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SuiteStatus::Completed => "COMPLETED",
            SuiteStatus::OracleError => "ORACLE ERROR",
            SuiteStatus::Invalid => "INVALID",
        }
    }
}

/// Outcome of running one suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Suite identifier
    pub suite: String,

    /// Suite display name
    pub display_name: String,

    /// Vocabulary the reply was parsed against
    pub vocabulary: LabelVocabulary,

    /// Run status
    pub status: SuiteStatus,

    /// Prompt sent to the oracle
    pub prompt: String,

    /// Raw oracle reply (the sentinel on oracle failure)
    pub raw_response: String,

    /// Why the oracle call failed
    pub oracle_error: Option<String>,

    /// Why the suite could not run
    pub error_message: Option<String>,

    /// Number of verdicts parsed from the reply
    pub verdict_count: usize,

    /// Grading outcome
    pub report: GradingReport,

    /// Time spent waiting on the oracle
    pub oracle_time_secs: f64,

    /// Total time for the suite
    pub execution_time_secs: f64,

    /// When the suite finished
    pub timestamp: DateTime<Utc>,
}

impl SuiteResult {
    /// Result for a suite that failed validation.
    ///
    /// The report still carries the expected-case count so the pass ratio
    /// reads `0/N`.
    pub fn invalid(
        suite: impl Into<String>,
        display_name: impl Into<String>,
        vocabulary: LabelVocabulary,
        total_count: usize,
        error: impl Into<String>,
    ) -> Self {
        Self {
            suite: suite.into(),
            display_name: display_name.into(),
            vocabulary,
            status: SuiteStatus::Invalid,
            prompt: String::new(),
            raw_response: String::new(),
            oracle_error: None,
            error_message: Some(error.into()),
            verdict_count: 0,
            report: GradingReport {
                total_count,
                missing: (1..=total_count).collect(),
                ..Default::default()
            },
            oracle_time_secs: 0.0,
            execution_time_secs: 0.0,
            timestamp: Utc::now(),
        }
    }

    /// Every case answered correctly and the oracle did not fail
    pub fn passed(&self) -> bool {
        self.status == SuiteStatus::Completed && self.report.is_perfect()
    }

    /// Pass rate for this suite
    pub fn pass_rate(&self) -> PassRate {
        PassRate::new(self.report.passed_count, self.report.total_count)
    }
}

/// Passed over total, with the rate precomputed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassRate {
    pub passed: usize,
    pub total: usize,
    pub rate: f64,
}

impl PassRate {
    pub fn new(passed: usize, total: usize) -> Self {
        let rate = if total > 0 {
            passed as f64 / total as f64
        } else {
            0.0
        };

        Self {
            passed,
            total,
            rate,
        }
    }

    /// Format as percentage string
    pub fn as_percentage(&self) -> String {
        format!("{:.1}%", self.rate * 100.0)
    }
}

/// Aggregated results of an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalMetrics {
    /// Passed/total summed over all suites
    pub overall: PassRate,

    /// Per-suite results, in run order
    pub suite_results: Vec<SuiteResult>,

    /// Expected cases the oracle never answered
    pub missing_total: usize,

    /// Verdicts pointing outside their batch
    pub out_of_range_total: usize,

    /// Suites whose oracle call failed
    pub oracle_errors: usize,

    /// Suites that failed validation
    pub invalid_suites: usize,

    /// Policy used for repeated verdicts
    pub duplicate_policy: DuplicatePolicy,

    /// Total wall-clock time
    pub total_execution_time_secs: f64,

    /// Evaluation timestamp
    pub timestamp: DateTime<Utc>,

    /// Model under test
    pub model: String,

    /// Oracle provider
    pub provider: String,

    /// Harness version
    pub sentibench_version: String,
}

impl EvalMetrics {
    pub fn passed_count(&self) -> usize {
        self.overall.passed
    }

    pub fn total_count(&self) -> usize {
        self.overall.total
    }

    pub fn overall_pass_rate(&self) -> f64 {
        self.overall.rate
    }

    /// Every suite completed and graded perfectly
    pub fn all_passed(&self) -> bool {
        self.suite_results.iter().all(SuiteResult::passed)
    }

    /// Look up a suite result by name
    pub fn suite(&self, name: &str) -> Option<&SuiteResult> {
        self.suite_results.iter().find(|r| r.suite == name)
    }
}
