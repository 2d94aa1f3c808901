//! Grading output

use std::fmt;

use serde::{Deserialize, Serialize};

/// A verdict that did not match its expected label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Case index as reported by the oracle
    pub index: usize,
    /// Expected label, `None` when the index is outside the batch
    pub expected: Option<String>,
    /// Label the oracle gave
    pub actual: String,
}

impl Failure {
    /// Whether the oracle answered an index that does not exist in the batch
    pub fn is_out_of_range(&self) -> bool {
        self.expected.is_none()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Some(expected) => write!(
                f,
                "Test failed at Test {}: Expected \"{}\", but got \"{}\"",
                self.index, expected, self.actual
            ),
            None => write!(
                f,
                "Test failed at Test {}: no expected case at this index, but got \"{}\"",
                self.index, self.actual
            ),
        }
    }
}

/// Terminal output of grading one suite.
///
/// `passed_count` and `total_count` use count-based arithmetic: the
/// denominator is the number of expected cases, and unanswered cases count as
/// neither pass nor failure. `missing` lists those unanswered cases so the gap
/// is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingReport {
    pub passed_count: usize,
    pub total_count: usize,
    pub failures: Vec<Failure>,
    /// Expected indices with no verdict, ascending
    #[serde(default)]
    pub missing: Vec<usize>,
    /// Indices answered more than once, ascending
    #[serde(default)]
    pub duplicates: Vec<usize>,
}

impl GradingReport {
    /// Fraction of expected cases that passed
    pub fn pass_rate(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.passed_count as f64 / self.total_count as f64
        }
    }

    /// Every expected case answered and correct, nothing extra
    pub fn is_perfect(&self) -> bool {
        self.failures.is_empty()
            && self.missing.is_empty()
            && self.passed_count == self.total_count
    }

    /// Failures that point outside the batch
    pub fn out_of_range(&self) -> impl Iterator<Item = &Failure> {
        self.failures.iter().filter(|f| f.is_out_of_range())
    }

    /// `"{passed}/{total} tests passed."`
    ///
    /// Under [`DuplicatePolicy::CountEach`](crate::DuplicatePolicy::CountEach)
    /// every repeated correct answer counts again, so `passed` can exceed
    /// `total` (e.g. `3/2 tests passed.`).
    pub fn summary_line(&self) -> String {
        format!("{}/{} tests passed.", self.passed_count, self.total_count)
    }
}
