//! Verdict grading against expected labels
//!
//! Grading is a pure function of the expected labels and the parsed verdicts.
//! Every verdict is checked against `expected[index - 1]` and the denominator
//! is the number of expected cases, so unanswered cases are neither passes nor
//! failures. The report additionally lists unanswered and doubly-answered
//! indices.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::types::{ExpectedLabels, Failure, GradingReport, ParsedVerdict};

/// How to treat several verdicts for the same case index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Grade every verdict independently (the default).
    /// A case answered twice correctly contributes two passes.
    #[default]
    CountEach,
    /// Only the first verdict for an index is graded
    FirstWins,
    /// Only the last verdict for an index is graded
    LastWins,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::CountEach => "count-each",
            DuplicatePolicy::FirstWins => "first-wins",
            DuplicatePolicy::LastWins => "last-wins",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "count-each" | "each" => Ok(DuplicatePolicy::CountEach),
            "first-wins" | "first" => Ok(DuplicatePolicy::FirstWins),
            "last-wins" | "last" => Ok(DuplicatePolicy::LastWins),
            other => Err(BenchError::invalid_input_field(
                format!("unknown duplicate policy '{}'", other),
                "duplicates",
            )),
        }
    }
}

/// Grades parsed verdicts
pub struct GradingEngine;

impl GradingEngine {
    /// Grade with the default policy ([`DuplicatePolicy::CountEach`])
    pub fn grade(expected: &ExpectedLabels, actual: &[ParsedVerdict]) -> GradingReport {
        Self::grade_with_policy(expected, actual, DuplicatePolicy::CountEach)
    }

    /// Grade, resolving repeated indices with `policy`
    pub fn grade_with_policy(
        expected: &ExpectedLabels,
        actual: &[ParsedVerdict],
        policy: DuplicatePolicy,
    ) -> GradingReport {
        let mut seen: BTreeMap<usize, usize> = BTreeMap::new();
        for verdict in actual {
            *seen.entry(verdict.index).or_insert(0) += 1;
        }

        let graded: Vec<&ParsedVerdict> = match policy {
            DuplicatePolicy::CountEach => actual.iter().collect(),
            DuplicatePolicy::FirstWins => {
                let mut taken = BTreeSet::new();
                actual.iter().filter(|v| taken.insert(v.index)).collect()
            }
            DuplicatePolicy::LastWins => {
                let mut taken = BTreeSet::new();
                let mut kept: Vec<&ParsedVerdict> =
                    actual.iter().rev().filter(|v| taken.insert(v.index)).collect();
                kept.reverse();
                kept
            }
        };

        let mut report = GradingReport {
            total_count: expected.len(),
            ..Default::default()
        };

        for verdict in graded {
            match expected.get(verdict.index) {
                Some(label) if label == verdict.label => report.passed_count += 1,
                Some(label) => report.failures.push(Failure {
                    index: verdict.index,
                    expected: Some(label.to_string()),
                    actual: verdict.label.clone(),
                }),
                None => report.failures.push(Failure {
                    index: verdict.index,
                    expected: None,
                    actual: verdict.label.clone(),
                }),
            }
        }

        report.missing = expected
            .iter_indexed()
            .map(|(index, _)| index)
            .filter(|index| !seen.contains_key(index))
            .collect();
        report.duplicates = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(index, _)| index)
            .collect();

        report
    }
}
