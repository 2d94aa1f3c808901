//! Metrics aggregation across suites

use chrono::Utc;

use sentibench_core::DuplicatePolicy;

use super::types::{EvalMetrics, PassRate, SuiteResult, SuiteStatus};

/// Folds per-suite results into [`EvalMetrics`]
pub struct MetricsAggregator {
    model: String,
    provider: String,
    policy: DuplicatePolicy,
}

impl MetricsAggregator {
    pub fn new(model: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            provider: provider.into(),
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Aggregate results; suite order is preserved
    pub fn aggregate(&self, results: Vec<SuiteResult>, total_time_secs: f64) -> EvalMetrics {
        let passed: usize = results.iter().map(|r| r.report.passed_count).sum();
        let total: usize = results.iter().map(|r| r.report.total_count).sum();

        let missing_total = results.iter().map(|r| r.report.missing.len()).sum();
        let out_of_range_total = results.iter().map(|r| r.report.out_of_range().count()).sum();
        let oracle_errors = results
            .iter()
            .filter(|r| r.status == SuiteStatus::OracleError)
            .count();
        let invalid_suites = results
            .iter()
            .filter(|r| r.status == SuiteStatus::Invalid)
            .count();

        EvalMetrics {
            overall: PassRate::new(passed, total),
            suite_results: results,
            missing_total,
            out_of_range_total,
            oracle_errors,
            invalid_suites,
            duplicate_policy: self.policy,
            total_execution_time_secs: total_time_secs,
            timestamp: Utc::now(),
            model: self.model.clone(),
            provider: self.provider.clone(),
            sentibench_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
