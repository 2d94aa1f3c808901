//! Single-suite execution
//!
//! Batch -> oracle -> parse -> grade, for one suite.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use sentibench_core::{
    BenchResult, DuplicatePolicy, GradingEngine, Oracle, PromptBatcher, ResponseParser,
    invoke_or_sentinel,
};

use crate::metrics::{SuiteResult, SuiteStatus};
use crate::suites::SuiteDescriptor;

/// Runs suites against an oracle
#[derive(Clone)]
pub struct SuiteRunner {
    oracle: Arc<dyn Oracle>,
    timeout: Option<Duration>,
    policy: DuplicatePolicy,
}

impl SuiteRunner {
    /// Create a runner with no timeout and the default duplicate policy
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            oracle,
            timeout: None,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Bound each oracle call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the duplicate-verdict policy
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn oracle(&self) -> &Arc<dyn Oracle> {
        &self.oracle
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Run one suite.
    ///
    /// Returns an error only when the suite itself is invalid; oracle failures
    /// produce a result with [`SuiteStatus::OracleError`] and a sentinel reply.
    pub async fn run(&self, suite: &SuiteDescriptor) -> BenchResult<SuiteResult> {
        suite.validate()?;

        let start = Instant::now();
        let cases = suite.test_cases();
        let expected = suite.expected_labels();
        let prompt = PromptBatcher::batch(&suite.instruction(), &cases);

        info!(
            suite = %suite.name,
            cases = cases.len(),
            vocabulary = %suite.vocabulary,
            "Running suite"
        );

        let reply = invoke_or_sentinel(self.oracle.as_ref(), prompt.as_str(), self.timeout).await;
        let verdicts = ResponseParser::parse(&reply.text, &suite.vocabulary);
        let report = GradingEngine::grade_with_policy(&expected, &verdicts, self.policy);

        if !report.missing.is_empty() {
            warn!(
                suite = %suite.name,
                missing = report.missing.len(),
                "Oracle left cases unanswered"
            );
        }
        if !report.duplicates.is_empty() {
            warn!(
                suite = %suite.name,
                duplicates = ?report.duplicates,
                policy = %self.policy,
                "Oracle answered some cases more than once"
            );
        }

        let status = if reply.is_error() {
            SuiteStatus::OracleError
        } else {
            SuiteStatus::Completed
        };

        info!(
            suite = %suite.name,
            passed = report.passed_count,
            total = report.total_count,
            failures = report.failures.len(),
            "Suite graded"
        );

        Ok(SuiteResult {
            suite: suite.name.clone(),
            display_name: suite.title().to_string(),
            vocabulary: suite.vocabulary.clone(),
            status,
            prompt: prompt.into_string(),
            raw_response: reply.text,
            oracle_error: reply.error,
            error_message: None,
            verdict_count: verdicts.len(),
            report,
            oracle_time_secs: reply.elapsed_secs,
            execution_time_secs: start.elapsed().as_secs_f64(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibench_core::{LabelVocabulary, ORACLE_ERROR_SENTINEL, ScriptedOracle};

    fn suite() -> SuiteDescriptor {
        SuiteDescriptor::new("mini", LabelVocabulary::four_way())
            .with_case("I love it.", "Positive")
            .with_case("I hate it.", "Negative")
            .with_case("It rained, then the sun came out.", "Mixed")
    }

    #[tokio::test]
    async fn test_perfect_oracle() {
        let oracle = Arc::new(ScriptedOracle::with_labels(["Positive", "Negative", "Mixed"]));
        let result = SuiteRunner::new(oracle.clone()).run(&suite()).await.unwrap();

        assert_eq!(result.status, SuiteStatus::Completed);
        assert_eq!(result.report.summary_line(), "3/3 tests passed.");
        assert!(result.passed());
        assert_eq!(result.verdict_count, 3);
        assert!(result.prompt.contains("Test 3: It rained, then the sun came out."));
        assert_eq!(oracle.calls(), 1);
    }

    #[tokio::test]
    async fn test_oracle_failure_degrades_to_zero() {
        let oracle = Arc::new(ScriptedOracle::failing("network unreachable"));
        let result = SuiteRunner::new(oracle).run(&suite()).await.unwrap();

        assert_eq!(result.status, SuiteStatus::OracleError);
        assert_eq!(result.raw_response, ORACLE_ERROR_SENTINEL);
        assert_eq!(result.report.passed_count, 0);
        assert_eq!(result.report.total_count, 3);
        assert!(result.report.failures.is_empty());
        assert_eq!(result.report.missing, vec![1, 2, 3]);
        assert!(
            result
                .oracle_error
                .as_deref()
                .is_some_and(|e| e.contains("network unreachable"))
        );
    }

    #[tokio::test]
    async fn test_partial_and_noisy_reply() {
        let reply = "Here you go:\n**Test 1 - positive**\nTest 3 - Neutral\nTest 4 - Mixed\nHope this helps!";
        let oracle = Arc::new(ScriptedOracle::fixed(reply));
        let result = SuiteRunner::new(oracle).run(&suite()).await.unwrap();

        assert_eq!(result.report.passed_count, 1);
        assert_eq!(result.report.missing, vec![2]);
        assert_eq!(result.report.failures.len(), 2);
        assert_eq!(result.report.failures[0].expected.as_deref(), Some("Mixed"));
        assert!(result.report.failures[1].is_out_of_range());
    }

    #[tokio::test]
    async fn test_invalid_suite_is_rejected_before_calling_oracle() {
        let oracle = Arc::new(ScriptedOracle::fixed("Test 1 - Positive"));
        let bad = suite().with_instruction("Answer Positive or Negative.");

        let runner = SuiteRunner::new(oracle.clone());
        assert!(runner.run(&bad).await.is_err());
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_policy_is_applied() {
        let reply = "Test 1 - Negative\nTest 1 - Positive\nTest 2 - Negative\nTest 3 - Mixed";
        let oracle = Arc::new(ScriptedOracle::fixed(reply));

        let first = SuiteRunner::new(oracle.clone())
            .with_policy(DuplicatePolicy::FirstWins)
            .run(&suite())
            .await
            .unwrap();
        assert_eq!(first.report.passed_count, 2);
        assert_eq!(first.report.duplicates, vec![1]);

        let each = SuiteRunner::new(oracle).run(&suite()).await.unwrap();
        assert_eq!(each.report.passed_count, 3);
        assert_eq!(each.report.failures.len(), 1);
    }
}
