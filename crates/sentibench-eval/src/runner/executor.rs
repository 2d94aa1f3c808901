//! Evaluation executor for running suites against an oracle
//!
//! Selects suites from a loader, runs each through a [`SuiteRunner`] and
//! aggregates the results.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use futures::future::join_all;

use sentibench_core::Oracle;

use super::{EvalConfig, SuiteRunner};
use crate::metrics::{EvalMetrics, MetricsAggregator, SuiteResult};
use crate::suites::{SuiteDescriptor, SuiteLoader};

/// Callback for progress events during evaluation
pub type EventCallback = Box<dyn Fn(EvalEvent) + Send + Sync>;

/// Progress event during evaluation
#[derive(Debug, Clone)]
pub enum EvalEvent {
    /// A suite is about to be sent to the oracle
    SuiteStarted {
        /// Suite position (0-based)
        current: usize,
        /// Number of suites in the run
        total: usize,
        suite: String,
        cases: usize,
    },
    /// A suite finished; its result is final
    SuiteCompleted {
        current: usize,
        total: usize,
        result: Box<SuiteResult>,
    },
}

/// Executor for running evaluation suites
pub struct EvalExecutor {
    /// Configuration
    config: EvalConfig,

    /// Suite loader
    loader: SuiteLoader,

    /// Runner shared by every suite
    runner: SuiteRunner,

    /// Progress callback
    event_callback: Option<EventCallback>,
}

impl EvalExecutor {
    /// Create an executor; suites come from `config.suites_dir` or the
    /// bundled directory
    pub fn new(config: EvalConfig, oracle: Arc<dyn Oracle>) -> Self {
        let loader = match &config.suites_dir {
            Some(dir) => SuiteLoader::new(dir),
            None => SuiteLoader::builtin(),
        };
        Self::with_loader(config, oracle, loader)
    }

    /// Create with a custom suite loader
    pub fn with_loader(config: EvalConfig, oracle: Arc<dyn Oracle>, loader: SuiteLoader) -> Self {
        let runner = SuiteRunner::new(oracle)
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_policy(config.duplicate_policy);

        Self {
            config,
            loader,
            runner,
            event_callback: None,
        }
    }

    /// Set progress callback
    pub fn set_event_callback(&mut self, callback: EventCallback) {
        self.event_callback = Some(callback);
    }

    /// Suites selected by the configuration
    pub fn load_suites(&self) -> Result<Vec<SuiteDescriptor>> {
        let mut suites = if !self.config.suite_names.is_empty() {
            self.loader.load_names(&self.config.suite_names)?
        } else {
            self.loader.load_all()?
        };

        if !self.config.tags.is_empty() {
            suites.retain(|s| s.tags.iter().any(|tag| self.config.tags.contains(tag)));
        }

        Ok(suites)
    }

    /// Run every selected suite
    pub async fn run_all(&self) -> Result<EvalMetrics> {
        let suites = self.load_suites()?;
        if suites.is_empty() {
            tracing::warn!("No suites selected");
        }
        Ok(self.run_suites(suites).await)
    }

    /// Run the given suites and aggregate their results
    pub async fn run_suites(&self, suites: Vec<SuiteDescriptor>) -> EvalMetrics {
        let total = suites.len();
        let start_time = Instant::now();

        let results = if self.config.parallel {
            self.run_concurrently(&suites).await
        } else {
            let mut results = Vec::with_capacity(total);
            for (index, suite) in suites.iter().enumerate() {
                self.emit_started(index, total, suite);
                let result = self.run_one(suite).await;
                self.emit_completed(index, total, &result);
                results.push(result);
            }
            results
        };

        let total_time = start_time.elapsed().as_secs_f64();

        MetricsAggregator::new(self.runner.oracle().model(), self.runner.oracle().name())
            .with_policy(self.runner.policy())
            .aggregate(results, total_time)
    }

    /// Suites run concurrently; completion events are emitted afterwards in
    /// suite order so reports never interleave
    async fn run_concurrently(&self, suites: &[SuiteDescriptor]) -> Vec<SuiteResult> {
        let total = suites.len();
        for (index, suite) in suites.iter().enumerate() {
            self.emit_started(index, total, suite);
        }

        let results = join_all(suites.iter().map(|suite| self.run_one(suite))).await;

        for (index, result) in results.iter().enumerate() {
            self.emit_completed(index, total, result);
        }
        results
    }

    async fn run_one(&self, suite: &SuiteDescriptor) -> SuiteResult {
        match self.runner.run(suite).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    suite = %suite.name,
                    error = %e,
                    "Suite failed validation"
                );
                SuiteResult::invalid(
                    &suite.name,
                    suite.title(),
                    suite.vocabulary.clone(),
                    suite.len(),
                    e.to_string(),
                )
            }
        }
    }

    fn emit_started(&self, current: usize, total: usize, suite: &SuiteDescriptor) {
        if let Some(callback) = &self.event_callback {
            callback(EvalEvent::SuiteStarted {
                current,
                total,
                suite: suite.name.clone(),
                cases: suite.len(),
            });
        }
    }

    fn emit_completed(&self, current: usize, total: usize, result: &SuiteResult) {
        if let Some(callback) = &self.event_callback {
            callback(EvalEvent::SuiteCompleted {
                current,
                total,
                result: Box::new(result.clone()),
            });
        }
    }

    /// Whether the run should be reported as failed.
    ///
    /// Only strict runs fail; any imperfect, invalid or oracle-errored suite
    /// then counts.
    pub fn is_failure(&self, metrics: &EvalMetrics) -> bool {
        self.config.strict && !metrics.all_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SuiteStatus;
    use sentibench_core::{LabelVocabulary, ScriptedOracle};
    use std::sync::Mutex;

    fn suites() -> Vec<SuiteDescriptor> {
        vec![
            SuiteDescriptor::new("one", LabelVocabulary::four_way())
                .with_case("Great!", "Positive")
                .with_case("Awful.", "Negative"),
            SuiteDescriptor::new("two", LabelVocabulary::three_way())
                .with_case("Fine.", "Neutral")
                .with_case("Love it.", "Positive"),
        ]
    }

    fn oracle() -> Arc<dyn Oracle> {
        Arc::new(ScriptedOracle::echo(|_, text| {
            Some(
                match text {
                    "Great!" | "Love it." => "Positive",
                    "Awful." => "Negative",
                    _ => "Neutral",
                }
                .to_string(),
            )
        }))
    }

    #[tokio::test]
    async fn test_sequential_run_reports_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();

        let mut executor = EvalExecutor::new(EvalConfig::default(), oracle());
        executor.set_event_callback(Box::new(move |event| {
            let tag = match event {
                EvalEvent::SuiteStarted { suite, .. } => format!("start:{}", suite),
                EvalEvent::SuiteCompleted { result, .. } => format!("done:{}", result.suite),
            };
            sink.lock().unwrap().push(tag);
        }));

        let metrics = executor.run_suites(suites()).await;

        assert_eq!(metrics.passed_count(), 4);
        assert_eq!(metrics.total_count(), 4);
        assert!(metrics.all_passed());
        assert_eq!(metrics.provider, "scripted");
        assert_eq!(
            *events.lock().unwrap(),
            vec!["start:one", "done:one", "start:two", "done:two"]
        );
    }

    #[tokio::test]
    async fn test_parallel_run_keeps_suite_order() {
        let executor = EvalExecutor::new(EvalConfig::default().parallel(), oracle());
        let metrics = executor.run_suites(suites()).await;

        let names: Vec<&str> = metrics.suite_results.iter().map(|r| r.suite.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(metrics.passed_count(), 4);
    }

    #[tokio::test]
    async fn test_invalid_suite_does_not_stop_the_run() {
        let mut selected = suites();
        selected.insert(
            0,
            SuiteDescriptor::new("broken", LabelVocabulary::three_way()).with_case("Meh.", "Mixed"),
        );

        let executor = EvalExecutor::new(EvalConfig::default(), oracle());
        let metrics = executor.run_suites(selected).await;

        assert_eq!(metrics.invalid_suites, 1);
        assert_eq!(metrics.suite_results[0].status, SuiteStatus::Invalid);
        assert_eq!(metrics.suite_results[1].status, SuiteStatus::Completed);
        assert_eq!(metrics.total_count(), 5);
        assert!(!executor.is_failure(&metrics));
    }

    #[tokio::test]
    async fn test_strict_mode_flags_imperfect_runs() {
        let wrong: Arc<dyn Oracle> = Arc::new(ScriptedOracle::with_labels(["Negative", "Negative"]));
        let lenient = EvalExecutor::new(EvalConfig::default(), wrong.clone());
        let metrics = lenient.run_suites(suites()).await;
        assert!(!lenient.is_failure(&metrics));

        let strict = EvalExecutor::new(EvalConfig::default().strict(), wrong);
        let metrics = strict.run_suites(suites()).await;
        assert!(strict.is_failure(&metrics));
    }

    #[test]
    fn test_load_suites_with_filters() {
        let executor = EvalExecutor::new(
            EvalConfig::default().with_suite_names(vec![
                "negation_noise".to_string(),
                "cross_lingual".to_string(),
            ]),
            oracle(),
        );
        let names: Vec<String> = executor
            .load_suites()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["negation_noise", "cross_lingual"]);

        let executor = EvalExecutor::new(
            EvalConfig::default().with_tags(vec!["multilingual".to_string()]),
            oracle(),
        );
        assert_eq!(executor.load_suites().unwrap().len(), 1);
    }
}
