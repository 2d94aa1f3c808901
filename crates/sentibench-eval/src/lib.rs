//! SentiBench evaluation harness
//!
//! Loads sentiment suites, runs them against an oracle and reports the
//! graded results.
//!
//! # Features
//!
//! - **Built-in Suites**: YAML suite descriptors bundled with the crate
//!   (clean baseline, cross-lingual, mixed emotions, noised negations)
//! - **Execution**: sequential or concurrent suite runs with progress events
//! - **Metrics Collection**: pass rates, unanswered and out-of-range counts
//! - **Report Generation**: console, table, JSON and Markdown output
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sentibench_core::{GeminiOracle, OracleConfig};
//! use sentibench_eval::{EvalConfig, EvalExecutor};
//!
//! let oracle = Arc::new(GeminiOracle::new(OracleConfig::from_env()?)?);
//! let executor = EvalExecutor::new(EvalConfig::default(), oracle);
//! let metrics = executor.run_all().await?;
//! println!("{}/{}", metrics.passed_count(), metrics.total_count());
//! ```

pub mod metrics;
pub mod report;
pub mod runner;
pub mod suites;

// Re-exports for convenience
pub use metrics::{EvalMetrics, MetricsAggregator, PassRate, SuiteResult, SuiteStatus};
pub use report::{ConsoleReporter, ReportFormat, generate_report};
pub use runner::{EvalConfig, EvalEvent, EvalExecutor, EventCallback, SuiteRunner};
pub use suites::{SuiteCase, SuiteDescriptor, SuiteLoader};
