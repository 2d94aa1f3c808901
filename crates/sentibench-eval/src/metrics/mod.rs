//! Result types and aggregation for evaluation runs

mod aggregator;
mod types;

pub use aggregator::MetricsAggregator;
pub use types::{EvalMetrics, PassRate, SuiteResult, SuiteStatus};
