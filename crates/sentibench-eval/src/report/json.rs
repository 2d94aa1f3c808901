//! JSON report generation

use anyhow::Result;

use crate::metrics::EvalMetrics;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(metrics: &EvalMetrics) -> Result<String> {
        let json = serde_json::to_string_pretty(metrics)?;
        Ok(json)
    }

    /// Generate a compact JSON report (no pretty printing)
    pub fn generate_compact(metrics: &EvalMetrics) -> Result<String> {
        let json = serde_json::to_string(metrics)?;
        Ok(json)
    }
}
