//! Report generation for evaluation results
//!
//! Generates reports in various formats (console, table, JSON, Markdown).

mod console;
mod json;
mod markdown;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

use crate::metrics::EvalMetrics;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Per-suite prompt, reply and failure lines
    #[default]
    Console,
    Table,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Console => "console",
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Ok(ReportFormat::Console),
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => bail!(
                "Unknown report format '{}' (expected console, table, json or markdown)",
                other
            ),
        }
    }
}

/// Generate a report in the specified format.
///
/// Console output is colored only when `color` is set; the other formats
/// ignore it.
pub fn generate_report(metrics: &EvalMetrics, format: ReportFormat, color: bool) -> Result<String> {
    match format {
        ReportFormat::Console => Ok(ConsoleReporter::new(color).generate(metrics)),
        ReportFormat::Table => Ok(generate_table(metrics)),
        ReportFormat::Json => JsonReporter::generate(metrics),
        ReportFormat::Markdown => MarkdownReporter::generate(metrics),
    }
}

/// Generate a simple table report for terminal output
fn generate_table(metrics: &EvalMetrics) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("\n{:=<70}\n", "= Sentiment Benchmark Results "));
    output.push_str(&format!(
        "Model: {} | Provider: {} | sentibench: {}\n",
        metrics.model, metrics.provider, metrics.sentibench_version
    ));
    output.push_str(&format!(
        "Timestamp: {}\n",
        metrics.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("{:=<70}\n\n", ""));

    // Summary
    output.push_str("SUMMARY\n");
    output.push_str(&format!("{:-<70}\n", ""));
    output.push_str(&format!(
        "Passed: {}/{} ({})\n",
        metrics.overall.passed,
        metrics.overall.total,
        metrics.overall.as_percentage()
    ));
    output.push_str(&format!("Unanswered: {}\n", metrics.missing_total));
    output.push_str(&format!("Out of range: {}\n", metrics.out_of_range_total));
    output.push_str(&format!("Oracle errors: {}\n", metrics.oracle_errors));
    output.push_str(&format!("Invalid suites: {}\n", metrics.invalid_suites));
    output.push_str(&format!("Duplicates: {}\n", metrics.duplicate_policy));
    output.push_str(&format!(
        "Total Time: {:.1}s\n\n",
        metrics.total_execution_time_secs
    ));

    // Suite Results
    output.push_str("SUITE RESULTS\n");
    output.push_str(&format!("{:-<70}\n", ""));
    output.push_str(&format!(
        "{:<24} {:>14} {:>10} {:>8} {:>10}\n",
        "Suite", "Status", "Passed", "Rate", "Time"
    ));
    output.push_str(&format!("{:-<70}\n", ""));

    for result in &metrics.suite_results {
        let name = if result.suite.chars().count() > 22 {
            let head: String = result.suite.chars().take(19).collect();
            format!("{}...", head)
        } else {
            result.suite.clone()
        };

        let rate = result.pass_rate();
        output.push_str(&format!(
            "{:<24} {:>14} {:>10} {:>8} {:>9.1}s\n",
            name,
            result.status.label(),
            format!("{}/{}", rate.passed, rate.total),
            rate.as_percentage(),
            result.execution_time_secs
        ));
    }

    output.push_str(&format!("{:=<70}\n", ""));

    output
}
