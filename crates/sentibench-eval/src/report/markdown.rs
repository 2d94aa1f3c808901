//! Markdown report generation

use anyhow::Result;

use crate::metrics::{EvalMetrics, SuiteStatus};

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Generate a Markdown report
    pub fn generate(metrics: &EvalMetrics) -> Result<String> {
        let mut md = String::new();

        // Title
        md.push_str("# Sentiment Benchmark Report\n\n");

        // Metadata
        md.push_str("## Overview\n\n");
        md.push_str(&format!("- **Model**: {}\n", metrics.model));
        md.push_str(&format!("- **Provider**: {}\n", metrics.provider));
        md.push_str(&format!(
            "- **sentibench Version**: {}\n",
            metrics.sentibench_version
        ));
        md.push_str(&format!(
            "- **Timestamp**: {}\n",
            metrics.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        md.push_str(&format!(
            "- **Duplicate Policy**: {}\n",
            metrics.duplicate_policy
        ));
        md.push_str(&format!(
            "- **Total Execution Time**: {:.1}s\n\n",
            metrics.total_execution_time_secs
        ));

        // Summary
        md.push_str("## Summary\n\n");
        md.push_str("| Metric | Value |\n|--------|-------|\n");
        md.push_str(&format!(
            "| Passed | {}/{} ({}) |\n",
            metrics.overall.passed,
            metrics.overall.total,
            metrics.overall.as_percentage()
        ));
        md.push_str(&format!("| Unanswered | {} |\n", metrics.missing_total));
        md.push_str(&format!(
            "| Out of Range | {} |\n",
            metrics.out_of_range_total
        ));
        md.push_str(&format!("| Oracle Errors | {} |\n", metrics.oracle_errors));
        md.push_str(&format!("| Invalid Suites | {} |\n\n", metrics.invalid_suites));

        // Suite Results
        md.push_str("## Suite Results\n\n");
        md.push_str("| Suite | Vocabulary | Status | Passed | Rate | Missing | Time |\n");
        md.push_str("|-------|------------|--------|--------|------|---------|------|\n");

        for result in &metrics.suite_results {
            let status_emoji = match result.status {
                SuiteStatus::Completed if result.passed() => "✅",
                SuiteStatus::Completed => "❌",
                SuiteStatus::OracleError => "💥",
                SuiteStatus::Invalid => "⚠️",
            };
            let rate = result.pass_rate();

            md.push_str(&format!(
                "| {} | {} | {} | {}/{} | {} | {} | {:.1}s |\n",
                result.display_name,
                result.vocabulary.labels().join(", "),
                status_emoji,
                rate.passed,
                rate.total,
                rate.as_percentage(),
                result.report.missing.len(),
                result.execution_time_secs
            ));
        }
        md.push('\n');

        // Failed Suites Details
        let failed: Vec<_> = metrics
            .suite_results
            .iter()
            .filter(|r| !r.passed())
            .collect();

        if !failed.is_empty() {
            md.push_str("## Failed Suites\n\n");

            for result in failed {
                md.push_str(&format!("### {}\n\n", result.display_name));
                md.push_str(&format!("- **ID**: {}\n", result.suite));
                md.push_str(&format!("- **Status**: {}\n", result.status.label()));

                if let Some(ref error) = result.error_message {
                    md.push_str(&format!("- **Error**: {}\n", error));
                }
                if let Some(ref error) = result.oracle_error {
                    md.push_str(&format!("- **Oracle Error**: {}\n", error));
                }

                if !result.report.failures.is_empty() || !result.report.missing.is_empty() {
                    md.push('\n');
                    for failure in &result.report.failures {
                        md.push_str(&format!("- {}\n", failure));
                    }
                    for index in &result.report.missing {
                        md.push_str(&format!("- Test {} was not answered\n", index));
                    }
                }

                if result.status != SuiteStatus::Invalid {
                    md.push_str(&format!("\n```\n{}\n```\n", result.raw_response));
                }
                md.push('\n');
            }
        }

        Ok(md)
    }
}
