//! Console report: the per-suite prompt, reply and grading lines

use colored::{ColoredString, Colorize};

use crate::metrics::{EvalMetrics, SuiteResult, SuiteStatus};

/// Renders each suite the way an operator reads it in a terminal
pub struct ConsoleReporter {
    color: bool,
    show_prompt: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            show_prompt: true,
        }
    }

    /// Omit the batch prompt from each suite block
    pub fn without_prompts(mut self) -> Self {
        self.show_prompt = false;
        self
    }

    /// Full report: every suite block followed by the overall line
    pub fn generate(&self, metrics: &EvalMetrics) -> String {
        let mut output = String::new();

        for result in &metrics.suite_results {
            output.push_str(&self.suite_block(result));
            output.push('\n');
        }

        output.push_str(&self.overall_line(metrics));
        output.push('\n');

        output
    }

    /// Closing line summing every suite
    pub fn overall_line(&self, metrics: &EvalMetrics) -> String {
        let overall = format!(
            "Overall: {}/{} tests passed ({}) across {} suite(s).",
            metrics.overall.passed,
            metrics.overall.total,
            metrics.overall.as_percentage(),
            metrics.suite_results.len()
        );
        if metrics.all_passed() {
            self.paint(&overall, |s| s.green())
        } else {
            self.paint(&overall, |s| s.yellow())
        }
    }

    /// One suite: header, prompt, raw reply, failure and missing lines, summary
    pub fn suite_block(&self, result: &SuiteResult) -> String {
        let mut out = String::new();

        let header = format!("=== {} ({}) ===", result.display_name, result.suite);
        out.push_str(&self.paint(&header, |s| s.bold()));
        out.push('\n');

        if result.status == SuiteStatus::Invalid {
            let message = result.error_message.as_deref().unwrap_or("unknown error");
            out.push_str(&self.paint(&format!("Suite invalid: {}", message), |s| s.red()));
            out.push('\n');
            out.push_str(&result.report.summary_line());
            out.push('\n');
            return out;
        }

        if self.show_prompt {
            out.push_str(&self.paint("Prompt:", |s| s.cyan()));
            out.push('\n');
            out.push_str(&result.prompt);
            out.push_str("\n\n");
        }

        out.push_str(&self.paint("Response:", |s| s.cyan()));
        out.push('\n');
        out.push_str(&result.raw_response);
        out.push_str("\n\n");

        if let Some(error) = &result.oracle_error {
            out.push_str(&self.paint(&format!("Oracle error: {}", error), |s| s.red()));
            out.push('\n');
        }

        for failure in &result.report.failures {
            out.push_str(&self.paint(&failure.to_string(), |s| s.red()));
            out.push('\n');
        }

        for index in &result.report.missing {
            let line = format!("Test missing at Test {}: no answer was given", index);
            out.push_str(&self.paint(&line, |s| s.yellow()));
            out.push('\n');
        }

        if !result.report.duplicates.is_empty() {
            let indices: Vec<String> = result
                .report
                .duplicates
                .iter()
                .map(ToString::to_string)
                .collect();
            out.push_str(&self.paint(
                &format!("Answered more than once: {}", indices.join(", ")),
                |s| s.yellow(),
            ));
            out.push('\n');
        }

        let summary = result.report.summary_line();
        let summary = if result.passed() {
            self.paint(&summary, |s| s.green())
        } else {
            summary
        };
        out.push_str(&summary);
        out.push('\n');

        out
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::sample_metrics;

    #[test]
    fn test_suite_block_lines() {
        let metrics = sample_metrics();
        let block = ConsoleReporter::new(false).suite_block(&metrics.suite_results[0]);

        assert!(block.starts_with("=== Cross-lingual sentiment (cross_lingual) ===\n"));
        assert!(block.contains("Prompt:\nClassify.\n\nTest 1: Good."));
        assert!(block.contains("Response:\nTest 1 - Positive\nTest 2 - Positive"));
        assert!(block.contains("Test failed at Test 2: Expected \"Negative\", but got \"Positive\"\n"));
        assert!(block.contains("Test missing at Test 3: no answer was given\n"));
        assert!(block.ends_with("1/3 tests passed.\n"));
    }

    #[test]
    fn test_invalid_suite_block() {
        let metrics = sample_metrics();
        let block = ConsoleReporter::new(false).suite_block(&metrics.suite_results[1]);

        assert!(block.contains("Suite invalid: case 1 expects 'Mixed'"));
        assert!(block.ends_with("0/2 tests passed.\n"));
        assert!(!block.contains("Response:"));
    }

    #[test]
    fn test_without_prompts() {
        let metrics = sample_metrics();
        let report = ConsoleReporter::new(false).without_prompts().generate(&metrics);

        assert!(!report.contains("Prompt:"));
        assert!(report.contains("Overall: 1/5 tests passed (20.0%) across 2 suite(s)."));
    }
}
