//! `sentibench run`: send suites to the oracle and report the grades

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use sentibench_core::{DuplicatePolicy, GeminiOracle, Oracle, OracleConfig};
use sentibench_eval::{
    ConsoleReporter, EvalConfig, EvalEvent, EvalExecutor, ReportFormat, generate_report,
};

use crate::args::RunArgs;
use crate::console::CliConsole;

/// Run evaluation suites
pub async fn execute(args: RunArgs, verbose: bool) -> Result<ExitCode> {
    let format: ReportFormat = args.format.parse()?;
    let policy: DuplicatePolicy = args.duplicates.parse()?;
    let console = CliConsole::new(verbose);

    // Credentials are checked before any suite is loaded or sent
    let mut oracle_config =
        OracleConfig::from_env().context("Oracle credentials are not configured")?;
    if let Some(secs) = args.timeout {
        oracle_config = oracle_config.with_timeout(secs);
    }
    if let Some(model) = &args.model {
        oracle_config = oracle_config.with_model(model);
    }
    console.info(&format!(
        "Oracle: {} at {} (key {})",
        oracle_config.model,
        oracle_config.base_url,
        oracle_config.masked_key()
    ));

    let eval_config = build_config(&args, policy, oracle_config.timeout_secs);
    let oracle: Arc<dyn Oracle> = Arc::new(GeminiOracle::new(oracle_config)?);
    let mut executor = EvalExecutor::new(eval_config, oracle);

    let suites = executor.load_suites()?;
    if suites.is_empty() {
        console.warn("No suites matched the selection.");
        return Ok(ExitCode::SUCCESS);
    }

    let color = std::io::stdout().is_terminal();
    let mut reporter = ConsoleReporter::new(color);
    if args.no_prompt {
        reporter = reporter.without_prompts();
    }

    // Console output is streamed suite by suite; other formats are rendered
    // once every suite has finished
    let streaming = format == ReportFormat::Console;
    let progress = CliConsole::new(verbose);
    executor.set_event_callback(Box::new(move |event| match event {
        EvalEvent::SuiteStarted {
            current,
            total,
            suite,
            cases,
        } => progress.progress(current, total, &format!("{} ({} cases)", suite, cases)),
        EvalEvent::SuiteCompleted { result, .. } => {
            if streaming {
                println!("{}", reporter.suite_block(&result));
            } else {
                progress.info(&format!(
                    "{}: {}",
                    result.suite,
                    result.report.summary_line()
                ));
            }
        }
    }));

    tracing::debug!(suites = suites.len(), ?format, %policy, "Starting evaluation");
    let metrics = executor.run_suites(suites).await;

    if streaming {
        println!("{}", ConsoleReporter::new(color).overall_line(&metrics));
    } else {
        println!("{}", generate_report(&metrics, format, color)?);
    }

    console.info(&format!(
        "Evaluation complete: {}/{} cases passed ({:.1}%)",
        metrics.passed_count(),
        metrics.total_count(),
        metrics.overall_pass_rate() * 100.0
    ));

    if metrics.oracle_errors > 0 {
        console.warn(&format!(
            "{} suite(s) got no reply from the oracle",
            metrics.oracle_errors
        ));
    }
    if metrics.invalid_suites > 0 {
        console.warn(&format!(
            "{} suite(s) failed validation and were not run",
            metrics.invalid_suites
        ));
    }

    if executor.is_failure(&metrics) {
        console.error("Strict mode: not every suite passed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn build_config(args: &RunArgs, policy: DuplicatePolicy, timeout_secs: u64) -> EvalConfig {
    let mut config = EvalConfig::new()
        .with_suite_names(args.suites.clone())
        .with_tags(args.tags.clone())
        .with_timeout(timeout_secs)
        .with_duplicate_policy(policy);

    if let Some(dir) = &args.suites_dir {
        config = config.with_suites_dir(dir);
    }
    if args.parallel {
        config = config.parallel();
    }
    if args.strict {
        config = config.strict();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Commands};
    use clap::Parser;

    fn run_args(argv: &[&str]) -> RunArgs {
        let mut full = vec!["sentibench", "run"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Run(args) => args,
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_build_config_from_flags() {
        let args = run_args(&[
            "--suite",
            "negation_noise",
            "--tag",
            "english",
            "--suites-dir",
            "/tmp/suites",
            "--parallel",
            "--strict",
        ]);
        let config = build_config(&args, DuplicatePolicy::LastWins, 30);

        assert_eq!(config.suite_names, vec!["negation_noise"]);
        assert_eq!(config.tags, vec!["english"]);
        assert_eq!(config.suites_dir.as_deref(), Some(std::path::Path::new("/tmp/suites")));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWins);
        assert!(config.parallel);
        assert!(config.strict);
    }
}
