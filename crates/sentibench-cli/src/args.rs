//! CLI argument definitions using clap
//!
//! - sentibench run                  # Run every bundled suite
//! - sentibench run --suite NAME     # Run selected suites, in order
//! - sentibench list                 # Show available suites
//! - sentibench validate             # Check suites offline
//! - sentibench prompt NAME          # Print the batch prompt for a suite

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentibench")]
#[command(about = "SentiBench - batch sentiment evaluation against an LLM oracle")]
#[command(
    long_about = r#"SentiBench - batch sentiment evaluation against an LLM oracle

Each suite is sent to the oracle as one prompt; the reply is parsed line by
line ("Test <n> - <Label>") and graded against the expected labels.

USAGE:
  sentibench run                          # Run every bundled suite
  sentibench run --suite cross_lingual    # Run one suite
  sentibench run --format json --strict   # Machine-readable, fail on any miss
  sentibench list                         # Show available suites

ENVIRONMENT:
  API_KEY / GOOGLE_API_KEY / GEMINI_API_KEY   Oracle credentials
  SENTIBENCH_MODEL                            Model (default gemini-1.5-flash)
  RUST_LOG                                    Log filter (logs go to stderr)"#
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run suites against the oracle and report the graded results
    Run(RunArgs),

    /// List available suites
    List {
        /// Directory to load suites from (bundled suites by default)
        #[arg(long)]
        suites_dir: Option<PathBuf>,
    },

    /// Validate suites without calling the oracle
    Validate {
        /// Directory to load suites from (bundled suites by default)
        #[arg(long)]
        suites_dir: Option<PathBuf>,
    },

    /// Print the exact batch prompt a suite would send
    Prompt {
        /// Suite name
        suite: String,

        /// Directory to load suites from (bundled suites by default)
        #[arg(long)]
        suites_dir: Option<PathBuf>,
    },
}

#[derive(clap::Args, Clone)]
pub struct RunArgs {
    /// Suite to run (repeatable; runs in the given order)
    #[arg(long = "suite", short = 's')]
    pub suites: Vec<String>,

    /// Only run suites carrying this tag (repeatable)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Directory to load suites from (bundled suites by default)
    #[arg(long)]
    pub suites_dir: Option<PathBuf>,

    /// Report format: console, table, json, markdown
    #[arg(long, short, default_value = "console")]
    pub format: String,

    /// Timeout per oracle call in seconds (overrides SENTIBENCH_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Model to evaluate (overrides SENTIBENCH_MODEL)
    #[arg(long, short)]
    pub model: Option<String>,

    /// How to grade cases answered more than once: count-each, first-wins, last-wins
    #[arg(long, default_value = "count-each")]
    pub duplicates: String,

    /// Run suites concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Exit with code 1 unless every suite passes completely
    #[arg(long)]
    pub strict: bool,

    /// Leave the batch prompt out of the console report
    #[arg(long)]
    pub no_prompt: bool,
}
