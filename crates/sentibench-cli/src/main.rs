//! SentiBench CLI application
//!
//! Runs sentiment suites against an LLM oracle and reports how many cases the
//! oracle classified correctly.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/sentibench-cli
//! ```

mod args;
mod commands;
mod console;
mod router;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::console::CliConsole;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a local .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match router::route(cli).await {
        Ok(code) => code,
        Err(e) => {
            CliConsole::new(false).error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
