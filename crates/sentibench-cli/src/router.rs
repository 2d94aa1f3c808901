//! Command routing logic for CLI

use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Run(args) => commands::run::execute(args, cli.verbose).await,
        Commands::List { suites_dir } => commands::list::execute(suites_dir.as_deref()),
        Commands::Validate { suites_dir } => commands::validate::execute(suites_dir.as_deref()),
        Commands::Prompt { suite, suites_dir } => {
            commands::prompt::execute(&suite, suites_dir.as_deref())
        }
    }
}
