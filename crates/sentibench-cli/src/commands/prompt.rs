//! `sentibench prompt`: show what a suite would send

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use sentibench_core::PromptBatcher;

use super::loader_for;

/// Print the batch prompt for one suite
pub fn execute(name: &str, suites_dir: Option<&Path>) -> Result<ExitCode> {
    let suite = loader_for(suites_dir)
        .load_by_name(name)?
        .with_context(|| format!("Unknown suite '{}'", name))?;
    suite.validate()?;

    let prompt = PromptBatcher::batch_checked(&suite.instruction(), &suite.test_cases())?;
    println!("{}", prompt);

    Ok(ExitCode::SUCCESS)
}
