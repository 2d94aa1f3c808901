//! `sentibench list`

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use super::loader_for;

/// List available suites
pub fn execute(suites_dir: Option<&Path>) -> Result<ExitCode> {
    let loader = loader_for(suites_dir);
    let suites = loader.load_all()?;

    if suites.is_empty() {
        println!("No suites found in {}.", loader.suites_dir().display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("Available suites:\n");
    println!("{:<24} {:<36} {:>6}  {}", "Name", "Vocabulary", "Cases", "Tags");
    println!("{:-<80}", "");

    for suite in &suites {
        println!(
            "{:<24} {:<36} {:>6}  {}",
            suite.name,
            suite.vocabulary.to_string(),
            suite.len(),
            suite.tags.join(", ")
        );
    }

    let cases: usize = suites.iter().map(|s| s.len()).sum();
    println!("\nTotal: {} suites, {} cases", suites.len(), cases);

    Ok(ExitCode::SUCCESS)
}
