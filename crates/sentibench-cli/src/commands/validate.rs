//! `sentibench validate`: offline checks for suite files

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use super::loader_for;
use crate::console::CliConsole;

/// Validate every suite file; exits non-zero if any is unusable
pub fn execute(suites_dir: Option<&Path>) -> Result<ExitCode> {
    let console = CliConsole::new(true);
    let loader = loader_for(suites_dir);
    let scanned = loader.scan()?;

    let mut invalid = 0;
    for (path, loaded) in &scanned {
        let outcome = loaded
            .as_ref()
            .map_err(|e| format!("{:#}", e))
            .and_then(|suite| {
                suite
                    .validate()
                    .map(|_| suite)
                    .map_err(|e| e.to_string())
            });

        match outcome {
            Ok(suite) => console.success(&format!(
                "{} ({} cases, {})",
                suite.name,
                suite.len(),
                suite.vocabulary
            )),
            Err(message) => {
                invalid += 1;
                console.error(&format!("{}: {}", path.display(), message));
            }
        }
    }

    // Duplicate names only surface when loading the whole directory
    if let Err(e) = loader.load_all() {
        invalid += 1;
        console.error(&format!("{:#}", e));
    }

    if invalid > 0 {
        console.error(&format!("{} of {} suite file(s) invalid", invalid, scanned.len()));
        return Ok(ExitCode::FAILURE);
    }

    console.success(&format!("All {} suite file(s) valid", scanned.len()));
    Ok(ExitCode::SUCCESS)
}
