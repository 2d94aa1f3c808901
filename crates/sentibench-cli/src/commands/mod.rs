//! CLI commands

pub mod list;
pub mod prompt;
pub mod run;
pub mod validate;

use std::path::Path;

use sentibench_eval::SuiteLoader;

/// Loader for `--suites-dir`, or the bundled suites
pub(crate) fn loader_for(suites_dir: Option<&Path>) -> SuiteLoader {
    match suites_dir {
        Some(dir) => SuiteLoader::new(dir),
        None => SuiteLoader::builtin(),
    }
}
