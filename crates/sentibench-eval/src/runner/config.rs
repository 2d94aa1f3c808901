//! Evaluation configuration
//!
//! Configuration options for running evaluations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use sentibench_core::DuplicatePolicy;

/// Configuration for evaluation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Directory to load suites from (bundled suites when unset)
    pub suites_dir: Option<PathBuf>,

    /// Suite names to run, in order (empty = all)
    #[serde(default)]
    pub suite_names: Vec<String>,

    /// Tags to filter by (empty = all)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Timeout per oracle call in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Policy for repeated verdicts
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Run suites concurrently
    #[serde(default)]
    pub parallel: bool,

    /// Treat any imperfect suite as a failed run
    #[serde(default)]
    pub strict: bool,
}

fn default_timeout() -> u64 {
    120
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            suites_dir: None,
            suite_names: Vec::new(),
            tags: Vec::new(),
            timeout_secs: default_timeout(),
            duplicate_policy: DuplicatePolicy::default(),
            parallel: false,
            strict: false,
        }
    }
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load suites from a custom directory
    pub fn with_suites_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.suites_dir = Some(dir.into());
        self
    }

    /// Restrict the run to the named suites
    pub fn with_suite_names(mut self, names: Vec<String>) -> Self {
        self.suite_names = names;
        self
    }

    /// Restrict the run to suites carrying any of these tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the oracle timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the duplicate-verdict policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Run suites concurrently
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Fail the run on any imperfect suite
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvalConfig::default();
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::CountEach);
        assert!(!config.parallel);
        assert!(!config.strict);
        assert!(config.suites_dir.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = EvalConfig::new()
            .with_suites_dir("/tmp/suites")
            .with_suite_names(vec!["cross_lingual".to_string()])
            .with_timeout(30)
            .with_duplicate_policy(DuplicatePolicy::FirstWins)
            .parallel()
            .strict();

        assert_eq!(config.suite_names, vec!["cross_lingual"]);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::FirstWins);
        assert!(config.parallel);
        assert!(config.strict);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: EvalConfig =
            serde_json::from_str(r#"{"suites_dir": null, "duplicate_policy": "last-wins"}"#)
                .unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWins);
        assert_eq!(config.timeout_secs, 120);
    }
}
