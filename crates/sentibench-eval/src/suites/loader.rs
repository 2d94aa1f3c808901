//! Suite loading from YAML/JSON files
//!
//! Loads suites from the bundled `suites/` directory or a custom path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use super::SuiteDescriptor;

/// Loader for evaluation suites
pub struct SuiteLoader {
    /// Base directory for suite files
    suites_dir: PathBuf,
}

impl SuiteLoader {
    /// Create a loader over the given directory
    pub fn new(suites_dir: impl AsRef<Path>) -> Self {
        Self {
            suites_dir: suites_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a loader for the bundled suites
    pub fn builtin() -> Self {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        Self::new(Path::new(manifest_dir).join("suites"))
    }

    /// Directory this loader reads from
    pub fn suites_dir(&self) -> &Path {
        &self.suites_dir
    }

    /// Load every suite file, sorted by name.
    ///
    /// Files that fail to parse are skipped with a warning; two files
    /// declaring the same suite name are an error.
    pub fn load_all(&self) -> Result<Vec<SuiteDescriptor>> {
        let mut suites = Vec::new();

        for (path, loaded) in self.scan()? {
            match loaded {
                Ok(suite) => suites.push(suite),
                Err(e) => {
                    tracing::warn!("Failed to load suite from {:?}: {:#}", path, e);
                }
            }
        }

        let mut seen = HashSet::new();
        for suite in &suites {
            if !seen.insert(suite.name.as_str()) {
                bail!(
                    "Suite '{}' is defined more than once under {}",
                    suite.name,
                    self.suites_dir.display()
                );
            }
        }

        suites.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(count = suites.len(), dir = %self.suites_dir.display(), "Loaded suites");

        Ok(suites)
    }

    /// Every suite file under the directory with its parse outcome, in path
    /// order
    pub fn scan(&self) -> Result<Vec<(PathBuf, Result<SuiteDescriptor>)>> {
        if !self.suites_dir.exists() {
            bail!("Suites directory not found: {}", self.suites_dir.display());
        }

        Ok(WalkDir::new(&self.suites_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| Self::is_suite_file(e.path()))
            .map(|e| {
                let path = e.into_path();
                let loaded = self.load_suite_file(&path);
                (path, loaded)
            })
            .collect())
    }

    /// Load a single suite by name
    pub fn load_by_name(&self, name: &str) -> Result<Option<SuiteDescriptor>> {
        let all_suites = self.load_all()?;
        Ok(all_suites.into_iter().find(|s| s.name == name))
    }

    /// Load the named suites in the given order; unknown names are an error
    pub fn load_names(&self, names: &[String]) -> Result<Vec<SuiteDescriptor>> {
        let all_suites = self.load_all()?;
        names
            .iter()
            .map(|name| {
                all_suites
                    .iter()
                    .find(|s| &s.name == name)
                    .cloned()
                    .with_context(|| {
                        format!(
                            "Unknown suite '{}' (available: {})",
                            name,
                            all_suites
                                .iter()
                                .map(|s| s.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        )
                    })
            })
            .collect()
    }

    /// Load suites carrying a tag
    pub fn load_by_tag(&self, tag: &str) -> Result<Vec<SuiteDescriptor>> {
        let all_suites = self.load_all()?;
        Ok(all_suites
            .into_iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect())
    }

    /// Load a suite from a file path
    pub fn load_suite_file(&self, path: &Path) -> Result<SuiteDescriptor> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read suite file: {:?}", path))?;

        let suite = if path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
            load_suite_from_yaml(&content)
                .with_context(|| format!("Failed to parse YAML suite: {:?}", path))?
        } else {
            load_suite_from_json(&content)
                .with_context(|| format!("Failed to parse JSON suite: {:?}", path))?
        };

        Ok(suite)
    }

    /// Check if a path is a suite file
    fn is_suite_file(path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml") | Some("json")
        )
    }

    /// List available suite names
    pub fn list_names(&self) -> Result<Vec<String>> {
        let suites = self.load_all()?;
        Ok(suites.into_iter().map(|s| s.name).collect())
    }
}

/// Load a single suite from a YAML string
pub fn load_suite_from_yaml(yaml: &str) -> Result<SuiteDescriptor> {
    let suite: SuiteDescriptor = serde_yaml::from_str(yaml)?;
    Ok(suite)
}

/// Load a single suite from a JSON string
pub fn load_suite_from_json(json: &str) -> Result<SuiteDescriptor> {
    let suite: SuiteDescriptor = serde_json::from_str(json)?;
    Ok(suite)
}
