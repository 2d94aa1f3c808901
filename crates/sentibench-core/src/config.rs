//! Oracle configuration resolved from the process environment

use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Environment variables checked for the API key, in order
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GOOGLE_API_KEY", "GEMINI_API_KEY"];

pub const MODEL_VAR: &str = "SENTIBENCH_MODEL";
pub const BASE_URL_VAR: &str = "SENTIBENCH_BASE_URL";
pub const TIMEOUT_VAR: &str = "SENTIBENCH_TIMEOUT_SECS";
pub const TEMPERATURE_VAR: &str = "SENTIBENCH_TEMPERATURE";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for the Gemini oracle
#[derive(Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// API credential
    pub api_key: String,

    /// Model name, e.g. `gemini-1.5-flash`
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL without trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature, provider default when unset
    #[serde(default)]
    pub temperature: Option<f32>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl OracleConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: None,
        }
    }

    /// Resolve from the process environment.
    ///
    /// Fails when no API key variable is set, so a run aborts before any
    /// suite is attempted.
    pub fn from_env() -> BenchResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> BenchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .ok_or_else(|| {
                BenchError::config_with_context(
                    "API key not provided",
                    format!("set one of {}", API_KEY_VARS.join(", ")),
                )
            })?;

        let mut config = Self::new(api_key);

        if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.model = model.trim().to_string();
        }

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                BenchError::config(format!("Invalid {} value: '{}'", TIMEOUT_VAR, raw))
            })?;
        }

        if let Some(raw) = lookup(TEMPERATURE_VAR) {
            let temperature: f32 = raw.trim().parse().map_err(|_| {
                BenchError::config(format!("Invalid {} value: '{}'", TEMPERATURE_VAR, raw))
            })?;
            config.temperature = Some(temperature);
        }

        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Key with everything but the last four characters hidden
    pub fn masked_key(&self) -> String {
        mask_api_key(&self.api_key)
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &self.masked_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
