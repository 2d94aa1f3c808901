//! The classification oracle boundary
//!
//! The oracle is an opaque text-in/text-out service. Everything provider
//! specific lives behind the [`Oracle`] trait so the suite runner can be
//! handed a real client or a test double.

mod gemini;
mod scripted;

pub use gemini::GeminiOracle;
pub use scripted::ScriptedOracle;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{BenchError, BenchResult};

/// Reply substituted for a failed oracle call
pub const ORACLE_ERROR_SENTINEL: &str = "Error occurred during processing";

/// A text classification service under test
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Provider name for reports, e.g. `google`
    fn name(&self) -> String;

    /// Model identifier for reports
    fn model(&self) -> String;

    /// Send one prompt and return the raw reply text
    async fn invoke(&self, prompt: &str) -> BenchResult<String>;
}

/// What the oracle said, or the sentinel if it could not say anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleReply {
    /// Raw reply, [`ORACLE_ERROR_SENTINEL`] on failure
    pub text: String,
    /// Failure reason when the sentinel was substituted
    pub error: Option<String>,
    /// Wall-clock time spent in the call
    pub elapsed_secs: f64,
}

impl OracleReply {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Call the oracle, converting any failure (or timeout) into the sentinel
/// reply instead of propagating it.
///
/// The sentinel parses to zero verdicts, so a failed call degrades its suite
/// to a zero-pass report rather than aborting the run.
pub async fn invoke_or_sentinel(
    oracle: &dyn Oracle,
    prompt: &str,
    timeout: Option<Duration>,
) -> OracleReply {
    let start = Instant::now();

    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, oracle.invoke(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(BenchError::timeout(limit.as_secs())),
        },
        None => oracle.invoke(prompt).await,
    };

    let elapsed_secs = start.elapsed().as_secs_f64();

    match result {
        Ok(text) => {
            info!(
                oracle = %oracle.name(),
                model = %oracle.model(),
                chars = text.len(),
                elapsed_secs,
                "Oracle replied"
            );
            OracleReply {
                text,
                error: None,
                elapsed_secs,
            }
        }
        Err(e) => {
            error!(
                oracle = %oracle.name(),
                error = %e,
                code = e.error_code(),
                retryable = e.is_retryable(),
                "Error generating content"
            );
            OracleReply {
                text: ORACLE_ERROR_SENTINEL.to_string(),
                error: Some(e.to_string()),
                elapsed_secs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_passes_text_through() {
        let mut oracle = MockOracle::new();
        oracle.expect_name().return_const("mock".to_string());
        oracle.expect_model().return_const("mock-1".to_string());
        oracle
            .expect_invoke()
            .withf(|prompt| prompt.starts_with("Classify"))
            .times(1)
            .returning(|_| Ok("Test 1 - Positive".to_string()));

        let reply = invoke_or_sentinel(&oracle, "Classify\n\nTest 1: yay", None).await;
        assert_eq!(reply.text, "Test 1 - Positive");
        assert!(!reply.is_error());
    }

    #[tokio::test]
    async fn test_failure_becomes_sentinel() {
        let mut oracle = MockOracle::new();
        oracle.expect_name().return_const("mock".to_string());
        oracle.expect_model().return_const("mock-1".to_string());
        oracle
            .expect_invoke()
            .returning(|_| Err(BenchError::oracle("quota exceeded")));

        let reply = invoke_or_sentinel(&oracle, "prompt", None).await;
        assert_eq!(reply.text, ORACLE_ERROR_SENTINEL);
        assert!(reply.error.as_deref().unwrap_or("").contains("quota exceeded"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_sentinel() {
        let oracle = ScriptedOracle::fixed("Test 1 - Positive").with_delay(Duration::from_secs(30));

        let reply = invoke_or_sentinel(&oracle, "prompt", Some(Duration::from_secs(5))).await;
        assert_eq!(reply.text, ORACLE_ERROR_SENTINEL);
        assert!(reply.error.as_deref().unwrap_or("").contains("timed out"));
    }
}
