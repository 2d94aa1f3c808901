//! Google (Gemini) oracle

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::Oracle;
use crate::config::OracleConfig;
use crate::error::{BenchError, BenchResult};

const PROVIDER: &str = "google";

/// Gemini `generateContent` client
pub struct GeminiOracle {
    config: OracleConfig,
    http_client: Client,
}

impl GeminiOracle {
    /// Create an oracle with its own HTTP client
    pub fn new(config: OracleConfig) -> BenchResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                BenchError::config_with_context(e.to_string(), "Failed to build HTTP client")
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create an oracle sharing an existing HTTP client
    pub fn with_client(config: OracleConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        });

        if let Some(temperature) = self.config.temperature {
            body["generationConfig"] = json!({ "temperature": temperature });
        }

        body
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    fn name(&self) -> String {
        PROVIDER.to_string()
    }

    fn model(&self) -> String {
        self.config.model.clone()
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_chars = prompt.len()), level = "debug")]
    async fn invoke(&self, prompt: &str) -> BenchResult<String> {
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&self.request_body(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(BenchError::oracle_with_provider(
                format!("Google API error (status {}): {}", status, error_text),
                PROVIDER,
            ));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            BenchError::oracle_with_provider(
                format!("Failed to parse Google response: {}", e),
                PROVIDER,
            )
        })?;

        debug!(
            "Google API response: {}",
            serde_json::to_string_pretty(&response_json)
                .unwrap_or_else(|_| "Failed to serialize".to_string())
        );

        extract_text(&response_json)
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn extract_text(response: &Value) -> BenchResult<String> {
    let candidates = response["candidates"]
        .as_array()
        .ok_or_else(|| no_text(response, "No candidates in Google response"))?;

    let candidate = candidates
        .first()
        .ok_or_else(|| no_text(response, "Empty candidates array in Google response"))?;

    let parts = candidate["content"]["parts"]
        .as_array()
        .ok_or_else(|| no_text(response, "No content parts in Google response"))?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

    Ok(text.trim().to_string())
}

fn no_text(response: &Value, message: &str) -> BenchError {
    // A blocked prompt comes back without candidates but with a reason.
    match response["promptFeedback"]["blockReason"].as_str() {
        Some(reason) => BenchError::oracle_with_provider(
            format!("{} (prompt blocked: {})", message, reason),
            PROVIDER,
        ),
        None => BenchError::oracle_with_provider(message, PROVIDER),
    }
}
