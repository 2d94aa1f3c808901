//! From trait implementations for BenchError conversions

use super::types::BenchError;

impl From<std::io::Error> for BenchError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON: {}", error))
    }
}

impl From<serde_yaml::Error> for BenchError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(format!("YAML: {}", error))
    }
}

impl From<reqwest::Error> for BenchError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        // Strip the query string: the Gemini endpoint carries the API key there.
        let url = error.url().map(|u| {
            let mut u = u.clone();
            u.set_query(None);
            u.to_string()
        });
        Self::Http {
            message: error.without_url().to_string(),
            url,
            status_code,
        }
    }
}
