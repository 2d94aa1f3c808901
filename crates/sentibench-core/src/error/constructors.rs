//! Constructor methods for BenchError

use super::types::BenchError;

impl BenchError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new suite definition error
    pub fn suite(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Suite {
            suite: suite.into(),
            message: message.into(),
        }
    }

    /// Create a new oracle error
    pub fn oracle(message: impl Into<String>) -> Self {
        Self::Oracle {
            message: message.into(),
            provider: None,
            context: None,
        }
    }

    /// Create an oracle error tagged with the provider name
    pub fn oracle_with_provider(message: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::Oracle {
            message: message.into(),
            provider: Some(provider.into()),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error naming the offending field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a timeout error
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_render_messages() {
        let err = BenchError::config("API key not set");
        assert_eq!(err.to_string(), "Configuration error: API key not set");

        let err = BenchError::suite("cross_lingual", "label 'Happy' not in vocabulary");
        assert_eq!(
            err.to_string(),
            "Suite error: cross_lingual: label 'Happy' not in vocabulary"
        );

        let err = BenchError::timeout(30);
        assert_eq!(err.to_string(), "Oracle call timed out after 30 seconds");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(BenchError::timeout(5).is_retryable());
        assert!(!BenchError::config("x").is_retryable());

        let throttled = BenchError::Http {
            message: "too many requests".to_string(),
            url: None,
            status_code: Some(429),
        };
        assert!(throttled.is_retryable());

        let bad_request = BenchError::Http {
            message: "bad request".to_string(),
            url: None,
            status_code: Some(400),
        };
        assert!(!bad_request.is_retryable());
        assert_eq!(bad_request.error_code(), "BENCH_HTTP");
    }
}
