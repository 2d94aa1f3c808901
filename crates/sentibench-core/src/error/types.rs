//! Core error type

use thiserror::Error;

/// Result type alias for SentiBench operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for SentiBench
#[derive(Error, Debug, Clone)]
pub enum BenchError {
    /// Configuration related errors (missing credential, bad env values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Suite definition errors (vocabulary/instruction mismatch, bad labels)
    #[error("Suite error: {suite}: {message}")]
    Suite { suite: String, message: String },

    /// Oracle invocation errors
    #[error("Oracle error: {message}")]
    Oracle {
        message: String,
        provider: Option<String>,
        context: Option<String>,
    },

    /// HTTP transport errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// JSON/YAML serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Oracle call exceeded its deadline
    #[error("Oracle call timed out after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl BenchError {
    /// Short machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            BenchError::Config { .. } => "BENCH_CONFIG",
            BenchError::Suite { .. } => "BENCH_SUITE",
            BenchError::Oracle { .. } => "BENCH_ORACLE",
            BenchError::Http { .. } => "BENCH_HTTP",
            BenchError::Io { .. } => "BENCH_IO",
            BenchError::Serialization { .. } => "BENCH_SERIALIZATION",
            BenchError::InvalidInput { .. } => "BENCH_INVALID_INPUT",
            BenchError::Timeout { .. } => "BENCH_TIMEOUT",
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Only used for log output; the harness never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            BenchError::Timeout { .. } => true,
            BenchError::Http { status_code, .. } => match status_code {
                Some(code) => *code == 429 || *code >= 500,
                None => true,
            },
            _ => false,
        }
    }
}
