//! Error types for the booking engine.
//!
//! Validation failures are deliberately absent: they are recoverable
//! domain data (`ErrorMap`), displayed inline and cleared on edit, not
//! errors of the engine itself.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Lead delivery errors.
///
/// Only ever observed by the gateway's logging. A failed submission never
/// reaches the visitor and never blocks the booking flow.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Webhook returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
