//! Error types for quizdeck operations.
//!
//! [`QuizError`] covers every failure the client can hit: talking to the
//! question store, loading configuration, and driving the terminal.
//!
//! # Error Handling Strategy
//!
//! - Store failures keep their kind (transport, status, decode) here so the
//!   CLI can report them precisely
//! - The state machine only ever sees an opaque [`StoreFailure`] message
//! - Use `anyhow::Error` (via `QuizError::Other`) for unexpected errors
//!
//! [`StoreFailure`]: crate::quiz::StoreFailure

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quizdeck operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON we expected.
    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Configured base URL cannot address the question collection.
    #[error("Invalid endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A prompt was needed but the terminal is not interactive.
    #[error("Cannot prompt for '{key}' in non-interactive mode")]
    NotInteractive { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for quizdeck operations.
pub type Result<T> = std::result::Result<T, QuizError>;
