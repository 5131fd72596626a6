//! Error types for runenv operations.
//!
//! This module defines [`RunenvError`], the error type returned by every
//! fallible classifier and reader operation, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The library never terminates the process; every fatal condition is
//!   returned as a `RunenvError` naming the variable or path involved
//! - The `runenv` binary escalates any error to exit code 1
//! - Use `anyhow::Error` (via `RunenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runenv operations.
#[derive(Debug, Error)]
pub enum RunenvError {
    /// A required variable was absent or empty.
    #[error("missing {name} environment variable")]
    MissingRequired { name: String },

    /// A `base64://` value could not be decoded.
    #[error("invalid base64 {name} environment variable: {source}")]
    MalformedEncoding {
        name: String,
        #[source]
        source: base64::DecodeError,
    },

    /// A value could not be parsed as JSON.
    #[error("invalid json {name} environment variable: {source}")]
    MalformedStructuredValue {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a local file failed for a reason other than "not found".
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host name could not be retrieved.
    #[error("failed to get hostname: {0}")]
    Hostname(#[source] std::io::Error),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for runenv operations.
pub type Result<T> = std::result::Result<T, RunenvError>;
