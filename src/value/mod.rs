//! Reading configuration values from environment variables.
//!
//! A value may be wrapped as `base64://<standard base64>`; the wrapper is
//! removed and the body decoded before the value is returned. Unset and
//! empty variables are the same thing here.
//!
//! The free functions read the process environment. Use a [`ValueReader`]
//! to read from any other [`ReadEnv`](crate::env::ReadEnv) source.

pub mod reader;

pub use reader::{decode_value, ValueReader, BASE64_PREFIX};

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read and decode a variable, returning an empty string if it is unset.
pub fn optional_read(name: &str) -> Result<String> {
    ValueReader::system().optional_read(name)
}

/// Read and decode a variable that must be set and non-empty.
pub fn must_read(name: &str) -> Result<String> {
    ValueReader::system().must_read(name)
}

/// Read a required variable and parse it as JSON.
pub fn must_read_json<T: DeserializeOwned>(name: &str) -> Result<T> {
    ValueReader::system().must_read_json(name)
}

/// Read an optional variable and parse it as JSON when present.
pub fn optional_read_json<T: DeserializeOwned>(name: &str) -> Result<Option<T>> {
    ValueReader::system().optional_read_json(name)
}
