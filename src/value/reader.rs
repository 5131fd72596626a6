//! The value reader.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::env::{ReadEnv, SystemEnv};
use crate::error::{Result, RunenvError};

/// Marks a value as base64 encoded. Matched case-sensitively.
pub const BASE64_PREFIX: &str = "base64://";

/// Standard alphabet with required padding. Non-zero trailing bits in the
/// last symbol are tolerated.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a raw variable value.
///
/// Values starting with [`BASE64_PREFIX`] have the prefix stripped and the
/// rest decoded with the standard padded alphabet. Line breaks inside the
/// body are skipped, so wrapped output of `base64` works as-is. Decoded bytes
/// that are not valid UTF-8 are converted lossily. Anything else is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use runenv::value::decode_value;
///
/// assert_eq!(decode_value("X", "base64://aGVsbG8=".into()).unwrap(), "hello");
/// assert_eq!(decode_value("X", "BASE64://aGVsbG8=".into()).unwrap(), "BASE64://aGVsbG8=");
/// assert!(decode_value("X", "base64://!!!invalid!!!".into()).is_err());
/// ```
pub fn decode_value(name: &str, raw: String) -> Result<String> {
    let Some(body) = raw.strip_prefix(BASE64_PREFIX) else {
        return Ok(raw);
    };
    let body: String = body.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let bytes = DECODER
        .decode(body)
        .map_err(|source| RunenvError::MalformedEncoding {
            name: name.to_string(),
            source,
        })?;
    tracing::trace!(name, len = bytes.len(), "decoded base64 value");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads named variables from a source, decoding them on the way out.
///
/// # Example
///
/// ```
/// use runenv::env::MapEnv;
/// use runenv::value::ValueReader;
///
/// let reader = ValueReader::new(MapEnv::new().with("GREETING", "base64://aGVsbG8="));
/// assert_eq!(reader.must_read("GREETING").unwrap(), "hello");
/// assert_eq!(reader.optional_read("MISSING").unwrap(), "");
/// assert!(reader.must_read("MISSING").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValueReader<E = SystemEnv> {
    env: E,
}

impl ValueReader<SystemEnv> {
    /// Reader over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> ValueReader<E> {
    /// Reader over an injected variable source.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Read and decode a variable.
    ///
    /// Returns an empty string when the variable is unset or empty.
    pub fn optional_read(&self, name: &str) -> Result<String> {
        match self.env.non_empty(name) {
            Some(raw) => decode_value(name, raw),
            None => Ok(String::new()),
        }
    }

    /// Read and decode a variable that must be present.
    ///
    /// A value that decodes to an empty string counts as missing.
    pub fn must_read(&self, name: &str) -> Result<String> {
        let value = self.optional_read(name)?;
        if value.is_empty() {
            return Err(RunenvError::MissingRequired {
                name: name.to_string(),
            });
        }
        Ok(value)
    }

    /// Read a required variable and parse it as JSON.
    pub fn must_read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.must_read(name)?;
        parse_json(name, &value)
    }

    /// Read a variable and parse it as JSON, or `None` if it is unset.
    pub fn optional_read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let value = self.optional_read(name)?;
        if value.is_empty() {
            return Ok(None);
        }
        parse_json(name, &value).map(Some)
    }
}

fn parse_json<T: DeserializeOwned>(name: &str, value: &str) -> Result<T> {
    serde_json::from_str(value).map_err(|source| RunenvError::MalformedStructuredValue {
        name: name.to_string(),
        source,
    })
}
