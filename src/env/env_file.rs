//! .env file parsing.
//!
//! This module parses dotenv-style files in the standard KEY=value format.
//! The CLI uses it to overlay a file on top of the process environment.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, RunenvError};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Optional `export ` prefix: `export KEY=value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use runenv::env::EnvFileParser;
///
/// let content = r#"
/// # Deployment
/// K_SERVICE=checkout
/// SETTINGS="base64://eyJhIjoxfQ=="
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("K_SERVICE").map(String::as_str), Some("checkout"));
/// assert_eq!(vars.get("SETTINGS").map(String::as_str), Some("base64://eyJhIjoxfQ=="));
/// assert_eq!(vars.get("EMPTY").map(String::as_str), Some(""));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// Lines without `=` are ignored.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path).map_err(|source| RunenvError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded env file");
        Ok(Self::parse(&content))
    }
}
