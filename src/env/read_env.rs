//! The [`ReadEnv`] lookup abstraction and its basic implementations.

use std::collections::HashMap;
use std::env::VarError;

/// A read-only source of environment variables.
///
/// Implemented for [`SystemEnv`], [`MapEnv`], [`LayeredEnv`](super::LayeredEnv)
/// and for any closure with the same signature as [`std::env::var`]:
///
/// ```
/// use runenv::env::ReadEnv;
///
/// let env = |key: &str| match key {
///     "CI" => Ok("true".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// };
/// assert_eq!(env.non_empty("CI").as_deref(), Some("true"));
/// assert_eq!(env.non_empty("BUILD_ID"), None);
/// ```
pub trait ReadEnv {
    /// Look up a single variable.
    fn var(&self, key: &str) -> Result<String, VarError>;

    /// Look up a variable, treating unset, empty and non-UTF-8 values alike.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).ok().filter(|value| !value.is_empty())
    }

    /// True if the variable is set to a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.non_empty(key).is_some()
    }
}

impl<F> ReadEnv for F
where
    F: Fn(&str) -> Result<String, VarError>,
{
    fn var(&self, key: &str) -> Result<String, VarError> {
        self(key)
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// An in-memory variable table.
///
/// # Example
///
/// ```
/// use runenv::env::{MapEnv, ReadEnv};
///
/// let env = MapEnv::new().with("K_SERVICE", "checkout");
/// assert_eq!(env.var("K_SERVICE").unwrap(), "checkout");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn closures_are_sources() {
        let env = |key: &str| {
            if key == "A" {
                Ok("1".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        };
        assert_eq!(env.var("A").unwrap(), "1");
        assert!(env.var("B").is_err());
    }

    #[test]
    fn empty_value_is_not_set() {
        let env = MapEnv::new().with("EMPTY", "");
        assert!(env.var("EMPTY").is_ok());
        assert_eq!(env.non_empty("EMPTY"), None);
        assert!(!env.is_set("EMPTY"));
    }

    #[test]
    fn non_unicode_value_is_not_set() {
        let env = |_: &str| -> Result<String, VarError> {
            Err(VarError::NotUnicode(OsString::from("x")))
        };
        assert_eq!(env.non_empty("ANY"), None);
    }

    #[test]
    fn map_env_from_iterator() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.non_empty("B").as_deref(), Some("2"));
    }

    #[test]
    fn map_env_set_replaces() {
        let mut env = MapEnv::new();
        assert!(env.is_empty());
        env.set("KEY", "old");
        env.set("KEY", "new");
        assert_eq!(env.var("KEY").unwrap(), "new");
    }

    #[test]
    fn system_env_reads_path() {
        // PATH is present in any normal test process
        assert!(SystemEnv.var("PATH").is_ok());
    }
}
