//! Layered environment sources.
//!
//! A [`LayeredEnv`] stacks named variable layers on top of a base source.
//! Later layers win, and the base is consulted last.

use std::collections::HashMap;
use std::env::VarError;

use super::read_env::{ReadEnv, SystemEnv};

/// A named layer of variables.
///
/// # Example
///
/// ```
/// use runenv::env::EnvLayer;
///
/// let mut layer = EnvLayer::new(".env.local");
/// layer.set("VERSION", "v1.2.3");
///
/// assert_eq!(layer.vars["VERSION"], "v1.2.3");
/// assert_eq!(layer.source, ".env.local");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    /// Variables in this layer.
    pub vars: HashMap<String, String>,
    /// Where the layer came from.
    pub source: String,
}

impl EnvLayer {
    /// Create an empty layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            source: source.into(),
        }
    }

    /// Create a layer from already-parsed variables.
    pub fn from_vars(source: impl Into<String>, vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            source: source.into(),
        }
    }

    /// Add a variable to this layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

/// Layers of variables over a base source.
///
/// # Example
///
/// ```
/// use runenv::env::{EnvLayer, LayeredEnv, MapEnv, ReadEnv};
///
/// let base = MapEnv::new().with("K_SERVICE", "from-base").with("CI", "true");
/// let mut env = LayeredEnv::over(base);
///
/// let mut overlay = EnvLayer::new(".env");
/// overlay.set("K_SERVICE", "checkout");
/// env.push(overlay);
///
/// assert_eq!(env.var("K_SERVICE").unwrap(), "checkout");
/// assert_eq!(env.var("CI").unwrap(), "true");
/// ```
#[derive(Debug, Clone)]
pub struct LayeredEnv<B = SystemEnv> {
    base: B,
    /// Layers from lowest to highest priority.
    layers: Vec<EnvLayer>,
}

impl LayeredEnv<SystemEnv> {
    /// Layers over the process environment.
    pub fn system() -> Self {
        Self::over(SystemEnv)
    }
}

impl<B: ReadEnv> LayeredEnv<B> {
    /// Layers over an arbitrary base source.
    pub fn over(base: B) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Add a layer. Later layers have higher priority.
    pub fn push(&mut self, layer: EnvLayer) {
        self.layers.push(layer);
    }
}

impl<B: ReadEnv> ReadEnv for LayeredEnv<B> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        // Higher index = higher priority
        let hit = self
            .layers
            .iter()
            .rev()
            .find_map(|l| l.vars.get(key).map(|value| (l, value)));
        match hit {
            Some((layer, value)) => {
                tracing::trace!(key, source = %layer.source, "variable read from layer");
                Ok(value.clone())
            }
            None => self.base.var(key),
        }
    }
}
