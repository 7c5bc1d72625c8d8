//! Environment variable layering.
//!
//! Resolution applies sources one after another onto a single
//! [`LayeredEnv`] accumulator. Later writes win, every entry remembers the
//! source that supplied its current value, and keys keep the position of
//! their first introduction.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::config::RawEnvMap;

/// Where a resolved value came from, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    /// Copied from the host process environment.
    Host,
    /// Derived from discovered credentials.
    Credentials,
    /// Read from a `.env` file.
    EnvFile(PathBuf),
    /// Set explicitly in the configuration.
    Config,
}

impl fmt::Display for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Credentials => write!(f, "credentials"),
            Self::EnvFile(path) => write!(f, "env file {}", path.display()),
            Self::Config => write!(f, "config"),
        }
    }
}

/// A single resolved variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVar {
    /// Variable name.
    pub key: String,
    /// Winning value.
    pub value: String,
    /// Source of the winning value.
    pub source: EnvSource,
}

impl fmt::Display for ResolvedVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered accumulator of resolved variables.
///
/// # Example
///
/// ```
/// use sandenv::environment::{EnvSource, LayeredEnv};
///
/// let mut env = LayeredEnv::new();
/// env.set("KEY", "base_value", EnvSource::Host);
/// env.set("HOST_ONLY", "from_host", EnvSource::Host);
/// env.set("KEY", "override_value", EnvSource::Config);
///
/// assert_eq!(env.get("KEY"), Some("override_value"));
/// assert_eq!(env.get("HOST_ONLY"), Some("from_host"));
/// assert_eq!(env.source_of("KEY"), Some(&EnvSource::Config));
/// assert_eq!(env.keys().collect::<Vec<_>>(), vec!["KEY", "HOST_ONLY"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayeredEnv {
    entries: Vec<ResolvedVar>,
    index: HashMap<String, usize>,
}

impl LayeredEnv {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any earlier value and source.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, source: EnvSource) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key).copied() {
            Some(pos) => {
                let entry = &mut self.entries[pos];
                entry.value = value;
                entry.source = source;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(ResolvedVar { key, value, source });
            }
        }
    }

    /// Overlay every variable in `vars`, tagging each with `source`.
    pub fn overlay<K, V>(&mut self, vars: impl IntoIterator<Item = (K, V)>, source: &EnvSource)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.set(key, value, source.clone());
        }
    }

    /// Overlay a parsed env file.
    pub fn overlay_map(&mut self, vars: RawEnvMap, source: &EnvSource) {
        self.overlay(vars, source);
    }

    /// Get the resolved entry for a variable.
    pub fn entry(&self, key: &str) -> Option<&ResolvedVar> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Get the resolved value for a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.value.as_str())
    }

    /// Get the source of a variable's value.
    pub fn source_of(&self, key: &str) -> Option<&EnvSource> {
        self.entry(key).map(|e| &e.source)
    }

    /// Check if a variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over keys in first-introduced order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// All entries in first-introduced order.
    pub fn entries(&self) -> &[ResolvedVar] {
        &self.entries
    }

    /// Consume the accumulator, yielding its entries.
    pub fn into_entries(self) -> Vec<ResolvedVar> {
        self.entries
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
