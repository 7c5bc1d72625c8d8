//! .env file parsing.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format.

use crate::error::{Result, SandenvError};
use std::fmt;
use std::path::Path;

/// Ordered mapping of variable name to value.
///
/// Keys keep the position of their first appearance; inserting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnvMap {
    entries: Vec<(String, String)>,
}

impl RawEnvMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, overwriting any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if the map has a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate over `(key, value)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for RawEnvMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Why a line was dropped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line has no `=` separator.
    MissingEquals,
    /// The line has an `=` but nothing before it.
    EmptyKey,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEquals => write!(f, "missing '='"),
            Self::EmptyKey => write!(f, "empty variable name"),
        }
    }
}

/// A dropped line, reported by [`EnvFileParser::parse_with_diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was dropped.
    pub kind: DiagnosticKind,
}

/// Parse result with the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// Parsed variables.
    pub vars: RawEnvMap,
    /// Lines that were skipped as malformed.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Parses .env files into an ordered map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// There is no escape processing, interpolation, multi-line value or
/// `export` prefix support.
///
/// # Example
///
/// ```
/// use sandenv::config::EnvFileParser;
///
/// let content = r#"
/// # Sandbox settings
/// GITHUB_TOKEN=ghp_example
/// GREETING="hello world"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse_str(content);
/// assert_eq!(vars.get("GITHUB_TOKEN"), Some("ghp_example"));
/// assert_eq!(vars.get("GREETING"), Some("hello world"));
/// assert_eq!(vars.get("EMPTY"), Some(""));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content, silently dropping malformed lines.
    pub fn parse_str(content: &str) -> RawEnvMap {
        let output = Self::parse_with_diagnostics(content);
        for diag in &output.diagnostics {
            tracing::debug!("Skipping env line {}: {}", diag.line, diag.kind);
        }
        output.vars
    }

    /// Parse env file content and report every dropped line.
    ///
    /// # Example
    ///
    /// ```
    /// use sandenv::config::{DiagnosticKind, EnvFileParser};
    ///
    /// let output = EnvFileParser::parse_with_diagnostics("A=1\nnot a var\nB=2");
    /// assert_eq!(output.vars.len(), 2);
    /// assert_eq!(output.diagnostics[0].line, 2);
    /// assert_eq!(output.diagnostics[0].kind, DiagnosticKind::MissingEquals);
    /// ```
    pub fn parse_with_diagnostics(content: &str) -> ParseOutput {
        let mut output = ParseOutput::default();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Self::parse_line(line) {
                Ok((key, value)) => output.vars.insert(key, value),
                Err(kind) => output.diagnostics.push(LineDiagnostic {
                    line: idx + 1,
                    kind,
                }),
            }
        }

        output
    }

    /// Parse a single trimmed, non-comment line.
    fn parse_line(line: &str) -> std::result::Result<(&str, &str), DiagnosticKind> {
        let (key, value) = line.split_once('=').ok_or(DiagnosticKind::MissingEquals)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DiagnosticKind::EmptyKey);
        }

        Ok((key, Self::unquote(value.trim())))
    }

    /// Remove one pair of matching surrounding quotes from a value.
    fn unquote(value: &str) -> &str {
        let bytes = value.as_bytes();
        if bytes.len() >= 2
            && (bytes[0] == b'"' || bytes[0] == b'\'')
            && bytes[bytes.len() - 1] == bytes[0]
        {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Read and parse an env file, treating any read failure as empty.
    ///
    /// A missing file is expected and logged at debug level; other read
    /// failures are logged as warnings. Neither is returned to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use sandenv::config::EnvFileParser;
    /// use std::path::Path;
    ///
    /// let vars = EnvFileParser::parse(Path::new("/nonexistent/.env"));
    /// assert!(vars.is_empty());
    /// ```
    pub fn parse(path: &Path) -> RawEnvMap {
        match Self::load(path) {
            Ok(vars) => vars,
            Err(SandenvError::ConfigNotFound { .. }) => {
                tracing::debug!("No env file at {}", path.display());
                RawEnvMap::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable env file {}: {}", path.display(), e);
                RawEnvMap::new()
            }
        }
    }

    /// Read and parse an env file, failing if it cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist, `Io` for other
    /// read failures (including invalid UTF-8).
    pub fn load(path: &Path) -> Result<RawEnvMap> {
        let content = Self::read(path)?;
        Ok(Self::parse_str(&content))
    }

    /// Read and parse an env file, reporting dropped lines.
    ///
    /// # Errors
    ///
    /// Same as [`EnvFileParser::load`].
    pub fn load_with_diagnostics(path: &Path) -> Result<ParseOutput> {
        let content = Self::read(path)?;
        Ok(Self::parse_with_diagnostics(&content))
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SandenvError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SandenvError::Io(e)
            }
        })
    }
}
