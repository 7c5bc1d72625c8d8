//! Host environment snapshot.
//!
//! The resolver never reads `std::env` directly. Callers capture a
//! [`HostEnv`] once and pass it in, which keeps resolution pure and lets
//! tests supply a literal environment.

use std::collections::HashMap;

/// Host variables copied into the baseline when present, in output order.
pub const PASSTHROUGH_VARS: &[&str] = &[
    "GITHUB_TOKEN",
    "GH_TOKEN",
    "GIT_AUTHOR_NAME",
    "GIT_AUTHOR_EMAIL",
    "GIT_COMMITTER_NAME",
    "GIT_COMMITTER_EMAIL",
    "ANTHROPIC_API_KEY",
    "CLAUDE_CODE_OAUTH_TOKEN",
];

/// Read-only snapshot of a process environment.
///
/// # Example
///
/// ```
/// use sandenv::environment::HostEnv;
///
/// let host = HostEnv::from_pairs([("GH_TOKEN", "abc"), ("EMPTY", "")]);
/// assert_eq!(host.get("GH_TOKEN"), Some("abc"));
/// assert_eq!(host.get("EMPTY"), None);
/// assert_eq!(host.get("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnv {
    vars: HashMap<String, String>,
}

impl HostEnv {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// An empty environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from literal pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a variable's value, treating empty values as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Get the number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_unset() {
        let host = HostEnv::from_pairs([("A", ""), ("B", "x")]);
        assert_eq!(host.get("A"), None);
        assert_eq!(host.get("B"), Some("x"));
        assert_eq!(host.len(), 2);
    }

    #[test]
    fn capture_reads_process_environment() {
        let host = HostEnv::capture();
        if let Ok(path) = std::env::var("PATH") {
            if !path.is_empty() {
                assert_eq!(host.get("PATH"), Some(path.as_str()));
            }
        }
    }

    #[test]
    fn empty_snapshot() {
        assert!(HostEnv::empty().is_empty());
    }

    #[test]
    fn required_passthrough_names_come_first() {
        assert_eq!(
            &PASSTHROUGH_VARS[..6],
            &[
                "GITHUB_TOKEN",
                "GH_TOKEN",
                "GIT_AUTHOR_NAME",
                "GIT_AUTHOR_EMAIL",
                "GIT_COMMITTER_NAME",
                "GIT_COMMITTER_EMAIL",
            ]
        );
    }
}
