//! Secret pattern matching.
//!
//! This module provides functionality for detecting secret environment variables
//! by matching their names against patterns.

use regex::Regex;

/// A pattern that identifies secret values.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern, reported when it masks a value.
    pub name: String,
    /// Regex pattern to match environment variable names.
    pub env_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY|SECRET_ACCESS_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN|SESSION_TOKEN)$"),
    ("bearer", r"(?i)BEARER_TOKEN"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIAL$"),
    ("private_key", r"(?i)^.*_?PRIVATE_KEY$"),
    (
        "connection_string",
        r"(?i)^.*(CONNECTION_STRING|DATABASE_URL)$",
    ),
];

/// Matches environment variable names against secret patterns.
///
/// # Example
///
/// ```
/// use sandenv::secrets::SecretMatcher;
///
/// let matcher = SecretMatcher::with_builtins();
///
/// assert!(matcher.is_secret("ANTHROPIC_API_KEY"));
/// assert!(matcher.is_secret("GH_TOKEN"));
/// assert!(matcher.is_secret("CLAUDE_CODE_OAUTH_TOKEN"));
///
/// assert!(!matcher.is_secret("GIT_AUTHOR_NAME"));
/// assert!(!matcher.is_secret("AWS_REGION"));
/// ```
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Some(SecretPattern {
                    name: name.to_string(),
                    env_pattern: Regex::new(pattern).ok()?,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Create a matcher with custom patterns.
    pub fn new(patterns: Vec<SecretPattern>) -> Self {
        Self { patterns }
    }

    /// Create a matcher with built-in patterns plus custom exact matches.
    ///
    /// # Example
    ///
    /// ```
    /// use sandenv::secrets::SecretMatcher;
    ///
    /// let custom = vec!["SANDBOX_SIGNING_SEED".to_string()];
    /// let matcher = SecretMatcher::with_builtins_and_custom(&custom);
    ///
    /// assert!(matcher.is_secret("SANDBOX_SIGNING_SEED"));
    /// assert!(matcher.is_secret("API_KEY"));
    /// ```
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut matcher = Self::with_builtins();

        for name in custom_names {
            if let Ok(pattern) = Regex::new(&format!("^{}$", regex::escape(name))) {
                matcher.add_pattern(SecretPattern {
                    name: format!("custom:{}", name),
                    env_pattern: pattern,
                });
            }
        }

        matcher
    }

    /// Add a custom pattern.
    pub fn add_pattern(&mut self, pattern: SecretPattern) {
        self.patterns.push(pattern);
    }

    /// Check if an environment variable name matches any secret pattern.
    pub fn is_secret(&self, env_name: &str) -> bool {
        self.matching_pattern(env_name).is_some()
    }

    /// The first pattern matching an environment variable name.
    pub fn matching_pattern(&self, env_name: &str) -> Option<&SecretPattern> {
        self.patterns
            .iter()
            .find(|p| p.env_pattern.is_match(env_name))
    }

    /// Get the number of patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_patterns_compile() {
        let matcher = SecretMatcher::with_builtins();
        assert_eq!(matcher.pattern_count(), BUILTIN_PATTERNS.len());
    }

    #[test]
    fn matches_resolver_credentials() {
        let matcher = SecretMatcher::with_builtins();

        assert!(matcher.is_secret("GITHUB_TOKEN"));
        assert!(matcher.is_secret("GH_TOKEN"));
        assert!(matcher.is_secret("ANTHROPIC_API_KEY"));
        assert!(matcher.is_secret("CLAUDE_CODE_OAUTH_TOKEN"));
        assert!(matcher.is_secret("AWS_BEARER_TOKEN_BEDROCK"));
    }

    #[test]
    fn matches_common_secret_names() {
        let matcher = SecretMatcher::with_builtins();

        assert!(matcher.is_secret("AWS_SECRET_ACCESS_KEY"));
        assert!(matcher.is_secret("AWS_SESSION_TOKEN"));
        assert!(matcher.is_secret("DB_PASSWORD"));
        assert!(matcher.is_secret("MYSQL_PWD"));
        assert!(matcher.is_secret("DATABASE_URL"));
        assert!(matcher.is_secret("api_key"));
    }

    #[test]
    fn does_not_match_non_secrets() {
        let matcher = SecretMatcher::with_builtins();

        assert!(!matcher.is_secret("GIT_AUTHOR_NAME"));
        assert!(!matcher.is_secret("GIT_COMMITTER_EMAIL"));
        assert!(!matcher.is_secret("CLAUDE_CODE_USE_BEDROCK"));
        assert!(!matcher.is_secret("CLOUD_ML_REGION"));
        assert!(!matcher.is_secret("PATH"));
    }

    #[test]
    fn custom_patterns_are_exact_match() {
        let custom = vec!["SEED".to_string()];
        let matcher = SecretMatcher::with_builtins_and_custom(&custom);

        assert!(matcher.is_secret("SEED"));
        assert!(!matcher.is_secret("SEED_EXTRA"));
        assert!(!matcher.is_secret("MY_SEED"));
        assert_eq!(matcher.pattern_count(), BUILTIN_PATTERNS.len() + 1);
    }

    #[test]
    fn matching_pattern_reports_name() {
        let custom = vec!["SEED".to_string()];
        let matcher = SecretMatcher::with_builtins_and_custom(&custom);

        let name = |key| matcher.matching_pattern(key).map(|p| p.name.as_str());
        assert_eq!(name("GH_TOKEN"), Some("token"));
        assert_eq!(name("ANTHROPIC_API_KEY"), Some("api_key"));
        assert_eq!(name("SEED"), Some("custom:SEED"));
        assert_eq!(name("GIT_AUTHOR_NAME"), None);
    }

    #[test]
    fn custom_names_are_regex_escaped() {
        let custom = vec!["A.B".to_string()];
        let matcher = SecretMatcher::with_builtins_and_custom(&custom);

        assert!(matcher.is_secret("A.B"));
        assert!(!matcher.is_secret("AXB"));
    }

    #[test]
    fn empty_patterns_match_nothing() {
        let matcher = SecretMatcher::new(vec![]);

        assert!(!matcher.is_secret("API_KEY"));
    }
}
