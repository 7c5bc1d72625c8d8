//! Value masking for display.
//!
//! Resolved environments are printed raw by `sandenv resolve` so they can be
//! piped into a launcher. Anything shown to a human goes through
//! [`ValueMasker`] first.

use super::pattern::SecretMatcher;

/// Masks the values of secret-looking variables.
///
/// # Example
///
/// ```
/// use sandenv::secrets::ValueMasker;
///
/// let masker = ValueMasker::new();
///
/// assert_eq!(masker.display_value("GH_TOKEN", "ghp_abcdef"), "[REDACTED]");
/// assert_eq!(masker.display_value("GIT_AUTHOR_NAME", "Ada"), "Ada");
/// ```
#[derive(Debug, Clone)]
pub struct ValueMasker {
    matcher: SecretMatcher,
    mask: String,
}

impl ValueMasker {
    /// Create a masker using the built-in patterns.
    pub fn new() -> Self {
        Self::with_matcher(SecretMatcher::with_builtins())
    }

    /// Create a masker using a specific matcher.
    pub fn with_matcher(matcher: SecretMatcher) -> Self {
        Self {
            matcher,
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Use a custom mask string.
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Check if a variable would be masked.
    pub fn is_masked(&self, key: &str) -> bool {
        self.matcher.is_secret(key)
    }

    /// The value to show for `key`.
    ///
    /// Empty values are shown as-is; there is nothing to hide.
    pub fn display_value<'a>(&'a self, key: &str, value: &'a str) -> &'a str {
        if value.is_empty() {
            return value;
        }
        match self.matcher.matching_pattern(key) {
            Some(pattern) => {
                tracing::debug!("Masking {} (matched {})", key, pattern.name);
                &self.mask
            }
            None => value,
        }
    }
}

impl Default for ValueMasker {
    fn default() -> Self {
        Self::new()
    }
}
