//! Secret detection and masking.
//!
//! - [`SecretPattern`] - Defines a pattern for identifying secrets
//! - [`SecretMatcher`] - Matches environment variable names against secret patterns
//! - [`ValueMasker`] - Hides secret values when a resolved environment is displayed
//! - [`BUILTIN_PATTERNS`] - Built-in patterns for common secrets

pub mod mask;
pub mod pattern;

pub use mask::ValueMasker;
pub use pattern::{SecretMatcher, SecretPattern, BUILTIN_PATTERNS};
