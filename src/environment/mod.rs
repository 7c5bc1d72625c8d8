//! Environment resolution for sandboxes.
//!
//! Builds the variables injected into a sandbox. The precedence chain,
//! highest first, is:
//!
//! 1. Config `environment`
//! 2. Config `env_file`
//! 3. Discovered credentials
//! 4. Host passthrough baseline

pub mod host;
pub mod layer;
pub mod resolver;
pub mod synonyms;

pub use host::{HostEnv, PASSTHROUGH_VARS};
pub use layer::{EnvSource, LayeredEnv, ResolvedVar};
pub use resolver::{resolve_env_strings, EnvironmentResolver, ResolvedEnvironment};
pub use synonyms::{normalize_all, SynonymGroup, DEFAULT_SYNONYM_GROUPS, GITHUB_TOKEN_SYNONYMS};
