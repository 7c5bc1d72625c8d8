//! Environment resolution.
//!
//! Resolves the variables injected into a sandbox. Sources are applied in
//! this order, each overwriting the previous ones for the keys it sets:
//!
//! 1. Host passthrough baseline
//! 2. Discovered credentials
//! 3. `.env` file (`env_file`)
//! 4. Explicit configuration (`environment`)
//!
//! Synonym groups are normalized after steps 1 and 2, so `GITHUB_TOKEN` and
//! `GH_TOKEN` agree whenever the host or the credentials supplied either.

use std::path::Path;

use super::host::{HostEnv, PASSTHROUGH_VARS};
use super::layer::{EnvSource, LayeredEnv, ResolvedVar};
use super::synonyms::{normalize_all, SynonymGroup, DEFAULT_SYNONYM_GROUPS, GITHUB_TOKEN_SYNONYMS};
use crate::config::{EnvFileParser, RawEnvMap, ResolutionConfig};
use crate::credentials::DiscoveredCredentials;

/// The final, ordered set of variables for a sandbox.
///
/// Host baseline keys come first in allow-list order, followed by keys
/// introduced by later steps in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    vars: Vec<ResolvedVar>,
}

impl ResolvedEnvironment {
    /// All resolved entries.
    pub fn entries(&self) -> &[ResolvedVar] {
        &self.vars
    }

    /// Get the resolved value for a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Get the source that supplied a variable's value.
    pub fn source_of(&self, key: &str) -> Option<&EnvSource> {
        self.vars.iter().find(|v| v.key == key).map(|v| &v.source)
    }

    /// Serialize as `KEY=VALUE` strings, without quoting or escaping.
    pub fn to_env_strings(&self) -> Vec<String> {
        self.vars.iter().map(ToString::to_string).collect()
    }

    /// Consume into `(key, value)` pairs, e.g. for `Command::envs`.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.vars.into_iter().map(|v| (v.key, v.value)).collect()
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<LayeredEnv> for ResolvedEnvironment {
    fn from(env: LayeredEnv) -> Self {
        Self {
            vars: env.into_entries(),
        }
    }
}

/// Merges host, credential, file and config sources into one environment.
///
/// # Example
///
/// ```
/// use sandenv::config::ResolutionConfig;
/// use sandenv::credentials::DiscoveredCredentials;
/// use sandenv::environment::{EnvironmentResolver, HostEnv};
///
/// let resolver = EnvironmentResolver::new(HostEnv::from_pairs([("GITHUB_TOKEN", "H")]));
/// let config = ResolutionConfig::default().with_var("GITHUB_TOKEN", "C");
/// let credentials = DiscoveredCredentials::with_github_token("D");
///
/// let resolved = resolver.resolve(&config, &credentials);
/// assert_eq!(resolved.get("GITHUB_TOKEN"), Some("C"));
/// assert_eq!(resolved.get("GH_TOKEN"), Some("D"));
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentResolver {
    host: HostEnv,
    synonyms: Vec<SynonymGroup>,
}

impl EnvironmentResolver {
    /// Create a resolver over a host snapshot with the default synonym groups.
    pub fn new(host: HostEnv) -> Self {
        Self {
            host,
            synonyms: DEFAULT_SYNONYM_GROUPS.to_vec(),
        }
    }

    /// Create a resolver over the current process environment.
    pub fn from_process() -> Self {
        Self::new(HostEnv::capture())
    }

    /// Add a synonym group normalized alongside the defaults.
    pub fn with_synonym_group(mut self, group: SynonymGroup) -> Self {
        self.synonyms.push(group);
        self
    }

    /// Resolve the environment. Never fails.
    pub fn resolve(
        &self,
        config: &ResolutionConfig,
        credentials: &DiscoveredCredentials,
    ) -> ResolvedEnvironment {
        let env_file = config
            .env_file
            .as_deref()
            .map(|path| (path, EnvFileParser::parse(path)));
        self.resolve_with_env_file(config, credentials, env_file)
    }

    /// Resolve with env file contents the caller already read.
    ///
    /// `env_file` replaces the read of `config.env_file`; `None` skips the
    /// env file layer.
    pub fn resolve_with_env_file(
        &self,
        config: &ResolutionConfig,
        credentials: &DiscoveredCredentials,
        env_file: Option<(&Path, RawEnvMap)>,
    ) -> ResolvedEnvironment {
        let mut env = LayeredEnv::new();

        // 1. Host passthrough baseline
        self.apply_host(&mut env, config);
        normalize_all(&self.synonyms, &mut env);

        // 2. Discovered credentials
        Self::apply_credentials(&mut env, credentials);
        normalize_all(&self.synonyms, &mut env);

        // 3. .env file
        if let Some((path, vars)) = env_file {
            tracing::debug!(
                "Env file {} supplied {} variable(s)",
                path.display(),
                vars.len()
            );
            env.overlay_map(vars, &EnvSource::EnvFile(path.to_path_buf()));
        }

        // 4. Explicit config
        env.overlay(&config.environment, &EnvSource::Config);

        tracing::debug!("Resolved {} variable(s)", env.len());
        env.into()
    }

    fn apply_host(&self, env: &mut LayeredEnv, config: &ResolutionConfig) {
        let names = PASSTHROUGH_VARS
            .iter()
            .copied()
            .chain(config.passthrough.iter().map(String::as_str));

        for name in names {
            if let Some(value) = self.host.get(name) {
                tracing::debug!("Passing through host variable {}", name);
                env.set(name, value, EnvSource::Host);
            }
        }
    }

    fn apply_credentials(env: &mut LayeredEnv, credentials: &DiscoveredCredentials) {
        if let Some(claude) = &credentials.claude {
            tracing::debug!("Applying {} credential", claude.auth_type);
            env.overlay(claude.to_env_vars(), &EnvSource::Credentials);
        }

        if let Some(github) = &credentials.github {
            if let Some(token) = &github.token {
                tracing::debug!("Applying discovered GitHub token");
                for name in GITHUB_TOKEN_SYNONYMS.names {
                    env.set(*name, token.as_str(), EnvSource::Credentials);
                }
            }
            if let Some(identity) = &github.git_config {
                env.overlay(identity.to_env_vars(), &EnvSource::Credentials);
            }
        }
    }
}

/// Resolve against the current process environment and serialize.
///
/// Convenience for callers that only need the `KEY=VALUE` list.
pub fn resolve_env_strings(
    config: &ResolutionConfig,
    credentials: &DiscoveredCredentials,
) -> Vec<String> {
    EnvironmentResolver::from_process()
        .resolve(config, credentials)
        .to_env_strings()
}
