//! Configuration schema types.
//!
//! These types define the structure of a sandbox configuration file. Only
//! `env_file`, `environment` and `passthrough` feed environment resolution;
//! the remaining fields belong to the container launcher and are carried
//! through untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Sandbox configuration consumed by the environment resolver.
///
/// # Example
///
/// ```
/// use sandenv::config::ResolutionConfig;
///
/// let yaml = r#"
/// image: ghcr.io/acme/sandbox:latest
/// env_file: .env
/// environment:
///   RUST_LOG: debug
/// "#;
///
/// let config: ResolutionConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.env_file.as_deref(), Some(std::path::Path::new(".env")));
/// assert_eq!(config.environment["RUST_LOG"], "debug");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Path to a `.env` file overlaid on discovered credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,

    /// Explicit variables; highest precedence.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,

    /// Extra host variable names copied into the baseline.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passthrough: Vec<String>,

    /// Extra variable names whose values are masked in `explain` output.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secret_env: Vec<String>,

    /// Container image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Volume mounts in `host:container[:mode]` form.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,

    /// Container network name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Working directory inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,
}

impl ResolutionConfig {
    /// Set the env file path.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Add an explicit variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    /// Add a host variable name to pass through.
    pub fn with_passthrough(mut self, name: impl Into<String>) -> Self {
        self.passthrough.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_default_config() {
        let config: ResolutionConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ResolutionConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
image: node:20
volumes:
  - ./src:/workspace/src
  - ~/.ssh:/root/.ssh:ro
network: sandbox
workdir: /workspace
env_file: config/.env
passthrough: [TERM, LANG]
secret_env: [SIGNING_SEED]
environment:
  NODE_ENV: test
  GITHUB_TOKEN: override
"#;
        let config: ResolutionConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.image.as_deref(), Some("node:20"));
        assert_eq!(config.volumes.len(), 2);
        assert_eq!(config.network.as_deref(), Some("sandbox"));
        assert_eq!(config.workdir.as_deref(), Some("/workspace"));
        assert_eq!(config.env_file, Some(PathBuf::from("config/.env")));
        assert_eq!(config.passthrough, vec!["TERM", "LANG"]);
        assert_eq!(config.secret_env, vec!["SIGNING_SEED"]);
        assert_eq!(config.environment["GITHUB_TOKEN"], "override");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: ResolutionConfig =
            serde_yaml::from_str("ports: [8080]\nenv_file: .env").unwrap();
        assert_eq!(config.env_file, Some(PathBuf::from(".env")));
    }

    #[test]
    fn builder_helpers() {
        let config = ResolutionConfig::default()
            .with_env_file(".env")
            .with_var("A", "1")
            .with_passthrough("TERM");

        assert_eq!(config.env_file, Some(PathBuf::from(".env")));
        assert_eq!(config.environment["A"], "1");
        assert_eq!(config.passthrough, vec!["TERM"]);
    }

    #[test]
    fn serializes_without_empty_fields() {
        let config = ResolutionConfig::default().with_var("A", "1");
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("environment"));
        assert!(!yaml.contains("volumes"));
        assert!(!yaml.contains("env_file"));
    }
}
