//! Configuration and credentials file loading.
//!
//! Project configuration lives in `.sandenv/config.yml`, optionally
//! overridden by an untracked `.sandenv/config.local.yml`. Discovered
//! credentials are exchanged as JSON.

use crate::config::merger::merge_configs;
use crate::config::schema::ResolutionConfig;
use crate::credentials::DiscoveredCredentials;
use crate::error::{Result, SandenvError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".sandenv";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .sandenv/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .sandenv/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.sandenv` directory first, then falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SandenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SandenvError::Io(e)
        }
    })
}

/// Parse YAML content into a [`ResolutionConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ResolutionConfig> {
    serde_yaml::from_str(content).map_err(|e| SandenvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// A relative `env_file` is resolved against the file's own directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ResolutionConfig> {
    let content = read_file(path)?;
    let config = parse_config(&content, path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(anchor_env_file(config, base))
}

/// Load and merge the project config and its local overrides.
///
/// A relative `env_file` is resolved against the project root.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<ResolutionConfig> {
    let paths = ConfigPaths::discover(project_root);
    let project_path = project_root.join(CONFIG_DIR).join("config.yml");

    if !paths.has_project_config() {
        return Err(SandenvError::ConfigNotFound { path: project_path });
    }

    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config {}", path.display());
        let content = read_file(path)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| SandenvError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;
        // An empty or comment-only file parses to null and contributes nothing.
        if value.is_null() {
            tracing::debug!("Config {} is empty, skipping", path.display());
            continue;
        }
        values.push(value);
    }

    let config: ResolutionConfig =
        serde_yaml::from_value(merge_configs(&values)).map_err(|e| {
            SandenvError::ConfigParseError {
                path: project_path,
                message: format!("Failed to parse merged config: {}", e),
            }
        })?;

    Ok(anchor_env_file(config, project_root))
}

/// Load config with optional path override.
///
/// An explicit path is loaded on its own. Otherwise the project config is
/// discovered; a project without one resolves with the default config.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ResolutionConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => match load_merged_config(project_root) {
            Err(SandenvError::ConfigNotFound { path }) => {
                tracing::debug!("No project config at {}, using defaults", path.display());
                Ok(ResolutionConfig::default())
            }
            other => other,
        },
    }
}

/// Load discovered credentials from a JSON file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `CredentialsParseError` if the JSON is invalid.
pub fn load_credentials(path: &Path) -> Result<DiscoveredCredentials> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| SandenvError::CredentialsParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn anchor_env_file(mut config: ResolutionConfig, base: &Path) -> ResolutionConfig {
    if let Some(env_file) = &config.env_file {
        if env_file.is_relative() {
            config.env_file = Some(base.join(env_file));
        }
    }
    config
}
