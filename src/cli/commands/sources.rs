//! Input loading shared by `resolve` and `explain`.

use std::path::Path;

use crate::cli::args::SourceArgs;
use crate::config::{load_config, load_credentials, RawEnvMap, ResolutionConfig};
use crate::credentials::DiscoveredCredentials;
use crate::environment::{EnvironmentResolver, HostEnv, ResolvedEnvironment};
use crate::error::{Result, SandenvError};
use crate::ui::UserInterface;

/// Everything the resolver needs, loaded from disk and CLI flags.
#[derive(Debug, Clone)]
pub struct ResolutionInputs {
    /// Loaded config with CLI overrides applied.
    pub config: ResolutionConfig,
    /// Loaded credentials, empty when no file was given.
    pub credentials: DiscoveredCredentials,
    /// Host snapshot, empty under `--no-host`.
    pub host: HostEnv,
}

impl ResolutionInputs {
    /// Load config, credentials and host environment.
    ///
    /// `--env-file` replaces the configured env file and `--set` entries are
    /// added to the config's explicit environment.
    pub fn load(
        project_root: &Path,
        config_path: Option<&Path>,
        args: &SourceArgs,
    ) -> Result<Self> {
        let mut config = load_config(project_root, config_path)?;
        if let Some(env_file) = &args.env_file {
            config.env_file = Some(env_file.clone());
        }
        config.environment.extend(args.set.iter().cloned());

        let credentials = match &args.credentials {
            Some(path) => load_credentials(path)?,
            None => DiscoveredCredentials::default(),
        };

        let host = if args.no_host {
            HostEnv::empty()
        } else {
            HostEnv::capture()
        };

        Ok(Self {
            config,
            credentials,
            host,
        })
    }

    /// Load inputs, reporting a missing file through `ui`.
    ///
    /// Returns `Ok(None)` when a named file does not exist; the caller
    /// should exit with code 2.
    pub fn load_or_report(
        project_root: &Path,
        config_path: Option<&Path>,
        args: &SourceArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<Self>> {
        match Self::load(project_root, config_path, args) {
            Ok(inputs) => Ok(Some(inputs)),
            Err(e @ SandenvError::ConfigNotFound { .. }) => {
                ui.error(&e.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Run the resolver over these inputs.
    pub fn resolve(&self) -> ResolvedEnvironment {
        EnvironmentResolver::new(self.host.clone()).resolve(&self.config, &self.credentials)
    }

    /// Run the resolver with env file contents that were already read.
    pub fn resolve_with_env_file(&self, env_file: Option<(&Path, RawEnvMap)>) -> ResolvedEnvironment {
        EnvironmentResolver::new(self.host.clone()).resolve_with_env_file(
            &self.config,
            &self.credentials,
            env_file,
        )
    }
}
