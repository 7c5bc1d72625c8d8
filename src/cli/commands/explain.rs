//! Explain command implementation.
//!
//! The `sandenv explain` command shows every resolved variable next to the
//! source that won, masking secret values unless `--show-secrets` is given.
//! Malformed lines in the env file are reported as warnings.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ExplainArgs;
use crate::config::{EnvFileParser, RawEnvMap};
use crate::environment::ResolvedEnvironment;
use crate::error::{Result, SandenvError};
use crate::secrets::{SecretMatcher, ValueMasker};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::sources::ResolutionInputs;

/// One row of `explain` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainEntry {
    /// Variable name.
    pub key: String,
    /// Value, possibly masked.
    pub value: String,
    /// Source that supplied the value.
    pub source: String,
    /// Whether `value` was masked.
    pub masked: bool,
}

/// Build display rows for a resolved environment.
pub fn explain_entries(
    resolved: &ResolvedEnvironment,
    masker: &ValueMasker,
    show_secrets: bool,
) -> Vec<ExplainEntry> {
    resolved
        .entries()
        .iter()
        .map(|var| {
            let shown = if show_secrets {
                var.value.as_str()
            } else {
                masker.display_value(&var.key, &var.value)
            };
            ExplainEntry {
                key: var.key.clone(),
                value: shown.to_string(),
                source: var.source.to_string(),
                masked: shown != var.value,
            }
        })
        .collect()
}

/// The explain command implementation.
pub struct ExplainCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ExplainArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Read the env file once, reporting skipped lines and read failures.
    fn read_env_file(&self, path: &Path, ui: &mut dyn UserInterface) -> RawEnvMap {
        match EnvFileParser::load_with_diagnostics(path) {
            Ok(output) => {
                for diag in &output.diagnostics {
                    ui.warning(&format!(
                        "{}:{}: line skipped ({})",
                        path.display(),
                        diag.line,
                        diag.kind
                    ));
                }
                output.vars
            }
            Err(SandenvError::ConfigNotFound { .. }) => {
                ui.warning(&format!("Env file not found: {}", path.display()));
                RawEnvMap::new()
            }
            Err(e) => {
                ui.warning(&format!("Env file {} ignored: {}", path.display(), e));
                RawEnvMap::new()
            }
        }
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(inputs) = ResolutionInputs::load_or_report(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.sources,
            ui,
        )?
        else {
            return Ok(CommandResult::failure(2));
        };

        let env_file = inputs
            .config
            .env_file
            .as_deref()
            .map(|path| (path, self.read_env_file(path, ui)));
        let resolved = inputs.resolve_with_env_file(env_file);

        let masker =
            ValueMasker::with_matcher(SecretMatcher::with_builtins_and_custom(&inputs.config.secret_env));
        let entries = explain_entries(&resolved, &masker, self.args.show_secrets);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&entries).map_err(|e| SandenvError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No variables resolved.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Resolved environment");
        let theme = ui.theme().clone();
        let mut table = Table::new(&["Variable", "Value", "Source"]);
        for entry in &entries {
            let value = if entry.masked {
                theme.masked.apply_to(&entry.value).to_string()
            } else {
                entry.value.clone()
            };
            table.add_row(vec![
                theme.key.apply_to(&entry.key).to_string(),
                value,
                theme.dim.apply_to(&entry.source).to_string(),
            ]);
        }
        ui.data(&table.render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SourceArgs;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn args(set: &[(&str, &str)]) -> ExplainArgs {
        ExplainArgs {
            sources: SourceArgs {
                no_host: true,
                set: set
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn masks_secret_values_by_default() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), None, args(&[("GH_TOKEN", "ghp_secret"), ("MODE", "ci")]))
            .execute(&mut ui)
            .unwrap();

        let output = ui.data_lines().join("\n");
        assert!(!output.contains("ghp_secret"));
        assert!(output.contains("[REDACTED]"));
        assert!(output.contains("ci"));
        assert!(output.contains("config"));
    }

    #[test]
    fn show_secrets_reveals_values() {
        let temp = TempDir::new().unwrap();
        let mut explain = args(&[("GH_TOKEN", "ghp_secret")]);
        explain.show_secrets = true;
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), None, explain)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.data_lines().join("\n").contains("ghp_secret"));
    }

    #[test]
    fn reports_malformed_env_lines() {
        let temp = TempDir::new().unwrap();
        let env = temp.path().join(".env");
        fs::write(&env, "A=1\nthis is broken\n").unwrap();
        let mut explain = args(&[]);
        explain.sources.env_file = Some(env);
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), None, explain)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning(":2: line skipped (missing '=')"));
    }

    #[test]
    fn warnings_and_values_come_from_one_read() {
        let temp = TempDir::new().unwrap();
        let env = temp.path().join(".env");
        fs::write(&env, "A=1\nbroken\nB='two'\n").unwrap();
        let mut explain = args(&[]);
        explain.sources.env_file = Some(env.clone());
        explain.json = true;
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), None, explain)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.warnings().len(), 1);
        let entries: Vec<serde_json::Value> = serde_json::from_str(&ui.data_lines()[0]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["value"], "two");
        assert_eq!(
            entries[1]["source"],
            format!("env file {}", env.display())
        );
    }

    #[test]
    fn reports_missing_env_file() {
        let temp = TempDir::new().unwrap();
        let mut explain = args(&[]);
        explain.sources.env_file = Some(temp.path().join("absent.env"));
        let mut ui = MockUI::new();

        let result = ExplainCommand::new(temp.path(), None, explain)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Env file not found"));
        assert!(ui.has_message("No variables resolved."));
    }

    #[test]
    fn json_entries_carry_source() {
        let temp = TempDir::new().unwrap();
        let mut explain = args(&[("ANTHROPIC_API_KEY", "sk"), ("REGION", "eu")]);
        explain.json = true;
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), None, explain)
            .execute(&mut ui)
            .unwrap();

        let entries: Vec<serde_json::Value> = serde_json::from_str(&ui.data_lines()[0]).unwrap();
        assert_eq!(entries[0]["key"], "ANTHROPIC_API_KEY");
        assert_eq!(entries[0]["masked"], true);
        assert_eq!(entries[1]["value"], "eu");
        assert_eq!(entries[1]["source"], "config");
    }

    #[test]
    fn custom_secret_names_are_masked() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("sandbox.yml");
        fs::write(&config, "secret_env: [SEED]\nenvironment:\n  SEED: s3cr3t").unwrap();
        let mut ui = MockUI::new();

        ExplainCommand::new(temp.path(), Some(&config), args(&[]))
            .execute(&mut ui)
            .unwrap();

        assert!(!ui.data_lines().join("\n").contains("s3cr3t"));
    }
}
