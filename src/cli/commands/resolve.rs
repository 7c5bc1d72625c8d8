//! Resolve command implementation.
//!
//! The `sandenv resolve` command prints the resolved environment as
//! `KEY=VALUE` lines, ready to be handed to a container launcher.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::error::{Result, SandenvError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::sources::ResolutionInputs;

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ResolveCommand {
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

        let lines = inputs.resolve().to_env_strings();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&lines).map_err(|e| SandenvError::Other(e.into()))?;
            ui.data(&json);
        } else {
            for line in &lines {
                ui.data(line);
            }
        }

        if ui.output_mode().shows_detail() {
            ui.success(&format!("Resolved {} variable(s)", lines.len()));
        }

        Ok(CommandResult::success())
    }
}
