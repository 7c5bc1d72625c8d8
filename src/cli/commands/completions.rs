//! Shell completions generation.
//!
//! The `sandenv completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::{Result, SandenvError};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script for the configured shell.
    pub fn render(&self) -> Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "sandenv", &mut buf);
        String::from_utf8(buf).map_err(|e| SandenvError::Other(e.into()))
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = self.render()?;
        ui.data(script.trim_end_matches('\n'));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    fn render(shell: Shell) -> String {
        CompletionsCommand::new(CompletionsArgs { shell })
            .render()
            .unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = render(Shell::Bash);
        assert!(output.contains("sandenv"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(render(Shell::Zsh).contains("sandenv"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = render(Shell::Fish);
        assert!(output.contains("sandenv"));
        assert!(output.contains("explain"));
    }

    #[test]
    fn execute_writes_script_as_data() {
        let mut ui = MockUI::new();
        let result = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash })
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.data_lines().len(), 1);
        assert!(ui.data_lines()[0].contains("sandenv"));
    }
}
