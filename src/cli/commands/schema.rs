//! Schema command implementation.
//!
//! The `sandenv schema` command prints the JSON Schema for the config file,
//! or for the credentials file with `--credentials`. Editors can use it to
//! validate `.sandenv/config.yml`.

use crate::cli::args::SchemaArgs;
use crate::config::ResolutionConfig;
use crate::credentials::DiscoveredCredentials;
use crate::error::{Result, SandenvError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }

    /// Render the selected schema as pretty-printed JSON.
    pub fn render(&self) -> Result<String> {
        let schema = if self.args.credentials {
            schemars::schema_for!(DiscoveredCredentials)
        } else {
            schemars::schema_for!(ResolutionConfig)
        };
        serde_json::to_string_pretty(&schema).map_err(|e| SandenvError::Other(e.into()))
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.data(&self.render()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn render(credentials: bool) -> serde_json::Value {
        let json = SchemaCommand::new(SchemaArgs { credentials })
            .render()
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn config_schema_lists_fields() {
        let schema = render(false);
        let properties = &schema["properties"];
        assert!(properties.get("env_file").is_some());
        assert!(properties.get("environment").is_some());
        assert!(properties.get("secret_env").is_some());
    }

    #[test]
    fn credentials_schema_lists_providers() {
        let schema = render(true);
        let properties = &schema["properties"];
        assert!(properties.get("github").is_some());
        assert!(properties.get("claude").is_some());
    }

    #[test]
    fn execute_writes_schema_as_data() {
        let mut ui = MockUI::new();
        let result = SchemaCommand::new(SchemaArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.data_lines()[0].contains("\"$schema\""));
    }
}
