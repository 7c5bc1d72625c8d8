//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output for tests
//! - [`Table`] for aligned, bordered listings
//!
//! Machine-readable data (the resolved `KEY=VALUE` list) goes through
//! [`UserInterface::data`] on stdout and is never styled or suppressed.
//! Status messages go to stderr so they can't corrupt piped output.
//!
//! # Example
//!
//! ```
//! use sandenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.data("GITHUB_TOKEN=abc");
//! ui.success("Resolved 1 variable");
//!
//! assert_eq!(ui.data_lines(), &["GITHUB_TOKEN=abc".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SandenvTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Write a line of machine-readable output.
    fn data(&mut self, line: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Get the theme used to style human-readable output.
    fn theme(&self) -> &SandenvTheme;
}
