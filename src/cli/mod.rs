//! Command-line interface for sandenv.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ExplainArgs, ResolveArgs, SchemaArgs, SourceArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
