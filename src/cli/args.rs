//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// sandenv - Resolve the environment for a sandboxed run.
#[derive(Debug, Parser)]
#[command(name = "sandenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .sandenv/config.yml)
    #[arg(short, long, global = true, env = "SANDENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Inputs for running without a subcommand, which means `resolve`.
    #[command(flatten)]
    pub resolve: ResolveArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved environment as KEY=VALUE lines (default)
    Resolve(ResolveArgs),

    /// Show each resolved variable with the source that supplied it
    Explain(ExplainArgs),

    /// Print the JSON Schema for config or credentials files
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Inputs shared by `resolve` and `explain`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Discovered credentials as JSON
    #[arg(long, value_name = "FILE", env = "SANDENV_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Env file to use instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Set a variable explicitly (repeatable, highest precedence)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Ignore the host environment
    #[arg(long)]
    pub no_host: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output as a JSON array of KEY=VALUE strings
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Show secret values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Print the credentials file schema instead of the config schema
    #[arg(long)]
    pub credentials: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a `KEY=VALUE` argument, splitting on the first `=`.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
