//! sandenv - Environment resolution for sandboxed runs.
//!
//! sandenv computes the exact set of environment variables handed to a
//! sandboxed container by layering four sources: a filtered snapshot of the
//! host environment, discovered credentials, a `.env` file, and explicit
//! configuration. Later layers win.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and `.env` file parsing
//! - [`credentials`] - Discovered GitHub and Claude credentials
//! - [`environment`] - Layered environment resolution
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Secret detection and value masking
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use sandenv::config::ResolutionConfig;
//! use sandenv::credentials::DiscoveredCredentials;
//! use sandenv::environment::{EnvironmentResolver, HostEnv};
//!
//! let host = HostEnv::from_pairs([("GH_TOKEN", "ghp_host")]);
//! let config = ResolutionConfig::default().with_var("RUST_LOG", "debug");
//!
//! let resolved = EnvironmentResolver::new(host)
//!     .resolve(&config, &DiscoveredCredentials::default());
//!
//! assert_eq!(resolved.get("GITHUB_TOKEN"), Some("ghp_host"));
//! assert_eq!(resolved.get("RUST_LOG"), Some("debug"));
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod secrets;
pub mod ui;

pub use error::{Result, SandenvError};
