//! Configuration loading and `.env` parsing for sandenv.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Local override merging in [`merger`]
//! - `.env` parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use sandenv::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".sandenv");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "env_file: .env").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.env_file, Some(temp.path().join(".env")));
//! ```

pub mod env_file;
pub mod loader;
pub mod merger;
pub mod schema;

pub use env_file::{DiagnosticKind, EnvFileParser, LineDiagnostic, ParseOutput, RawEnvMap};
pub use loader::{
    find_project_root, load_config, load_config_file, load_credentials, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::ResolutionConfig;
