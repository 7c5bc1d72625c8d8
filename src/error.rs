//! Error types for sandenv operations.
//!
//! This module defines [`SandenvError`], the error type used by the strict
//! loaders and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Environment resolution itself never fails; missing or unreadable
//!   sources contribute nothing
//! - Use `SandenvError` where a caller asked for a specific file and needs
//!   to know it could not be loaded
//! - Use `anyhow::Error` (via `SandenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sandenv operations.
#[derive(Debug, Error)]
pub enum SandenvError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a discovered-credentials file.
    #[error("Failed to parse credentials at {path}: {message}")]
    CredentialsParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sandenv operations.
pub type Result<T> = std::result::Result<T, SandenvError>;
