//! Error types for Desmin operations.
//!
//! This module defines [`ShellError`], the primary error type used throughout
//! the shell, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration errors ([`ShellError::DuplicateCommand`],
//!   [`ShellError::InvalidCommandKey`]) are fatal at start-up
//! - Per-line errors (not found, invalid usage, faults) are recovered by the
//!   [`Invoker`](crate::command::Invoker) and reported to the user
//! - Use `anyhow::Error` (via `ShellError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::command::SyntaxErrorReport;

/// Core error type for Desmin operations.
#[derive(Debug, Error)]
pub enum ShellError {
    /// No command is registered under the typed name or alias.
    #[error("Unknown command: {name}")]
    CommandNotFound { name: String },

    /// A command name or alias collides with one already registered.
    #[error("Command name or alias '{key}' is already registered")]
    DuplicateCommand { key: String },

    /// A command name or alias is empty or contains whitespace.
    #[error("Invalid command name or alias: '{key}'")]
    InvalidCommandKey { key: String },

    /// The command rejected its arguments.
    #[error("Invalid usage of '{command}'")]
    InvalidUsage {
        command: String,
        report: Option<SyntaxErrorReport>,
    },

    /// A command failed unexpectedly while running.
    #[error("Command '{command}' failed: {message}")]
    UnhandledFault { command: String, message: String },

    /// Script file does not exist.
    #[error("Script not found: {path}")]
    ScriptNotFound { path: PathBuf },

    /// Scripts invoked other scripts too deeply.
    #[error("Script nesting too deep (limit {depth})")]
    ScriptDepthExceeded { depth: usize },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShellError {
    /// Whether this error is recovered at the dispatch loop boundary.
    pub fn is_per_line(&self) -> bool {
        matches!(
            self,
            Self::CommandNotFound { .. } | Self::InvalidUsage { .. } | Self::UnhandledFault { .. }
        )
    }
}

/// Result type alias for Desmin operations.
pub type Result<T> = std::result::Result<T, ShellError>;
