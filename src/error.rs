//! Error types for cz-action
//!
//! This module defines the error types used throughout cz-action, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Configuration-file errors (locating, parsing, merging)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A file expected to be structured failed to parse
    #[error("invalid syntax in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// The file exists but has no `[tool]` table where one was expected
    #[error("{file} has no [tool] table")]
    MalformedDocument { file: PathBuf },

    /// A required key is absent from an otherwise valid document
    #[error("missing {key} in {file}")]
    MissingKey { file: PathBuf, key: String },

    /// The concatenated merge result failed to re-parse
    #[error("merged configuration is not valid TOML: {0}")]
    Merge(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// External-process errors
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The child process could not be launched
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The child process exited nonzero or was killed by a signal
    #[error("'{command}' failed ({}): {stderr}", exit_description(.code))]
    NonZero {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "killed by signal".to_string(),
    }
}

/// Top-level error type for cz-action
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External command error
    #[error("Command error: {0}")]
    Exec(#[from] ExecError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
