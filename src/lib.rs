#![forbid(unsafe_code)]

//! cz-action: Commitizen bootstrap and version-bump action for CI pipelines
//!
//! `init` detects or establishes a `[tool.commitizen]` configuration in the
//! project's TOML manifest (or a dedicated `.cz.toml`), preserving the
//! file's hand-authored formatting. `bump` delegates the actual version bump
//! to the external `cz` tool and reports the result as workflow outputs.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod output;

// Re-export error types for convenient access
pub use error::{ActionError, ConfigError, ExecError};

// Re-export core domain types for convenient access
pub use config::{Disposition, ProjectPaths, VersionInfo, VersionSource};
