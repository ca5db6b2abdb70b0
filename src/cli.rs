//! CLI argument parsing and command dispatch

pub mod args;
pub mod bump;
pub mod common;
pub mod init;

// Re-export types for convenient access
pub use args::{Cli, Command};
