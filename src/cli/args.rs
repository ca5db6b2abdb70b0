//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// cz-action CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "cz-action")]
#[command(about = "Detect or establish Commitizen configuration and bump project versions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available cz-action subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect or create the Commitizen configuration in this directory
    Init,

    /// Bump the project version via Commitizen and report the result
    Bump,
}
