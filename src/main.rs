//! cz-action CLI entry point

use clap::Parser;
use cz_action::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Init => cz_action::cli::init::run_init(),
        Command::Bump => cz_action::cli::bump::run_bump(),
    };

    process::exit(exit_code);
}
