//! Init command implementation
//!
//! This module implements `cz-action init`, which:
//! - Picks the file that should own the Commitizen configuration
//!   (`pyproject.toml` if present, else `.cz.toml`)
//! - Discovers the current version and its source locator
//! - Merges the generated `[tool.commitizen]` fragment into the target file
//!   without disturbing its original formatting

use crate::cli::common::{
    EXIT_ALREADY_CONFIGURED, EXIT_ERROR, EXIT_MISCONFIGURED, EXIT_SUCCESS,
};
use crate::config::locator::{self, Disposition};
use crate::config::merger;
use crate::config::paths::ProjectPaths;
use crate::error::ActionError;
use std::path::PathBuf;

/// Terminal outcome of one init invocation
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Configuration was merged into `file`
    Configured { file: PathBuf, version: String },
    /// `file` already carries the configuration; nothing was written
    AlreadyConfigured { file: PathBuf },
    /// `.cz.toml` exists but does not contain valid config
    Misconfigured { file: PathBuf },
}

/// Run the init command against the current working directory.
///
/// Exit codes: 0 configured (or freshly created), 10 already configured,
/// 11 misconfigured, 2 on any other error.
pub fn run_init() -> i32 {
    match run_init_inner(&ProjectPaths::default()) {
        Ok(InitOutcome::Configured { .. }) => EXIT_SUCCESS,
        Ok(InitOutcome::AlreadyConfigured { file }) => {
            eprintln!("cz already configured in {}", file.display());
            EXIT_ALREADY_CONFIGURED
        }
        Ok(InitOutcome::Misconfigured { file }) => {
            eprintln!("{} exists, but does not contain valid config!", file.display());
            EXIT_MISCONFIGURED
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the init command
pub fn run_init_inner(paths: &ProjectPaths) -> Result<InitOutcome, ActionError> {
    let (target, disposition) = locator::assess(paths)?;

    match disposition {
        Disposition::AlreadyConfigured => Ok(InitOutcome::AlreadyConfigured { file: target }),
        Disposition::Misconfigured => Ok(InitOutcome::Misconfigured { file: target }),
        Disposition::NeedsConfig => {
            println!("Adding Commitizen config to {}", target.display());

            let info = locator::get_current_version_info(paths)?;
            println!("Version set to {} with filepath {}", info.version, info.locator);

            let fragment = merger::build_fragment(&info.version, &info.locator)?;
            let existing = merger::read_existing(&target)?;
            let merged = merger::merge(&existing, &fragment)?;
            merger::write(&target, &merged)?;

            Ok(InitOutcome::Configured {
                file: target,
                version: info.version,
            })
        }
    }
}
