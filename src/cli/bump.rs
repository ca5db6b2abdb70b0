//! Bump command implementation
//!
//! This module implements `cz-action bump`, which:
//! - Fetches existing git tags so Commitizen sees the full release history
//! - Runs `cz bump` and detects whether a new version was actually cut
//! - Queries the resulting project version
//! - Reports `updated` and `version` as workflow outputs

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::ActionError;
use crate::{exec, output};

/// Line Commitizen prints when no bumpable commits are found
const NO_INCREMENT_LINE: &str = "increment detected: None";

/// Run the bump command.
///
/// Every child process must exit zero or the whole invocation fails; a bump
/// that finds no increment still succeeds and reports `updated=false`.
pub fn run_bump() -> i32 {
    match run_bump_inner() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the bump command
fn run_bump_inner() -> Result<(), ActionError> {
    exec::run("git", &["fetch", "--tags"])?;

    let bump = exec::run("cz", &["bump", "--no-verify", "--yes"])?;
    let updated = version_was_updated(&bump.stdout);
    output::set_output("updated", if updated { "true" } else { "false" })?;

    let version = exec::run("cz", &["version", "--project"])?;
    output::set_output("version", version.stdout.trim())?;

    Ok(())
}

/// A bump happened unless Commitizen reported no detected increment.
fn version_was_updated(bump_stdout: &str) -> bool {
    !bump_stdout
        .lines()
        .any(|line| line.trim() == NO_INCREMENT_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_when_a_version_was_cut() {
        let stdout = "bump: version 1.2.2 → 1.2.3\ntag to create: v1.2.3\n";
        assert!(version_was_updated(stdout));
    }

    #[test]
    fn test_not_updated_when_no_increment_detected() {
        let stdout = "increment detected: None\n";
        assert!(!version_was_updated(stdout));
    }

    #[test]
    fn test_no_increment_line_matches_anywhere_in_output() {
        let stdout = "some preamble\nincrement detected: None\ntrailing noise\n";
        assert!(!version_was_updated(stdout));
    }

    #[test]
    fn test_partial_match_does_not_count() {
        let stdout = "increment detected: MINOR\n";
        assert!(version_was_updated(stdout));
    }

    #[test]
    fn test_empty_output_counts_as_updated() {
        assert!(version_was_updated(""));
    }
}
