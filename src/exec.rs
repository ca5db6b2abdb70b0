//! External process invocation
//!
//! The bump flow shells out to `git` and `cz`. The contract is narrow: run a
//! command, capture its output, and fail the whole invocation on any nonzero
//! exit. No retries, no timeouts.

use crate::error::ExecError;
use std::process::Command;

/// Captured output of a completed child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args`, blocking until it exits.
///
/// # Errors
///
/// Returns `ExecError::Spawn` if the program cannot be launched and
/// `ExecError::NonZero` if it exits with a nonzero status or dies to a
/// signal. Output is captured with lossy UTF-8 conversion.
pub fn run(program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
    let rendered = render_command(program, args);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ExecError::Spawn {
            command: rendered.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ExecError::NonZero {
            command: rendered,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(CommandOutput { stdout, stderr })
}

/// Human-readable form of the command line, for error messages
fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
