//! GitHub Actions output reporting
//!
//! One line per output value. When `$GITHUB_OUTPUT` is set (the current
//! runner contract) the value is appended to that file as `key=value`;
//! otherwise the legacy `::set-output` workflow command is printed on
//! stdout so the action still works on older runners.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};

/// Report one key/value output to the surrounding workflow.
pub fn set_output(key: &str, value: &str) -> io::Result<()> {
    write_output(std::env::var_os("GITHUB_OUTPUT"), key, value)
}

/// Inner form with the `$GITHUB_OUTPUT` destination injected, so both
/// branches are testable without mutating the process environment.
fn write_output(github_output: Option<OsString>, key: &str, value: &str) -> io::Result<()> {
    match github_output {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{key}={value}")
        }
        None => {
            println!("{}", format_workflow_command(key, value));
            Ok(())
        }
    }
}

/// Legacy `::set-output` form, kept for runners without `$GITHUB_OUTPUT`
fn format_workflow_command(key: &str, value: &str) -> String {
    format!("::set-output name={key}::{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_workflow_command_shape() {
        assert_eq!(
            format_workflow_command("updated", "true"),
            "::set-output name=updated::true"
        );
        assert_eq!(
            format_workflow_command("version", "1.2.3"),
            "::set-output name=version::1.2.3"
        );
    }

    #[test]
    fn test_write_output_appends_key_value_lines_to_github_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github_output");
        let destination = Some(path.clone().into_os_string());

        write_output(destination.clone(), "updated", "true").unwrap();
        write_output(destination, "version", "1.2.3").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "updated=true\nversion=1.2.3\n"
        );
    }

    #[test]
    fn test_write_output_does_not_truncate_earlier_runner_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github_output");
        fs::write(&path, "prior_step=done\n").unwrap();

        write_output(Some(path.clone().into_os_string()), "updated", "false").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "prior_step=done\nupdated=false\n"
        );
    }
}
