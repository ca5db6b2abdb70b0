//! Fixed file locations and the Commitizen configuration template
//!
//! Everything that was a module-level constant in earlier iterations lives
//! here as one immutable value, so the locator and merger can be exercised
//! against injected paths instead of the process working directory.

use std::path::{Path, PathBuf};

/// Version written to a freshly created `VERSION` file
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Top-level namespace key all tool configuration nests under
pub const TOOL_TABLE: &str = "tool";

/// Key of the Commitizen entry inside the `[tool]` namespace
pub const CZ_TABLE: &str = "commitizen";

/// Canonical shape of the configuration to insert. The `version` field and
/// the head of `version_files` are filled in per invocation; the remaining
/// fields are constants.
pub const CZ_TEMPLATE: &str = r#"[tool.commitizen]
name = "cz_conventional_commits"
version = ""
tag_format = "v$version"
bump_message = "chore(version): $current_version → $new_version"
version_files = ["README.md:version-badge"]
"#;

/// The candidate files of one project directory.
///
/// Priority for the config target: `pyproject` then `cz_toml`. Priority for
/// version discovery: `pyproject`, `package_json`, `version_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Primary manifest (`pyproject.toml`)
    pub pyproject: PathBuf,
    /// Dedicated fallback config file (`.cz.toml`)
    pub cz_toml: PathBuf,
    /// Node manifest consulted for version discovery (`package.json`)
    pub package_json: PathBuf,
    /// Plain-text version file (`VERSION`)
    pub version_file: PathBuf,
}

impl ProjectPaths {
    /// Paths rooted at `dir`. Used by tests to avoid touching the cwd.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            pyproject: dir.join("pyproject.toml"),
            cz_toml: dir.join(".cz.toml"),
            package_json: dir.join("package.json"),
            version_file: dir.join("VERSION"),
        }
    }
}

impl Default for ProjectPaths {
    /// Bare relative names, resolved against the process working directory.
    /// Keeps version locators short (`pyproject.toml:version`) when the tool
    /// runs from the project root, which is how CI invokes it.
    fn default() -> Self {
        Self {
            pyproject: PathBuf::from("pyproject.toml"),
            cz_toml: PathBuf::from(".cz.toml"),
            package_json: PathBuf::from("package.json"),
            version_file: PathBuf::from("VERSION"),
        }
    }
}
