//! Config location and version discovery
//!
//! Decides which file owns the Commitizen configuration and where the
//! authoritative version string lives. Both decisions are strict priority
//! chains; each is modeled as an explicit enum rather than nested
//! conditionals so every branch has its own contract.

use crate::config::paths::{CZ_TABLE, DEFAULT_VERSION, ProjectPaths, TOOL_TABLE};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

/// Where the discovered version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// `tool.poetry.version` in the primary manifest
    Pyproject,
    /// Top-level `version` in `package.json`
    PackageJson,
    /// Contents of an existing plain-text version file
    VersionFile,
    /// No source existed; the version file was created with the default
    CreatedDefault,
}

/// The discovered version and its canonical locator string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Current version, e.g. `"0.10.8"`
    pub version: String,
    /// Which file and key holds it, e.g. `"pyproject.toml:version"` or a
    /// bare file path
    pub locator: String,
    /// Which fallback tier produced it
    pub source: VersionSource,
}

/// Outcome of inspecting the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Target has no Commitizen entry yet; proceed to the merger
    NeedsConfig,
    /// Target already carries `[tool.commitizen]`; nothing to do
    AlreadyConfigured,
    /// The dedicated config file exists but holds no usable config; fatal
    Misconfigured,
}

/// Minimal view of `package.json`
#[derive(Debug, Deserialize)]
struct PackageJson {
    version: String,
}

/// Pick the file that should own the Commitizen configuration.
///
/// The primary manifest always wins if present, configured or not. Otherwise
/// the dedicated `.cz.toml` is the target, whether it already exists or is
/// about to be created.
pub fn locate_target_file(paths: &ProjectPaths) -> &Path {
    if paths.pyproject.exists() {
        &paths.pyproject
    } else {
        &paths.cz_toml
    }
}

/// Check whether a parsed document already carries the Commitizen entry.
///
/// Returns `Ok(true)` iff the `[tool]` table's immediate children contain
/// `commitizen`. A document with no `[tool]` table at all (or a non-table
/// `tool` key) is `MalformedDocument`, which callers interpret per file:
/// acceptable for a manifest that serves other tools, fatal for `.cz.toml`.
pub fn is_configured(doc: &DocumentMut, file: &Path) -> Result<bool, ConfigError> {
    let tool = doc
        .get(TOOL_TABLE)
        .and_then(Item::as_table_like)
        .ok_or_else(|| ConfigError::MalformedDocument {
            file: file.to_path_buf(),
        })?;
    Ok(tool.get(CZ_TABLE).is_some())
}

/// Locate the target file and classify it.
///
/// Policy for the primary manifest: a `pyproject.toml` without a `[tool]`
/// table, or with a `[tool]` table that lacks `commitizen`, is simply
/// unconfigured. The dedicated `.cz.toml` exists only to hold this tool's
/// config, so the same gaps there are `Misconfigured`.
pub fn assess(paths: &ProjectPaths) -> Result<(PathBuf, Disposition), ConfigError> {
    let target = locate_target_file(paths).to_path_buf();

    // Only the fallback .cz.toml can be absent; the manifest is chosen
    // because it exists
    if !target.exists() {
        return Ok((target, Disposition::NeedsConfig));
    }

    let doc = parse_file(&target)?;
    let is_primary_manifest = target == paths.pyproject;
    let disposition = match is_configured(&doc, &target) {
        Ok(true) => Disposition::AlreadyConfigured,
        Ok(false) | Err(ConfigError::MalformedDocument { .. }) if is_primary_manifest => {
            Disposition::NeedsConfig
        }
        Ok(false) | Err(ConfigError::MalformedDocument { .. }) => Disposition::Misconfigured,
        Err(e) => return Err(e),
    };
    Ok((target, disposition))
}

/// Determine the current version and its canonical source locator.
///
/// Fallback priority: primary manifest, `package.json`, plain-text version
/// file, then create the version file with [`DEFAULT_VERSION`]. Exactly one
/// tier fires per call; only the last has a write side effect.
pub fn get_current_version_info(paths: &ProjectPaths) -> Result<VersionInfo, ConfigError> {
    if paths.pyproject.exists() {
        let doc = parse_file(&paths.pyproject)?;
        let version = doc
            .get(TOOL_TABLE)
            .and_then(Item::as_table_like)
            .and_then(|tool| tool.get("poetry"))
            .and_then(Item::as_table_like)
            .and_then(|poetry| poetry.get("version"))
            .and_then(Item::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                file: paths.pyproject.clone(),
                key: "tool.poetry.version".to_string(),
            })?;
        return Ok(VersionInfo {
            version: version.to_string(),
            locator: format!("{}:version", paths.pyproject.display()),
            source: VersionSource::Pyproject,
        });
    }

    if paths.package_json.exists() {
        let raw = fs::read_to_string(&paths.package_json)?;
        let parsed: PackageJson =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                file: paths.package_json.clone(),
                message: e.to_string(),
            })?;
        return Ok(VersionInfo {
            version: parsed.version,
            locator: format!("{}:version", paths.package_json.display()),
            source: VersionSource::PackageJson,
        });
    }

    if paths.version_file.exists() {
        let version = fs::read_to_string(&paths.version_file)?.trim().to_string();
        return Ok(VersionInfo {
            version,
            locator: paths.version_file.display().to_string(),
            source: VersionSource::VersionFile,
        });
    }

    fs::write(&paths.version_file, format!("{DEFAULT_VERSION}\n"))?;
    Ok(VersionInfo {
        version: DEFAULT_VERSION.to_string(),
        locator: paths.version_file.display().to_string(),
        source: VersionSource::CreatedDefault,
    })
}

/// Parse a TOML file into a format-preserving document
pub(crate) fn parse_file(path: &Path) -> Result<DocumentMut, ConfigError> {
    let raw = fs::read_to_string(path)?;
    raw.parse().map_err(|e: toml_edit::TomlError| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}
