//! Fragment construction and format-preserving merge
//!
//! The merge is deliberately textual: serialize both sides, concatenate with
//! one blank line between them, re-parse. A structural tree merge can drop
//! formatting metadata when inserting nested tables; concatenation of two
//! independently valid documents cannot corrupt either side's layout.

use crate::config::paths::{CZ_TABLE, CZ_TEMPLATE, TOOL_TABLE};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Value, value};

/// Instantiate the configuration fragment for one invocation.
///
/// Sets the `version` field and puts `version_locator` at the head of
/// `version_files`, ahead of the template's fixed badge entry. Every other
/// field is a template constant.
pub fn build_fragment(version: &str, version_locator: &str) -> Result<DocumentMut, ConfigError> {
    let mut doc: DocumentMut = CZ_TEMPLATE
        .parse()
        .map_err(|e: toml_edit::TomlError| ConfigError::Merge(e.to_string()))?;

    doc[TOOL_TABLE][CZ_TABLE]["version"] = value(version);

    let version_files = doc[TOOL_TABLE][CZ_TABLE]["version_files"]
        .as_array_mut()
        .ok_or_else(|| ConfigError::Merge("template version_files is not an array".to_string()))?;

    // Rebuild the list so the discovered locator leads and every element
    // gets uniform `"a", "b"` spacing regardless of template decor
    let fixed_entries: Vec<Value> = version_files.iter().cloned().collect();
    version_files.clear();
    version_files.push(version_locator);
    for entry in fixed_entries {
        version_files.push(entry);
    }

    Ok(doc)
}

/// Parse the target file, or start from an empty document if it is absent.
pub fn read_existing(path: &Path) -> Result<DocumentMut, ConfigError> {
    if path.exists() {
        crate::config::locator::parse_file(path)
    } else {
        Ok(DocumentMut::new())
    }
}

/// Combine the fragment into the existing document.
///
/// Precondition: `fragment`'s `[tool.commitizen]` key is absent from
/// `existing`. If it is present anyway, the later table wins under the
/// parser's redefinition rules; that case is not guarded here.
pub fn merge(existing: &DocumentMut, fragment: &DocumentMut) -> Result<DocumentMut, ConfigError> {
    let existing_text = existing.to_string();
    let fragment_text = fragment.to_string();

    let merged = if existing_text.trim().is_empty() {
        fragment_text
    } else {
        // Exactly one blank line between the original tail and the fragment
        format!(
            "{}\n\n{}",
            existing_text.trim_end_matches('\n'),
            fragment_text
        )
    };

    merged
        .parse()
        .map_err(|e: toml_edit::TomlError| ConfigError::Merge(e.to_string()))
}

/// Serialize the document and overwrite the target file.
pub fn write(path: &Path, doc: &DocumentMut) -> Result<(), ConfigError> {
    fs::write(path, doc.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fragment_carries_version_and_locator() {
        let doc = build_fragment("0.10.8", "pyproject.toml:version").unwrap();
        let cz = doc["tool"]["commitizen"].as_table().unwrap();

        assert_eq!(cz["name"].as_str(), Some("cz_conventional_commits"));
        assert_eq!(cz["version"].as_str(), Some("0.10.8"));
        assert_eq!(cz["tag_format"].as_str(), Some("v$version"));
        assert_eq!(
            cz["bump_message"].as_str(),
            Some("chore(version): $current_version → $new_version")
        );

        let files: Vec<&str> = cz["version_files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(files, ["pyproject.toml:version", "README.md:version-badge"]);
    }

    #[test]
    fn test_read_existing_missing_file_yields_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let doc = read_existing(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(doc.as_table().is_empty());
    }

    #[test]
    fn test_read_existing_preserves_text_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pyproject.toml");
        let original = "# build config\n[tool.poetry]\nname = \"demo\"   # inline\nversion = \"0.10.8\"\n\n[tool.poetry.dependencies]\npython = \"^3.11\"\n";
        fs::write(&path, original).unwrap();

        let doc = read_existing(&path).unwrap();
        assert_eq!(doc.to_string(), original);
    }

    #[test]
    fn test_merge_appends_after_one_blank_line() {
        let existing: DocumentMut = "[tool.poetry]\nversion = \"0.10.8\"\n".parse().unwrap();
        let fragment = build_fragment("0.10.8", "pyproject.toml:version").unwrap();

        let merged = merge(&existing, &fragment).unwrap();
        let text = merged.to_string();

        assert!(text.starts_with("[tool.poetry]\nversion = \"0.10.8\"\n\n[tool.commitizen]\n"));
    }

    #[test]
    fn test_merge_keeps_both_sides_keys() {
        let existing: DocumentMut =
            "[build-system]\nrequires = [\"poetry-core\"]\n\n[tool.poetry]\nversion = \"1.0.0\"\n"
                .parse()
                .unwrap();
        let fragment = build_fragment("1.0.0", "pyproject.toml:version").unwrap();

        let merged = merge(&existing, &fragment).unwrap();
        assert!(merged.get("build-system").is_some());
        let tool = merged["tool"].as_table().unwrap();
        assert!(tool.contains_key("poetry"));
        assert!(tool.contains_key("commitizen"));
    }

    #[test]
    fn test_merge_preserves_existing_formatting_and_comments() {
        let original = "# hand-authored, oddly spaced\n[tool.poetry]\nname    = \"demo\"  # with an inline comment\nversion = \"0.10.8\"\n";
        let existing: DocumentMut = original.parse().unwrap();
        let fragment = build_fragment("0.10.8", "pyproject.toml:version").unwrap();

        let merged = merge(&existing, &fragment).unwrap().to_string();
        // Original bytes are intact; only the fragment was appended
        assert!(merged.starts_with(original));
    }

    #[test]
    fn test_merge_into_empty_document_is_just_the_fragment() {
        let existing = DocumentMut::new();
        let fragment = build_fragment("0.1.0", "VERSION").unwrap();

        let merged = merge(&existing, &fragment).unwrap();
        assert_eq!(merged.to_string(), fragment.to_string());
    }

    #[test]
    fn test_merge_handles_missing_trailing_newline() {
        let existing: DocumentMut = "[tool.poetry]\nversion = \"1.0.0\"".parse().unwrap();
        let fragment = build_fragment("1.0.0", "pyproject.toml:version").unwrap();

        let merged = merge(&existing, &fragment).unwrap().to_string();
        assert!(merged.contains("version = \"1.0.0\"\n\n[tool.commitizen]"));
    }

    #[test]
    fn test_write_then_reparse_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".cz.toml");
        let fragment = build_fragment("0.1.0", "VERSION").unwrap();

        write(&path, &fragment).unwrap();
        let reread = read_existing(&path).unwrap();
        assert_eq!(reread.to_string(), fragment.to_string());
    }
}
