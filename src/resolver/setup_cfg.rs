//! INI-style setup.cfg reader
//!
//! Reads just enough of the INI dialect to extract the `name` key from the
//! `[metadata]` section: section headers, `key = value` / `key: value`
//! lines, and full-line comments. Everything else is skipped.

use crate::resolver::error::{ResolveError, ResolveResult};
use std::path::Path;

/// Extract the package name from a setup.cfg file, if it declares one
pub fn package_name(path: &Path) -> ResolveResult<Option<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ResolveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(package_name_from_str(&contents))
}

/// Extract `name` from the `[metadata]` section of INI-formatted text
pub fn package_name_from_str(contents: &str) -> Option<String> {
    let mut in_metadata = false;

    for line in contents.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let section = trimmed[1..trimmed.len() - 1].trim();
            in_metadata = section == "metadata";
            continue;
        }

        if !in_metadata {
            continue;
        }

        // Continuation lines of multi-line values are indented; the name key
        // is single-valued, so they are simply skipped.
        if line.starts_with(char::is_whitespace) {
            continue;
        }

        if let Some((key, value)) = split_key_value(trimmed) {
            if key == "name" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Split on the first `=` or `:` separator, whichever comes first
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let eq = line.find('=');
    let colon = line.find(':');
    let split_at = match (eq, colon) {
        (Some(e), Some(c)) => e.min(c),
        (Some(e), None) => e,
        (None, Some(c)) => c,
        (None, None) => return None,
    };
    let (key, rest) = line.split_at(split_at);
    Some((key.trim(), rest[1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_equals_separator() {
        let cfg = "[metadata]\nname = napari-svg\nversion = 0.1.6\n";
        assert_eq!(package_name_from_str(cfg).as_deref(), Some("napari-svg"));
    }

    #[test]
    fn test_name_with_colon_separator() {
        let cfg = "[metadata]\nname: my-plugin\n";
        assert_eq!(package_name_from_str(cfg).as_deref(), Some("my-plugin"));
    }

    #[test]
    fn test_name_outside_metadata_section_ignored() {
        let cfg = "[options]\nname = wrong\n\n[metadata]\nname = right\n";
        assert_eq!(package_name_from_str(cfg).as_deref(), Some("right"));

        let only_options = "[options]\nname = wrong\n";
        assert_eq!(package_name_from_str(only_options), None);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let cfg = "# build configuration\n\n[metadata]\n; packaging name\nname = commented-plugin\n";
        assert_eq!(
            package_name_from_str(cfg).as_deref(),
            Some("commented-plugin")
        );
    }

    #[test]
    fn test_missing_name_key() {
        let cfg = "[metadata]\nversion = 1.0\nauthor = someone\n";
        assert_eq!(package_name_from_str(cfg), None);
    }

    #[test]
    fn test_empty_value_is_not_a_name() {
        let cfg = "[metadata]\nname =\n";
        assert_eq!(package_name_from_str(cfg), None);
    }

    #[test]
    fn test_continuation_lines_skipped() {
        let cfg = "[metadata]\ndescription = first line\n    name = not-a-key\nname = actual\n";
        assert_eq!(package_name_from_str(cfg).as_deref(), Some("actual"));
    }

    #[test]
    fn test_read_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("setup.cfg");
        std::fs::write(&path, "[metadata]\nname = on-disk\n").unwrap();

        assert_eq!(package_name(&path).unwrap().as_deref(), Some("on-disk"));
    }
}
