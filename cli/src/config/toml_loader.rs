//! TOML configuration file parsing with category filtering.
use serde::de::DeserializeOwned;
use std::path::Path;

use super::category_matcher::{matches, section_categories};
use crate::error::ConfigError;

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().to_string(),
    )
}

/// Read a TOML file into a table; a missing file yields an empty table.
fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    if !path.exists() {
        return Ok(toml::Table::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::InvalidSyntax {
            file: file_label(path),
            message: e.message().to_string(),
        })
}

/// Deserialize a whole TOML file into `T`.
///
/// A missing file deserializes from an empty document, so `T` must accept
/// that (usually via `#[serde(default)]`).
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read or
/// [`ConfigError::InvalidSyntax`] if it does not match `T`.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let table = read_table(path)?;
    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::InvalidSyntax {
            file: file_label(path),
            message: e.message().to_string(),
        })
}

/// Load a TOML file whose top-level tables are category sections, each
/// holding a single repeated field, and return `(section_name, items)` pairs
/// in file order.
///
/// `extract` receives the deserialized section and returns the items stored
/// inside it (e.g. `|s: ToolSection| s.tools`).
///
/// # Errors
///
/// Returns an error if the file cannot be read or a section does not match `S`.
pub fn load_section_items<S, T>(
    path: &Path,
    extract: impl Fn(S) -> Vec<T>,
) -> Result<Vec<(String, Vec<T>)>, ConfigError>
where
    S: DeserializeOwned,
{
    read_table(path)?
        .into_iter()
        .map(|(name, value)| {
            let section: S = value.try_into().map_err(|e: toml::de::Error| {
                ConfigError::InvalidSyntax {
                    file: file_label(path),
                    message: format!("[{name}]: {}", e.message()),
                }
            })?;
            Ok((name, extract(section)))
        })
        .collect()
}

/// Keep the items of sections whose categories are all active.
#[must_use]
pub fn filter_by_categories<T>(
    items: Vec<(String, Vec<T>)>,
    active_categories: &[String],
) -> Vec<T> {
    items
        .into_iter()
        .filter(|(section_name, _)| {
            matches(&section_categories(section_name), active_categories)
        })
        .flat_map(|(_, items)| items)
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::write_temp_toml;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct NameSection {
        names: Vec<String>,
    }

    #[test]
    fn sections_keep_file_order() {
        let (_dir, path) = write_temp_toml(
            "[zeta]\nnames = [\"z\"]\n\n[alpha]\nnames = [\"a\"]\n\n[mid]\nnames = [\"m\"]\n",
        );
        let items = load_section_items(&path, |s: NameSection| s.names).unwrap();
        let sections: Vec<&str> = items.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(sections, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn filter_drops_inactive_sections() {
        let items = vec![
            ("base".to_string(), vec![1, 2]),
            ("base-macos".to_string(), vec![3]),
            ("full".to_string(), vec![4]),
        ];
        let kept = filter_by_categories(items, &["base".to_string(), "macos".to_string()]);
        assert_eq!(kept, vec![1, 2, 3]);
    }

    #[test]
    fn invalid_syntax_names_the_file() {
        let (_dir, path) = write_temp_toml("[base\nnames = 1\n");
        let err = load_section_items(&path, |s: NameSection| s.names).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidSyntax { ref file, .. } if file == "test.toml"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn schema_mismatch_names_the_section() {
        let (_dir, path) = write_temp_toml("[base]\nnames = 1\n");
        let err = load_section_items(&path, |s: NameSection| s.names).unwrap_err();
        assert!(err.to_string().contains("[base]"), "got: {err}");
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let items =
            load_section_items(&dir.path().join("absent.toml"), |s: NameSection| s.names).unwrap();
        assert!(items.is_empty());
    }
}
