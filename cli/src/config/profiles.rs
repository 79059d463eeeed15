//! Profile resolution and persistence.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::toml_loader;
use crate::error::ConfigError;
use crate::platform::Platform;

/// Profile used when none is given and none was persisted.
pub const DEFAULT_PROFILE: &str = "base";

/// Platform categories added or excluded automatically.
const PLATFORM_CATEGORIES: &[&str] = &["macos", "linux"];

/// A resolved profile with its active and excluded categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Profile name as selected by the user.
    pub name: String,
    /// Categories whose sections are loaded (sorted, deduplicated).
    pub active_categories: Vec<String>,
    /// Categories explicitly turned off (sorted, deduplicated).
    pub excluded_categories: Vec<String>,
}

/// Raw profile definition from profiles.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileDef {
    include: Vec<String>,
    exclude: Vec<String>,
}

fn default_definitions() -> BTreeMap<String, ProfileDef> {
    BTreeMap::from([
        (
            "base".to_string(),
            ProfileDef {
                include: vec![],
                exclude: vec!["full".to_string()],
            },
        ),
        (
            "full".to_string(),
            ProfileDef {
                include: vec!["full".to_string()],
                exclude: vec![],
            },
        ),
    ])
}

fn load_definitions(path: &Path) -> Result<BTreeMap<String, ProfileDef>, ConfigError> {
    if !path.exists() {
        return Ok(default_definitions());
    }
    toml_loader::load_config(path)
}

/// Resolve a profile by name: compute the active and excluded categories,
/// adding the categories of the detected platform.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidProfile`] if the profile is not defined, or
/// a parse error if profiles.toml is malformed.
pub fn resolve(name: &str, conf_dir: &Path, platform: &Platform) -> Result<Profile, ConfigError> {
    let defs = load_definitions(&conf_dir.join("profiles.toml"))?;
    let def = defs.get(name).ok_or_else(|| ConfigError::InvalidProfile {
        name: name.to_string(),
        available: defs.keys().cloned().collect::<Vec<_>>().join(", "),
    })?;

    let mut active: Vec<String> = vec!["base".to_string()];
    active.extend(def.include.iter().cloned());
    let mut excluded = def.exclude.clone();

    for category in PLATFORM_CATEGORIES {
        if platform.excludes_category(category) {
            excluded.push((*category).to_string());
        } else {
            active.push((*category).to_string());
        }
    }

    active.retain(|c| !excluded.contains(c));
    active.sort();
    active.dedup();
    excluded.sort();
    excluded.dedup();

    Ok(Profile {
        name: name.to_string(),
        active_categories: active,
        excluded_categories: excluded,
    })
}

/// Location of the persisted profile selection.
///
/// Uses `$XDG_CONFIG_HOME/workstation/profile`, falling back to
/// `~/.config/workstation/profile`.
#[must_use]
pub fn persisted_path(config_home: Option<PathBuf>, home: &Path) -> PathBuf {
    config_home
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| home.join(".config"))
        .join("workstation")
        .join("profile")
}

/// Read the persisted profile, if any.
#[must_use]
pub fn read_persisted(path: &Path) -> Option<String> {
    let name = std::fs::read_to_string(path).ok()?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Persist the profile selection for the next run.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be written.
pub fn persist(path: &Path, name: &str) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, format!("{name}\n")).map_err(io_err)
}

/// Resolve the profile from the CLI argument, the persisted selection, or
/// [`DEFAULT_PROFILE`], in that order. The chosen name is persisted unless
/// `dry_run` is set.
///
/// # Errors
///
/// Returns an error if the profile is unknown or cannot be persisted.
pub fn resolve_from_args(
    cli_profile: Option<&str>,
    root: &Path,
    state_file: &Path,
    platform: &Platform,
    dry_run: bool,
) -> Result<Profile, ConfigError> {
    let name = cli_profile
        .map(str::to_string)
        .or_else(|| read_persisted(state_file))
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let profile = resolve(&name, &root.join("conf"), platform)?;
    if !dry_run && read_persisted(state_file).as_deref() != Some(name.as_str()) {
        persist(state_file, &name)?;
    }
    Ok(profile)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::Os;

    fn macos() -> Platform {
        Platform::new(Os::MacOs, true)
    }

    fn linux() -> Platform {
        Platform::new(Os::Linux, false)
    }

    fn has(list: &[String], item: &str) -> bool {
        list.iter().any(|c| c == item)
    }

    #[test]
    fn default_definitions_has_base_and_full() {
        let defs = default_definitions();
        assert!(defs.contains_key("base"));
        assert!(defs.contains_key("full"));
    }

    #[test]
    fn resolve_base_on_macos() {
        let dir = tempfile::tempdir().unwrap();
        let profile = resolve("base", dir.path(), &macos()).unwrap();
        assert!(has(&profile.active_categories, "base"));
        assert!(has(&profile.active_categories, "macos"));
        assert!(!has(&profile.active_categories, "full"));
        assert!(has(&profile.excluded_categories, "linux"));
        assert!(has(&profile.excluded_categories, "full"));
    }

    #[test]
    fn resolve_full_on_linux() {
        let dir = tempfile::tempdir().unwrap();
        let profile = resolve("full", dir.path(), &linux()).unwrap();
        assert_eq!(profile.active_categories, vec!["base", "full", "linux"]);
        assert_eq!(profile.excluded_categories, vec!["macos"]);
    }

    #[test]
    fn resolve_from_profiles_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profiles.toml"),
            "[ml]\ninclude = [\"full\", \"aws\"]\n\n[minimal]\nexclude = [\"aws\"]\n",
        )
        .unwrap();
        let profile = resolve("ml", dir.path(), &macos()).unwrap();
        assert_eq!(profile.active_categories, vec!["aws", "base", "full", "macos"]);

        let err = resolve("base", dir.path(), &macos()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown profile 'base' (available: minimal, ml)"
        );
    }

    #[test]
    fn excluded_wins_over_included() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profiles.toml"),
            "[odd]\ninclude = [\"gpu\"]\nexclude = [\"gpu\"]\n",
        )
        .unwrap();
        let profile = resolve("odd", dir.path(), &linux()).unwrap();
        assert!(!has(&profile.active_categories, "gpu"));
    }

    #[test]
    fn resolve_unknown_profile_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve("nonexistent", dir.path(), &linux()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProfile { .. }));
    }

    #[test]
    fn persisted_path_prefers_xdg() {
        let home = Path::new("/home/u");
        assert_eq!(
            persisted_path(Some(PathBuf::from("/xdg")), home),
            PathBuf::from("/xdg/workstation/profile")
        );
        assert_eq!(
            persisted_path(None, home),
            PathBuf::from("/home/u/.config/workstation/profile")
        );
        assert_eq!(
            persisted_path(Some(PathBuf::from("relative")), home),
            PathBuf::from("/home/u/.config/workstation/profile")
        );
    }

    #[test]
    fn persist_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile");
        assert_eq!(read_persisted(&path), None);
        persist(&path, "full").unwrap();
        assert_eq!(read_persisted(&path).as_deref(), Some("full"));
    }

    #[test]
    fn resolve_from_args_precedence() {
        let root = tempfile::tempdir().unwrap();
        let state = root.path().join("state").join("profile");

        let p = resolve_from_args(None, root.path(), &state, &linux(), false).unwrap();
        assert_eq!(p.name, DEFAULT_PROFILE);
        assert_eq!(read_persisted(&state).as_deref(), Some("base"));

        let p = resolve_from_args(Some("full"), root.path(), &state, &linux(), false).unwrap();
        assert_eq!(p.name, "full");

        let p = resolve_from_args(None, root.path(), &state, &linux(), false).unwrap();
        assert_eq!(p.name, "full", "persisted selection should be reused");
    }

    #[test]
    fn dry_run_does_not_persist() {
        let root = tempfile::tempdir().unwrap();
        let state = root.path().join("profile");
        resolve_from_args(Some("full"), root.path(), &state, &linux(), true).unwrap();
        assert!(!state.exists());
    }
}
