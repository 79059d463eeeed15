//! Homebrew installer settings (`conf/homebrew.toml`).
use serde::Deserialize;
use std::path::Path;

use super::toml_loader;
use crate::error::ConfigError;

/// Official installer script location.
pub const DEFAULT_INSTALLER_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Where to fetch the Homebrew installer and how to verify it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomebrewConfig {
    /// URL of the installer script.
    pub installer_url: String,
    /// Pinned SHA-256 of the script; unpinned installers run unverified.
    pub installer_sha256: Option<String>,
}

impl Default for HomebrewConfig {
    fn default() -> Self {
        Self {
            installer_url: DEFAULT_INSTALLER_URL.to_string(),
            installer_sha256: None,
        }
    }
}

/// Load homebrew.toml; a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<HomebrewConfig, ConfigError> {
    toml_loader::load_config(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::test_helpers::write_temp_toml;

    #[test]
    fn missing_file_uses_official_installer() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("homebrew.toml")).unwrap();
        assert_eq!(cfg.installer_url, DEFAULT_INSTALLER_URL);
        assert!(cfg.installer_sha256.is_none());
    }

    #[test]
    fn pinned_checksum() {
        let (_dir, path) = write_temp_toml("installer_sha256 = \"abc123\"\n");
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.installer_url, DEFAULT_INSTALLER_URL);
        assert_eq!(cfg.installer_sha256.as_deref(), Some("abc123"));
    }
}
