//! Configuration loading from the `conf/` directory.
pub mod category_matcher;
pub mod homebrew;
pub mod infra;
pub mod profiles;
pub mod shell_profile;
pub mod toml_loader;
pub mod tools;
pub mod validation;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// All loaded configuration for a resolved profile.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root containing `conf/`.
    pub root: PathBuf,
    /// Profile the config was filtered by.
    pub profile: profiles::Profile,
    /// Tools to install, in declared order.
    pub tools: Vec<tools::Tool>,
    /// Shell-profile blocks, in declared order.
    pub shell_profile: Vec<shell_profile::ProfileLine>,
    /// Infrastructure composition.
    pub infra: infra::InfraConfig,
    /// Homebrew installer settings.
    pub homebrew: homebrew::HomebrewConfig,
}

impl Config {
    /// Load all configuration for the given profile from the conf/ directory.
    ///
    /// Missing files load as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any present file cannot be read or parsed.
    pub fn load(root: &Path, profile: &profiles::Profile, _platform: &Platform) -> Result<Self> {
        let conf = root.join("conf");
        let active = &profile.active_categories;

        let tools =
            tools::load(&conf.join("tools.toml"), active).context("loading tools.toml")?;
        let shell_profile = shell_profile::load(&conf.join("shell-profile.toml"), active)
            .context("loading shell-profile.toml")?;
        let infra = infra::load(&conf.join("infra.toml"), active).context("loading infra.toml")?;
        let homebrew =
            homebrew::load(&conf.join("homebrew.toml")).context("loading homebrew.toml")?;

        Ok(Self {
            root: root.to_path_buf(),
            profile: profile.clone(),
            tools,
            shell_profile,
            infra,
            homebrew,
        })
    }

    /// Check the loaded config for problems that do not prevent a run.
    #[must_use]
    pub fn validate(&self, platform: &Platform) -> Vec<validation::ValidationWarning> {
        validation::validate_all(self, platform)
    }
}

/// Shared helpers for config unit tests.
#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub mod test_helpers {
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Write `content` to `test.toml` in a fresh temp dir.
    ///
    /// The dir guard must be kept alive for as long as the path is used.
    pub fn write_temp_toml(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    /// Assert that `load` returns an empty list for a missing file.
    pub fn assert_load_missing_returns_empty<T, E: std::fmt::Debug>(
        load: impl Fn(&Path, &[String]) -> Result<Vec<T>, E>,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let items = load(&dir.path().join("nonexistent.toml"), &["base".to_string()]).unwrap();
        assert!(items.is_empty(), "missing file should produce empty list");
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::Os;

    #[test]
    fn load_empty_conf_dir() {
        let root = tempfile::tempdir().unwrap();
        let platform = Platform::new(Os::MacOs, true);
        let profile = profiles::resolve("base", &root.path().join("conf"), &platform).unwrap();
        let config = Config::load(root.path(), &profile, &platform).unwrap();
        assert!(config.tools.is_empty());
        assert!(config.shell_profile.is_empty());
        assert!(config.infra.is_empty());
        assert_eq!(config.homebrew, homebrew::HomebrewConfig::default());
        assert!(config.validate(&platform).is_empty());
    }

    #[test]
    fn load_applies_profile_categories() {
        let root = tempfile::tempdir().unwrap();
        let conf = root.path().join("conf");
        std::fs::create_dir_all(&conf).unwrap();
        std::fs::write(
            conf.join("tools.toml"),
            "[base]\ntools = [{ name = \"git\", method = \"brew\" }]\n\n\
             [full]\ntools = [{ name = \"terraform\", method = \"brew\" }]\n",
        )
        .unwrap();
        std::fs::write(
            conf.join("shell-profile.toml"),
            "[full]\nlines = [{ marker = \"tf\", content = \"alias tf=terraform\" }]\n",
        )
        .unwrap();

        let platform = Platform::new(Os::Linux, false);
        let base = profiles::resolve("base", &conf, &platform).unwrap();
        let config = Config::load(root.path(), &base, &platform).unwrap();
        assert_eq!(config.tools.len(), 1);
        assert!(config.shell_profile.is_empty());

        let full = profiles::resolve("full", &conf, &platform).unwrap();
        let config = Config::load(root.path(), &full, &platform).unwrap();
        assert_eq!(config.tools.len(), 2);
        assert_eq!(config.shell_profile.len(), 1);
    }

    #[test]
    fn parse_error_names_the_file() {
        let root = tempfile::tempdir().unwrap();
        let conf = root.path().join("conf");
        std::fs::create_dir_all(&conf).unwrap();
        std::fs::write(conf.join("tools.toml"), "[base\n").unwrap();
        let platform = Platform::new(Os::Linux, false);
        let profile = profiles::resolve("base", &conf, &platform).unwrap();
        let err = Config::load(root.path(), &profile, &platform).unwrap_err();
        assert!(format!("{err:#}").contains("tools.toml"));
    }
}
