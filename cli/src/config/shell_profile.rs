//! Shell-profile block loading.
use serde::Deserialize;
use std::path::Path;

use super::toml_loader;
use crate::error::ConfigError;
use crate::platform::Platform;

/// Placeholder in `content` replaced by the platform's Homebrew prefix.
pub const HOMEBREW_PREFIX_VAR: &str = "{homebrew_prefix}";

/// A block appended to the shell profile at most once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLine {
    /// Text whose presence anywhere in the profile means the block is applied.
    pub marker: String,
    /// Lines written under the marker comment.
    pub content: String,
}

impl ProfileLine {
    /// Content with platform placeholders expanded.
    #[must_use]
    pub fn render(&self, platform: &Platform) -> String {
        self.content.replace(
            HOMEBREW_PREFIX_VAR,
            &platform.homebrew_prefix().display().to_string(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ProfileSection {
    #[serde(default)]
    lines: Vec<ProfileLine>,
}

/// Load profile blocks from shell-profile.toml, filtered by active categories.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path, active_categories: &[String]) -> Result<Vec<ProfileLine>, ConfigError> {
    let items = toml_loader::load_section_items(path, |s: ProfileSection| s.lines)?;
    Ok(toml_loader::filter_by_categories(items, active_categories))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::{assert_load_missing_returns_empty, write_temp_toml};
    use crate::platform::Os;

    #[test]
    fn parse_lines() {
        let (_dir, path) = write_temp_toml(
            r#"[base]
lines = [
  { marker = "workstation:brew", content = 'eval "$({homebrew_prefix}/bin/brew shellenv)"' },
  { marker = "workstation:aws", content = "export AWS_PAGER=\"\"" },
]
"#,
        );
        let lines = load(&path, &["base".to_string()]).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].marker, "workstation:brew");
        assert_eq!(lines[1].content, "export AWS_PAGER=\"\"");
    }

    #[test]
    fn render_expands_homebrew_prefix() {
        let line = ProfileLine {
            marker: "brew".to_string(),
            content: "eval \"$({homebrew_prefix}/bin/brew shellenv)\"".to_string(),
        };
        assert_eq!(
            line.render(&Platform::new(Os::MacOs, true)),
            "eval \"$(/opt/homebrew/bin/brew shellenv)\""
        );
        assert_eq!(
            line.render(&Platform::new(Os::Linux, false)),
            "eval \"$(/home/linuxbrew/.linuxbrew/bin/brew shellenv)\""
        );
    }

    #[test]
    fn render_without_placeholder_is_identity() {
        let line = ProfileLine {
            marker: "m".to_string(),
            content: "export EDITOR=vim".to_string(),
        };
        assert_eq!(line.render(&Platform::new(Os::MacOs, false)), line.content);
    }

    #[test]
    fn load_missing_file_returns_empty() {
        assert_load_missing_returns_empty(load);
    }
}
