//! Shell-profile block resource.
//!
//! A block is identified by its marker. If the marker text appears anywhere
//! in the profile the block counts as applied; otherwise it is appended.
//! Existing content is never rewritten, reordered or removed.
use anyhow::{Context as _, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use super::helpers::fs::{ensure_parent_dir, read_if_exists};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A marker-guarded block in a shell startup file.
#[derive(Debug, Clone)]
pub struct ProfileLineResource {
    /// Profile file the block is appended to.
    pub path: PathBuf,
    /// Presence marker.
    pub marker: String,
    /// Block body.
    pub content: String,
}

impl ProfileLineResource {
    /// Create a new profile block resource.
    #[must_use]
    pub fn new(path: &Path, marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            marker: marker.into(),
            content: content.into(),
        }
    }

    /// Determine the state from already-read profile text.
    #[must_use]
    pub fn state_in(&self, profile: &str) -> ResourceState {
        if profile.contains(&self.marker) {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        }
    }

    /// Exact text appended by [`Applicable::apply`].
    #[must_use]
    pub fn block(&self) -> String {
        format!(
            "\n# {}\n{}\n",
            self.marker,
            self.content.trim_end_matches('\n')
        )
    }

    fn read_profile(&self) -> Result<String> {
        Ok(read_if_exists(&self.path)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default())
    }
}

impl Applicable for ProfileLineResource {
    fn description(&self) -> String {
        format!("{}: {}", self.path.display(), self.marker)
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.state_in(&self.read_profile()?) == ResourceState::Correct {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        ensure_parent_dir(&self.path)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        file.write_all(self.block().as_bytes())
            .with_context(|| format!("append to {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for ProfileLineResource {
    fn current_state(&self) -> Result<ResourceState> {
        Ok(self.state_in(&self.read_profile()?))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn brew_block(path: &Path) -> ProfileLineResource {
        ProfileLineResource::new(
            path,
            "workstation:brew",
            "eval \"$(/opt/homebrew/bin/brew shellenv)\"",
        )
    }

    #[test]
    fn missing_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let r = brew_block(&dir.path().join(".zshrc"));
        assert_eq!(r.current_state().unwrap(), ResourceState::Missing);
    }

    #[test]
    fn apply_creates_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(".zshrc");
        let r = brew_block(&path);
        assert_eq!(r.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\n# workstation:brew\neval \"$(/opt/homebrew/bin/brew shellenv)\"\n"
        );
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn apply_appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "export EDITOR=vim\n").unwrap();
        brew_block(&path).apply().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("export EDITOR=vim\n\n# workstation:brew\n"));
    }

    #[test]
    fn second_apply_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        let r = brew_block(&path);
        r.apply().unwrap();
        let first = std::fs::read(&path).unwrap();
        assert_eq!(r.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn marker_anywhere_counts_as_present() {
        let r = ProfileLineResource::new(Path::new("/x"), "pyenv init", "eval \"$(pyenv init -)\"");
        assert_eq!(
            r.state_in("# set up by hand\neval \"$(pyenv init -)\"\n"),
            ResourceState::Correct
        );
    }

    #[test]
    fn existing_block_is_never_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        let original = "# workstation:brew\nold content the user edited\n";
        std::fs::write(&path, original).unwrap();
        assert_eq!(brew_block(&path).apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn trailing_newlines_in_content_are_normalized() {
        let r = ProfileLineResource::new(Path::new("/x"), "m", "line\n\n");
        assert_eq!(r.block(), "\n# m\nline\n");
    }

    #[test]
    fn remove_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let r = brew_block(&dir.path().join(".zshrc"));
        assert!(r.remove().is_err());
    }

    #[test]
    fn description_names_file_and_marker() {
        let r = brew_block(Path::new("/home/u/.zshrc"));
        assert_eq!(r.description(), "/home/u/.zshrc: workstation:brew");
    }
}
