//! File resources: placeholder files and generated files.
use anyhow::{Context as _, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::helpers::fs::{ensure_parent_dir, read_if_exists};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A file that must exist; created empty if absent, never modified otherwise.
#[derive(Debug, Clone)]
pub struct EmptyFileResource {
    /// File path.
    pub path: PathBuf,
    /// Unix permission bits used when the file is created.
    pub mode: Option<u32>,
}

impl EmptyFileResource {
    /// Create a new empty-file resource.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            mode: None,
        }
    }

    /// Create the file with the given permission bits (ignored off Unix).
    #[must_use]
    pub const fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl Applicable for EmptyFileResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.path)?;
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        if let Some(mode) = self.mode {
            use std::os::unix::fs::OpenOptionsExt as _;
            options.mode(mode);
        }
        match options.open(&self.path) {
            Ok(_) => Ok(ResourceChange::Applied),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(ResourceChange::AlreadyCorrect),
            Err(e) => Err(e).with_context(|| format!("create {}", self.path.display())),
        }
    }
}

impl Resource for EmptyFileResource {
    fn current_state(&self) -> Result<ResourceState> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(ResourceState::Correct),
            Ok(_) => Ok(ResourceState::Invalid {
                reason: "path exists but is not a file".to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResourceState::Missing),
            Err(e) => Err(e).with_context(|| format!("stat {}", self.path.display())),
        }
    }
}

/// A file whose full content is rendered by this tool.
#[derive(Debug, Clone)]
pub struct GeneratedFileResource {
    /// File path.
    pub path: PathBuf,
    /// Exact desired content.
    pub content: String,
}

impl GeneratedFileResource {
    /// Create a new generated-file resource.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

impl Applicable for GeneratedFileResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, &self.content)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }

    fn remove(&self) -> Result<ResourceChange> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(ResourceChange::Applied),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResourceChange::AlreadyCorrect),
            Err(e) => Err(e).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}

impl Resource for GeneratedFileResource {
    fn current_state(&self) -> Result<ResourceState> {
        Ok(match read_if_exists(&self.path)? {
            None => ResourceState::Missing,
            Some(bytes) if bytes == self.content.as_bytes() => ResourceState::Correct,
            Some(bytes) => ResourceState::Incorrect {
                current: format!(
                    "{} bytes differ from rendered {}",
                    bytes.len(),
                    self.content.len()
                ),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".aws").join("credentials");
        let r = EmptyFileResource::new(&path);
        assert_eq!(r.current_state().unwrap(), ResourceState::Missing);
        assert_eq!(r.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(std::fs::read(&path).unwrap(), b"");
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn empty_file_never_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "[default]\nregion = us-east-1\n").unwrap();
        let r = EmptyFileResource::new(&path);
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(r.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[default]\nregion = us-east-1\n"
        );
    }

    #[test]
    fn directory_in_the_way_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let r = EmptyFileResource::new(dir.path());
        assert!(matches!(
            r.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn empty_file_mode_applied_on_create() {
        use std::os::unix::fs::PermissionsExt as _;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        EmptyFileResource::new(&path).with_mode(0o600).apply().unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn generated_file_states() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev").join("backend.tf");
        let r = GeneratedFileResource::new(path.clone(), "terraform {}\n".to_string());
        assert_eq!(r.current_state().unwrap(), ResourceState::Missing);

        r.apply().unwrap();
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);

        std::fs::write(&path, "terraform { }\n").unwrap();
        assert!(matches!(
            r.current_state().unwrap(),
            ResourceState::Incorrect { .. }
        ));

        r.apply().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "terraform {}\n");
    }

    #[test]
    fn generated_file_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provider.tf");
        let r = GeneratedFileResource::new(path.clone(), String::new());
        assert_eq!(r.remove().unwrap(), ResourceChange::AlreadyCorrect);
        r.apply().unwrap();
        assert_eq!(r.remove().unwrap(), ResourceChange::Applied);
        assert!(!path.exists());
    }
}
