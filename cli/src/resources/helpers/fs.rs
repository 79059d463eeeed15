//! File-system resource helpers.
use anyhow::{Context as _, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Read a file as bytes, returning `None` if it does not exist.
///
/// # Errors
///
/// Returns an error for any failure other than the file being absent.
pub fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
    }
}

/// Display a path with the home directory shortened to `~`.
#[must_use]
pub fn display_path(path: &Path, home: &Path) -> String {
    path.strip_prefix(home).map_or_else(
        |_| path.display().to_string(),
        |rel| format!("~/{}", rel.display()),
    )
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ensure_parent_dir_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("file.txt");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").exists());
    }

    #[test]
    fn ensure_parent_dir_noop_when_parent_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        ensure_parent_dir(&file).unwrap();
        assert!(dir.path().exists());
    }

    #[test]
    fn read_if_exists_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_if_exists(&dir.path().join("absent")).unwrap().is_none());
    }

    #[test]
    fn read_if_exists_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"abc").unwrap();
        assert_eq!(read_if_exists(&file).unwrap().as_deref(), Some(&b"abc"[..]));
    }

    #[test]
    fn read_if_exists_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_if_exists(dir.path()).is_err());
    }

    #[test]
    fn display_path_shortens_home() {
        let home = Path::new("/Users/dev");
        assert_eq!(display_path(Path::new("/Users/dev/.zshrc"), home), "~/.zshrc");
        assert_eq!(display_path(Path::new("/etc/zshrc"), home), "/etc/zshrc");
    }
}
