//! The `install` subcommand.
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::{GlobalOpts, InstallOpts};
use crate::error::ConfigError;
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::tasks::{self, Task};

/// Environment variable naming the workstation root.
pub const ROOT_ENV: &str = "WORKSTATION_ROOT";

/// Run the install command.
///
/// # Errors
///
/// Returns an error if profile resolution, configuration loading, or task execution fails.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("workstation {}", super::version::string()));

    let setup = super::CommandSetup::init(global, log)?;
    let ctx = setup.into_context(
        global,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor),
    )?;
    if ctx.dry_run {
        log.info("dry run: nothing will be changed");
    }

    let all_tasks = tasks::all_install_tasks();
    let selected = select_tasks(&all_tasks, opts);
    super::run_tasks_to_completion(&selected, &ctx, log)
}

/// Filter by `--only`, then `--skip` (case-insensitive substring of the task name).
#[must_use]
pub fn select_tasks<'a>(all: &'a [Box<dyn Task>], opts: &InstallOpts) -> Vec<&'a dyn Task> {
    let matches_any =
        |name: &str, patterns: &[String]| patterns.iter().any(|p| name.contains(&p.to_lowercase()));
    all.iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !opts.only.is_empty() {
                return matches_any(&name, &opts.only);
            }
            !matches_any(&name, &opts.skip)
        })
        .map(AsRef::as_ref)
        .collect()
}

/// Resolve the workstation root directory from CLI arguments or auto-detection.
///
/// # Errors
///
/// Returns an error if the root directory cannot be determined or doesn't exist.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    let root = locate_root(
        global.root.as_deref(),
        std::env::var_os(ROOT_ENV).map(PathBuf::from),
        std::env::current_exe().ok(),
        std::env::current_dir()?,
    )?;
    dunce::canonicalize(&root)
        .map_err(|e| anyhow::anyhow!("cannot resolve root {}: {e}", root.display()))
}

fn is_root(dir: &Path) -> bool {
    dir.join("conf").is_dir()
}

/// Root lookup order: explicit flag, `WORKSTATION_ROOT`, next to the binary,
/// then the current directory.
fn locate_root(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    exe: Option<PathBuf>,
    cwd: PathBuf,
) -> Result<PathBuf, ConfigError> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    if let Some(root) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(root);
    }

    if let Some(parent) = exe.as_deref().and_then(Path::parent) {
        let candidates = [
            parent.join("../../.."), // cli/target/release/ → repo root
            parent.join(".."),       // bin/ → repo root
        ];
        if let Some(found) = candidates.into_iter().find(|c| is_root(c)) {
            return Ok(found);
        }
    }

    if is_root(&cwd) {
        return Ok(cwd);
    }
    Err(ConfigError::RootNotFound)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("conf")).unwrap();
        dir
    }

    #[test]
    fn explicit_root_wins() {
        let root = locate_root(
            Some(Path::new("/explicit/path")),
            Some(PathBuf::from("/from/env")),
            None,
            PathBuf::from("/"),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/explicit/path"));
    }

    #[test]
    fn env_root_before_detection() {
        let cwd = repo();
        let root = locate_root(
            None,
            Some(PathBuf::from("/from/env")),
            None,
            cwd.path().to_path_buf(),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/from/env"));
    }

    #[test]
    fn detects_root_from_release_binary() {
        let repo = repo();
        let release = repo.path().join("cli/target/release");
        std::fs::create_dir_all(&release).unwrap();
        let exe = release.join("workstation");
        let root = locate_root(None, None, Some(exe), PathBuf::from("/")).unwrap();
        assert!(is_root(&root));
        assert_eq!(
            dunce::canonicalize(root).unwrap(),
            dunce::canonicalize(repo.path()).unwrap()
        );
    }

    #[test]
    fn detects_root_from_installed_binary() {
        let repo = repo();
        let bin = repo.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        let exe = bin.join("workstation");
        let root = locate_root(None, None, Some(exe), PathBuf::from("/")).unwrap();
        assert_eq!(
            dunce::canonicalize(root).unwrap(),
            dunce::canonicalize(repo.path()).unwrap()
        );
    }

    #[test]
    fn falls_back_to_cwd() {
        let cwd = repo();
        let root = locate_root(None, None, None, cwd.path().to_path_buf()).unwrap();
        assert_eq!(root, cwd.path());
    }

    #[test]
    fn error_when_nothing_matches() {
        let empty = tempfile::tempdir().unwrap();
        let err = locate_root(None, None, None, empty.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, ConfigError::RootNotFound));
    }

    #[test]
    fn only_then_skip_filtering() {
        let all = tasks::all_install_tasks();
        let names = |opts: &InstallOpts| -> Vec<String> {
            select_tasks(&all, opts)
                .iter()
                .map(|t| t.name().to_string())
                .collect()
        };

        let only = InstallOpts {
            skip: vec![],
            only: vec!["AWS".to_string()],
        };
        assert_eq!(names(&only), vec!["Prepare AWS config"]);

        let skip = InstallOpts {
            skip: vec!["tools".to_string()],
            only: vec![],
        };
        assert_eq!(
            names(&skip),
            vec!["Install Homebrew", "Prepare AWS config", "Configure shell profile"]
        );
    }
}
