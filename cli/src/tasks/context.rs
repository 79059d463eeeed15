use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Log;
use crate::platform::Platform;

/// Profile file mutated when `--shell-profile` is not given.
pub const DEFAULT_SHELL_PROFILE: &str = ".zshrc";

/// What a failing item does to the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, keep going, fail the run at the end.
    #[default]
    ContinueOnError,
    /// Stop at the first failed item and skip all remaining tasks.
    FailFast,
}

/// `$HOME` as a path.
///
/// # Errors
///
/// Returns an error if `HOME` is unset or empty.
pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("HOME environment variable is not set"))
}

/// Shared context for task execution.
pub struct Context {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Detected platform.
    pub platform: Arc<Platform>,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Report changes without making them.
    pub dry_run: bool,
    /// User's home directory.
    pub home: PathBuf,
    /// Command executor.
    pub executor: Arc<dyn Executor>,
    /// Probe resources in parallel.
    pub parallel: bool,
    /// Failure handling.
    pub policy: FailurePolicy,
    /// Shell startup file blocks are appended to.
    pub shell_profile: PathBuf,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &"<Config>")
            .field("platform", &self.platform)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("home", &self.home)
            .field("executor", &"<dyn Executor>")
            .field("parallel", &self.parallel)
            .field("policy", &self.policy)
            .field("shell_profile", &self.shell_profile)
            .finish()
    }
}

impl Context {
    /// Create a context rooted at `$HOME` with default options: not a dry
    /// run, parallel probes, continue on error, `~/.zshrc`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOME` is not set.
    pub fn new(
        config: Arc<Config>,
        platform: Arc<Platform>,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
    ) -> Result<Self> {
        Ok(Self::with_home(config, platform, log, executor, home_dir()?))
    }

    /// Like [`Context::new`] with an explicit home directory.
    #[must_use]
    pub fn with_home(
        config: Arc<Config>,
        platform: Arc<Platform>,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        home: PathBuf,
    ) -> Self {
        let shell_profile = home.join(DEFAULT_SHELL_PROFILE);
        Self {
            config,
            platform,
            log,
            dry_run: false,
            home,
            executor,
            parallel: true,
            policy: FailurePolicy::default(),
            shell_profile,
        }
    }

    /// Set dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable parallel probes.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub const fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the shell profile path. Relative paths resolve against home.
    #[must_use]
    pub fn shell_profile(mut self, path: PathBuf) -> Self {
        self.shell_profile = if path.is_absolute() {
            path
        } else {
            self.home.join(path)
        };
        self
    }

    /// Whether the first failure stops the run.
    #[must_use]
    pub fn fail_fast(&self) -> bool {
        self.policy == FailurePolicy::FailFast
    }

    /// `~/.aws`.
    #[must_use]
    pub fn aws_dir(&self) -> PathBuf {
        self.home.join(".aws")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{empty_config, make_linux_context};

    #[test]
    fn defaults() {
        let ctx = make_linux_context(empty_config(PathBuf::from("/ws")));
        assert!(!ctx.dry_run);
        assert!(!ctx.fail_fast());
        assert_eq!(ctx.shell_profile, PathBuf::from("/home/test/.zshrc"));
        assert_eq!(ctx.aws_dir(), PathBuf::from("/home/test/.aws"));
    }

    #[test]
    fn relative_shell_profile_resolves_against_home() {
        let ctx = make_linux_context(empty_config(PathBuf::from("/ws")))
            .shell_profile(PathBuf::from(".bashrc"));
        assert_eq!(ctx.shell_profile, PathBuf::from("/home/test/.bashrc"));
    }

    #[test]
    fn absolute_shell_profile_is_kept() {
        let ctx = make_linux_context(empty_config(PathBuf::from("/ws")))
            .shell_profile(PathBuf::from("/etc/zshrc.local"));
        assert_eq!(ctx.shell_profile, PathBuf::from("/etc/zshrc.local"));
    }

    #[test]
    fn builders_set_flags() {
        let ctx = make_linux_context(empty_config(PathBuf::from("/ws")))
            .dry_run(true)
            .parallel(false)
            .policy(FailurePolicy::FailFast);
        assert!(ctx.dry_run);
        assert!(!ctx.parallel);
        assert!(ctx.fail_fast());
    }

    #[test]
    fn debug_format_includes_key_fields() {
        let ctx = make_linux_context(empty_config(PathBuf::from("/ws")));
        let debug = format!("{ctx:?}");
        assert!(debug.contains("dry_run"));
        assert!(debug.contains("shell_profile"));
    }
}
