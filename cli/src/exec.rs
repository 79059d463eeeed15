//! Subprocess execution behind an injectable [`Executor`] trait.
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Output};

/// Captured outcome of one process.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Standard output (lossy UTF-8).
    pub stdout: String,
    /// Standard error (lossy UTF-8).
    pub stderr: String,
    /// Exit status was zero.
    pub success: bool,
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl ExecResult {
    /// Turn a non-zero exit into an error carrying stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the process did not succeed.
    pub fn check(self, label: &str) -> Result<Self> {
        if !self.success {
            let code = self
                .code
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            bail!("{label} failed (exit {code}): {}", self.stderr.trim());
        }
        Ok(self)
    }
}

/// Everything the applier runs goes through an `Executor`: package-manager
/// queries, installs, the Homebrew installer and Terragrunt.
///
/// Tests substitute a mock and assert on the exact command lines.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run a command and return its result even when it exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error only if the program cannot be spawned.
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run a command in `dir` with extra environment variables, failing on a
    /// non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or exits non-zero.
    fn run_in_with_env(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<ExecResult>;

    /// Return `true` if `program` resolves on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

fn spawn(mut cmd: Command, label: &str) -> Result<ExecResult> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to execute: {label}"))?;
    Ok(output.into())
}

impl Executor for SystemExecutor {
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        spawn(cmd, program)
    }

    fn run_in_with_env(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<ExecResult> {
        let label = format!("{program} in {}", dir.display());
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir).envs(env.iter().copied());
        spawn(cmd, &label)?.check(&label)
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_reports_failure_without_error() {
        let result = SystemExecutor.run_unchecked("false", &[]).unwrap();
        assert!(!result.success);
        assert_eq!(result.code, Some(1));
    }

    #[test]
    fn unchecked_captures_stdout() {
        let result = SystemExecutor.run_unchecked("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn spawn_failure_is_an_error() {
        assert!(
            SystemExecutor
                .run_unchecked("this-program-does-not-exist-12345", &[])
                .is_err()
        );
    }

    #[test]
    fn which_resolves_sh_only() {
        assert!(SystemExecutor.which("sh"));
        assert!(!SystemExecutor.which("this-program-does-not-exist-12345"));
    }

    #[test]
    fn env_and_dir_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let result = SystemExecutor
            .run_in_with_env(
                dir.path(),
                "sh",
                &["-c", "printf '%s %s' \"$TF_LOG\" \"$(basename \"$PWD\")\""],
                &[("TF_LOG", "DEBUG")],
            )
            .unwrap();
        let name = dir.path().file_name().unwrap().to_string_lossy();
        assert_eq!(result.stdout, format!("DEBUG {name}"));
    }

    #[test]
    fn non_zero_exit_with_env_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemExecutor
            .run_in_with_env(dir.path(), "sh", &["-c", "echo boom >&2; exit 3"], &[])
            .unwrap_err();
        assert!(err.to_string().contains("exit 3"));
        assert!(err.to_string().contains("boom"));
    }
}
