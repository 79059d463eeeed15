//! Homebrew bootstrap.
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};
use sha2::{Digest as _, Sha256};

use super::{Context, Task, TaskResult};
use crate::config::tools::InstallMethod;
use crate::resources::error::ResourceError;

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(64);
    for b in &digest {
        write!(hex, "{b:02x}").unwrap_or(());
    }
    hex
}

/// Check downloaded bytes against a pinned digest (case-insensitive).
///
/// # Errors
///
/// Returns [`ResourceError::ChecksumMismatch`] if the digests differ.
pub fn verify_sha256(what: &str, bytes: &[u8], expected: &str) -> Result<(), ResourceError> {
    let actual = sha256_hex(bytes);
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(ResourceError::ChecksumMismatch {
            resource: what.to_string(),
            expected: expected.trim().to_lowercase(),
            actual,
        })
    }
}

fn download(url: &str) -> Result<Vec<u8>> {
    let mut response = ureq::get(url)
        .call()
        .with_context(|| format!("downloading {url}"))?;
    response
        .body_mut()
        .read_to_vec()
        .with_context(|| format!("reading {url}"))
}

fn run_installer(ctx: &Context, script: &[u8]) -> Result<()> {
    let dir = std::env::temp_dir().join(format!("workstation-homebrew-{}", std::process::id()));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("install.sh");
    std::fs::write(&path, script).with_context(|| format!("writing {}", path.display()))?;
    let result = ctx.executor.run_in_with_env(
        &dir,
        "/bin/bash",
        &[&path.to_string_lossy()],
        &[("NONINTERACTIVE", "1")],
    );
    std::fs::remove_dir_all(&dir).ok();
    result.context("running the Homebrew installer")?;
    Ok(())
}

fn brew_on_prefix(prefix: &Path) -> bool {
    prefix.join("bin").join("brew").is_file()
}

/// Install Homebrew when `brew` is not on `PATH`.
#[derive(Debug)]
pub struct InstallHomebrew;

impl Task for InstallHomebrew {
    fn name(&self) -> &'static str {
        "Install Homebrew"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config
            .tools
            .iter()
            .any(|t| matches!(t.method, InstallMethod::Brew | InstallMethod::Cask))
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if ctx.executor.which("brew") {
            ctx.log.info("Homebrew already installed");
            return Ok(TaskResult::Ok);
        }

        let prefix = ctx.platform.homebrew_prefix();
        if brew_on_prefix(&prefix) {
            return Ok(TaskResult::Skipped(format!(
                "Homebrew is installed in {} but not on PATH",
                prefix.display()
            )));
        }

        let homebrew = &ctx.config.homebrew;
        if ctx.dry_run {
            ctx.log.dry_run(&format!("would install Homebrew from {}", homebrew.installer_url));
            return Ok(TaskResult::DryRun);
        }

        ctx.log.debug(&format!("downloading {}", homebrew.installer_url));
        let script = download(&homebrew.installer_url)?;
        match &homebrew.installer_sha256 {
            Some(expected) => verify_sha256("Homebrew installer", &script, expected)?,
            None => ctx.log.warn("Homebrew installer checksum not pinned; running unverified"),
        }

        run_installer(ctx, &script)?;
        ctx.log.info(&format!("Homebrew installed in {}", prefix.display()));
        Ok(TaskResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::tools::Tool;
    use crate::resources::test_helpers::MockExecutor;
    use crate::tasks::test_helpers::{empty_config, make_macos_context};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn brew_tool() -> Tool {
        Tool {
            name: "jq".to_string(),
            method: InstallMethod::Brew,
            package: None,
            command: None,
            version: None,
        }
    }

    #[test]
    fn sha256_known_value() {
        // printf 'hello world' | shasum -a 256
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn verify_accepts_uppercase_pin() {
        let pin = sha256_hex(b"#!/bin/bash\n").to_uppercase();
        verify_sha256("installer", b"#!/bin/bash\n", &pin).unwrap();
    }

    #[test]
    fn verify_rejects_mismatch() {
        let err = verify_sha256("installer", b"tampered", &sha256_hex(b"original")).unwrap_err();
        assert!(matches!(err, ResourceError::ChecksumMismatch { .. }));
    }

    #[test]
    fn not_needed_without_brew_tools() {
        let ctx = make_macos_context(
            empty_config(PathBuf::from("/ws")),
            Arc::new(MockExecutor::with_responses(vec![])),
        );
        assert!(!InstallHomebrew.should_run(&ctx));
    }

    #[test]
    fn present_brew_is_left_alone() {
        let mut config = empty_config(PathBuf::from("/ws"));
        config.tools.push(brew_tool());
        let executor = Arc::new(MockExecutor::with_responses(vec![]).with_which(true));
        let ctx = make_macos_context(config, Arc::clone(&executor) as _);
        assert!(InstallHomebrew.should_run(&ctx));
        assert_eq!(InstallHomebrew.run(&ctx).unwrap(), TaskResult::Ok);
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn dry_run_does_not_download() {
        let mut config = empty_config(PathBuf::from("/ws"));
        config.tools.push(brew_tool());
        config.homebrew.installer_url = "http://127.0.0.1:9/never".to_string();
        let executor = Arc::new(MockExecutor::with_responses(vec![]));
        let ctx = make_macos_context(config, Arc::clone(&executor) as _).dry_run(true);
        if brew_on_prefix(&ctx.platform.homebrew_prefix()) {
            return;
        }
        assert_eq!(InstallHomebrew.run(&ctx).unwrap(), TaskResult::DryRun);
        assert_eq!(executor.call_count(), 0);
    }
}
