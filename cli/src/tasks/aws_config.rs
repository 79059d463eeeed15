//! Task that prepares the AWS config files.
use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::file::EmptyFileResource;

/// Owner-only permissions for AWS credential files.
const AWS_FILE_MODE: u32 = 0o600;

/// Make sure `~/.aws/config` and `~/.aws/credentials` exist.
///
/// Files are created empty and never modified afterwards; their content is
/// managed by `aws configure` / `aws sso login`.
#[derive(Debug)]
pub struct PrepareAwsConfig;

impl Task for PrepareAwsConfig {
    fn name(&self) -> &'static str {
        "Prepare AWS config"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dir = ctx.aws_dir();
        let files = ["config", "credentials"]
            .into_iter()
            .map(|name| EmptyFileResource::new(&dir.join(name)).with_mode(AWS_FILE_MODE));
        process_resources(ctx, files, &ProcessOpts::install_missing("create"))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{empty_config, make_linux_context};
    use std::path::PathBuf;

    fn context_in(home: &std::path::Path) -> Context {
        let mut ctx = make_linux_context(empty_config(PathBuf::from("/ws")));
        ctx.home = home.to_path_buf();
        ctx
    }

    #[test]
    fn creates_both_files_empty() {
        let home = tempfile::tempdir().unwrap();
        let ctx = context_in(home.path());
        assert_eq!(PrepareAwsConfig.run(&ctx).unwrap(), TaskResult::Ok);
        for name in ["config", "credentials"] {
            let path = home.path().join(".aws").join(name);
            assert_eq!(std::fs::read(&path).unwrap(), b"");
        }
    }

    #[test]
    fn existing_files_are_untouched() {
        let home = tempfile::tempdir().unwrap();
        let aws = home.path().join(".aws");
        std::fs::create_dir_all(&aws).unwrap();
        std::fs::write(aws.join("config"), "[profile dev]\nregion = us-east-1\n").unwrap();
        let ctx = context_in(home.path());
        PrepareAwsConfig.run(&ctx).unwrap();
        assert_eq!(
            std::fs::read_to_string(aws.join("config")).unwrap(),
            "[profile dev]\nregion = us-east-1\n"
        );
        assert!(aws.join("credentials").is_file());
    }

    #[test]
    fn dry_run_creates_nothing() {
        let home = tempfile::tempdir().unwrap();
        let ctx = context_in(home.path()).dry_run(true);
        assert_eq!(PrepareAwsConfig.run(&ctx).unwrap(), TaskResult::DryRun);
        assert!(!home.path().join(".aws").exists());
    }

    #[cfg(unix)]
    #[test]
    fn credentials_are_owner_only() {
        use std::os::unix::fs::PermissionsExt as _;
        let home = tempfile::tempdir().unwrap();
        PrepareAwsConfig.run(&context_in(home.path())).unwrap();
        let mode = std::fs::metadata(home.path().join(".aws/credentials"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
