//! Task that configures the shell-profile blocks.
use anyhow::Result;

use super::aws_config::PrepareAwsConfig;
use super::homebrew::InstallHomebrew;
use super::tools::{InstallBrewTools, InstallNpmTools, InstallPipxTools, InstallScriptTools};
use super::{Context, ProcessOpts, Task, TaskResult, process_resources, task_deps};
use crate::resources::helpers::fs::display_path;
use crate::resources::profile_line::ProfileLineResource;

/// Append configured blocks to the shell profile, each at most once.
///
/// Blocks are appended in declared order. Existing blocks, including ones
/// the user edited, are never rewritten.
#[derive(Debug)]
pub struct ConfigureShellProfile;

impl Task for ConfigureShellProfile {
    fn name(&self) -> &'static str {
        "Configure shell profile"
    }

    task_deps![
        InstallHomebrew,
        InstallBrewTools,
        InstallNpmTools,
        InstallPipxTools,
        InstallScriptTools,
        PrepareAwsConfig,
    ];

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.shell_profile.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        ctx.log.debug(&format!(
            "profile: {}",
            display_path(&ctx.shell_profile, &ctx.home)
        ));
        let blocks = ctx.config.shell_profile.iter().map(|line| {
            ProfileLineResource::new(
                &ctx.shell_profile,
                line.marker.clone(),
                line.render(&ctx.platform),
            )
        });
        // Each block reads the file on its own; appends stay sequential.
        process_resources(ctx, blocks, &ProcessOpts::install_missing("append"))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::shell_profile::ProfileLine;
    use crate::tasks::test_helpers::{empty_config, make_linux_context};
    use std::path::PathBuf;

    fn line(marker: &str, content: &str) -> ProfileLine {
        ProfileLine {
            marker: marker.to_string(),
            content: content.to_string(),
        }
    }

    fn context(home: &std::path::Path, lines: Vec<ProfileLine>) -> Context {
        let mut config = empty_config(PathBuf::from("/ws"));
        config.shell_profile = lines;
        let mut ctx = make_linux_context(config);
        ctx.home = home.to_path_buf();
        ctx.shell_profile(PathBuf::from(".zshrc"))
    }

    #[test]
    fn appends_blocks_in_declared_order() {
        let home = tempfile::tempdir().unwrap();
        let ctx = context(
            home.path(),
            vec![
                line("workstation:brew", "eval \"$({homebrew_prefix}/bin/brew shellenv)\""),
                line("workstation:pipx", "export PATH=\"$HOME/.local/bin:$PATH\""),
            ],
        );
        ConfigureShellProfile.run(&ctx).unwrap();
        let text = std::fs::read_to_string(home.path().join(".zshrc")).unwrap();
        assert_eq!(
            text,
            "\n# workstation:brew\neval \"$(/home/linuxbrew/.linuxbrew/bin/brew shellenv)\"\n\
             \n# workstation:pipx\nexport PATH=\"$HOME/.local/bin:$PATH\"\n"
        );
    }

    #[test]
    fn rerun_leaves_profile_byte_identical() {
        let home = tempfile::tempdir().unwrap();
        let ctx = context(home.path(), vec![line("workstation:aws", "export AWS_PAGER=\"\"")]);
        ConfigureShellProfile.run(&ctx).unwrap();
        let first = std::fs::read(home.path().join(".zshrc")).unwrap();
        ConfigureShellProfile.run(&ctx).unwrap();
        assert_eq!(std::fs::read(home.path().join(".zshrc")).unwrap(), first);
    }

    #[test]
    fn unreadable_profile_counts_every_block() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join(".zshrc")).unwrap();
        let ctx = context(
            home.path(),
            vec![
                line("workstation:aws", "export AWS_PAGER=\"\""),
                line("workstation:pipx", "export PATH=\"$HOME/.local/bin:$PATH\""),
            ],
        );
        let err = ConfigureShellProfile.run(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "2 of 2 item(s) failed");
    }

    #[test]
    fn not_applicable_without_blocks() {
        let home = tempfile::tempdir().unwrap();
        assert!(!ConfigureShellProfile.should_run(&context(home.path(), vec![])));
    }

    #[test]
    fn depends_on_every_install_task() {
        let deps = ConfigureShellProfile.dependencies();
        for task in crate::tasks::all_install_tasks() {
            if task.name() != ConfigureShellProfile.name() {
                assert!(deps.contains(&task.task_id()), "missing {}", task.name());
            }
        }
    }
}
