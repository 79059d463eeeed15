//! Command: probe tools and files without changing anything.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::config::tools::InstallMethod;
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::resources::file::EmptyFileResource;
use crate::resources::helpers::fs::display_path;
use crate::resources::profile_line::ProfileLineResource;
use crate::resources::{Resource, ResourceState};
use crate::tasks::tools::probe_tools;
use crate::tasks::{Context, Task, TaskResult};

/// Run the check command.
///
/// # Errors
///
/// Returns an error if setup fails or a probe cannot run.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let ctx = setup.into_context(
        global,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor),
    )?;

    let tasks: [&dyn Task; 3] = [&CheckTools, &CheckAwsConfig, &CheckShellProfile];
    super::run_tasks_to_completion(&tasks, &ctx, log)
}

fn describe(state: &ResourceState) -> &'static str {
    match state {
        ResourceState::Correct => "present",
        ResourceState::Missing => "absent",
        ResourceState::Incorrect { .. } => "differs",
        ResourceState::Invalid { .. } => "invalid",
    }
}

/// Log one line per item and return how many are not present.
fn report<'a>(
    ctx: &Context,
    items: impl IntoIterator<Item = (String, &'a ResourceState)>,
) -> usize {
    let mut absent = 0;
    for (name, state) in items {
        if *state != ResourceState::Correct {
            absent += 1;
        }
        ctx.log.info(&format!("{}: {name}", describe(state)));
    }
    absent
}

fn summarize(absent: usize, total: usize, what: &str) -> TaskResult {
    if absent == 0 {
        TaskResult::Ok
    } else {
        TaskResult::Skipped(format!("{absent} of {total} {what} absent"))
    }
}

/// Report which configured tools are installed.
#[derive(Debug)]
struct CheckTools;

impl Task for CheckTools {
    fn name(&self) -> &'static str {
        "Check tools"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.tools.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let supports_casks = ctx.platform.supports_casks();
        let tools = ctx
            .config
            .tools
            .iter()
            .filter(|t| supports_casks || t.method != InstallMethod::Cask)
            .cloned()
            .collect();
        let probed = probe_tools(ctx, tools)?;
        let absent = report(
            ctx,
            probed
                .iter()
                .map(|(r, s)| (format!("{} ({})", r.tool.name, r.tool.method.label()), s)),
        );
        Ok(summarize(absent, probed.len(), "tools"))
    }
}

/// Report whether the AWS config files exist.
#[derive(Debug)]
struct CheckAwsConfig;

impl Task for CheckAwsConfig {
    fn name(&self) -> &'static str {
        "Check AWS config"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dir = ctx.aws_dir();
        let mut probed = Vec::new();
        for name in ["config", "credentials"] {
            let path = dir.join(name);
            let state = EmptyFileResource::new(&path).current_state()?;
            probed.push((display_path(&path, &ctx.home), state));
        }
        let absent = report(ctx, probed.iter().map(|(p, s)| (p.clone(), s)));
        Ok(summarize(absent, probed.len(), "files"))
    }
}

/// Report which shell-profile blocks are present.
#[derive(Debug)]
struct CheckShellProfile;

impl Task for CheckShellProfile {
    fn name(&self) -> &'static str {
        "Check shell profile"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.shell_profile.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let probed = ctx
            .config
            .shell_profile
            .iter()
            .map(|line| {
                ProfileLineResource::new(
                    &ctx.shell_profile,
                    line.marker.clone(),
                    line.content.clone(),
                )
                .current_state()
                .map(|state| (line.marker.clone(), state))
            })
            .collect::<Result<Vec<_>>>()?;
        let absent = report(ctx, probed.iter().map(|(m, s)| (m.clone(), s)));
        Ok(summarize(absent, probed.len(), "blocks"))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::shell_profile::ProfileLine;
    use crate::config::tools::Tool;
    use crate::resources::test_helpers::MockExecutor;
    use crate::tasks::test_helpers::{empty_config, make_linux_context, make_macos_context};
    use std::path::PathBuf;

    #[test]
    fn tools_report_absent_count_without_installing() {
        let mut config = empty_config(PathBuf::from("/ws"));
        config.tools = vec![
            Tool {
                name: "jq".to_string(),
                method: InstallMethod::Brew,
                package: None,
                command: None,
                version: None,
            },
            Tool {
                name: "git".to_string(),
                method: InstallMethod::Brew,
                package: None,
                command: None,
                version: None,
            },
        ];
        let executor = Arc::new(
            MockExecutor::with_responses(vec![(true, "git\n".to_string())]).with_which(true),
        );
        let ctx = make_macos_context(config, Arc::clone(&executor) as _);

        let result = CheckTools.run(&ctx).unwrap();
        assert_eq!(result, TaskResult::Skipped("1 of 2 tools absent".to_string()));
        assert_eq!(executor.call_count(), 1);
    }

    #[test]
    fn shell_profile_reports_present_blocks() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(".zshrc"), "# workstation:aws\nexport AWS_PAGER=\"\"\n")
            .unwrap();
        let mut config = empty_config(PathBuf::from("/ws"));
        config.shell_profile = vec![ProfileLine {
            marker: "workstation:aws".to_string(),
            content: "export AWS_PAGER=\"\"".to_string(),
        }];
        let mut ctx = make_linux_context(config);
        ctx.home = home.path().to_path_buf();
        let ctx = ctx.shell_profile(PathBuf::from(".zshrc"));

        assert_eq!(CheckShellProfile.run(&ctx).unwrap(), TaskResult::Ok);
    }

    #[test]
    fn missing_profile_counts_every_block_absent() {
        let home = tempfile::tempdir().unwrap();
        let mut config = empty_config(PathBuf::from("/ws"));
        config.shell_profile = vec![ProfileLine {
            marker: "workstation:brew".to_string(),
            content: "eval".to_string(),
        }];
        let mut ctx = make_linux_context(config);
        ctx.home = home.path().to_path_buf();
        let ctx = ctx.shell_profile(PathBuf::from(".zshrc"));

        assert_eq!(
            CheckShellProfile.run(&ctx).unwrap(),
            TaskResult::Skipped("1 of 1 blocks absent".to_string())
        );
        assert!(!home.path().join(".zshrc").exists());
    }

    #[test]
    fn aws_check_does_not_create_files() {
        let home = tempfile::tempdir().unwrap();
        let mut ctx = make_linux_context(empty_config(PathBuf::from("/ws")));
        ctx.home = home.path().to_path_buf();
        assert_eq!(
            CheckAwsConfig.run(&ctx).unwrap(),
            TaskResult::Skipped("2 of 2 files absent".to_string())
        );
        assert!(!home.path().join(".aws").exists());
    }
}
