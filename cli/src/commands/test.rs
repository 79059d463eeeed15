//! The `test` subcommand.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::config::validation::{
    ConfigValidator, InfraValidator, ProfileLineValidator, ToolValidator,
};
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::tasks::{Context, Task, TaskResult};

/// Files every workstation root is expected to carry.
const EXPECTED_CONFIG: &[&str] = &["profiles.toml", "tools.toml", "shell-profile.toml"];

/// Run the test/validation command.
///
/// # Errors
///
/// Returns an error if setup fails or any validation task fails.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let ctx = setup.into_context(
        global,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor),
    )?;

    let tasks: [&dyn Task; 4] = [
        &ValidateConfigFiles,
        &ValidateTools,
        &ValidateShellProfile,
        &ValidateInfra,
    ];
    super::run_tasks_to_completion(&tasks, &ctx, log)
}

/// Log each warning as an error and fail if there are any.
fn fail_on_warnings(
    ctx: &Context,
    validator: &dyn ConfigValidator,
    checked: usize,
) -> Result<TaskResult> {
    let warnings = validator.validate(&ctx.platform);
    for w in &warnings {
        ctx.log.error(&format!("{} [{}]: {}", w.source, w.item, w.message));
    }
    if !warnings.is_empty() {
        anyhow::bail!("{} problem(s) in {}", warnings.len(), validator.source());
    }
    ctx.log.info(&format!("{}: {checked} entries ok", validator.source()));
    Ok(TaskResult::Ok)
}

/// Check that the expected config files exist.
#[derive(Debug)]
struct ValidateConfigFiles;

impl Task for ValidateConfigFiles {
    fn name(&self) -> &'static str {
        "Validate config files"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let conf = ctx.config.root.join("conf");
        let mut missing = 0u32;
        for file in EXPECTED_CONFIG {
            if conf.join(file).is_file() {
                ctx.log.debug(&format!("found conf/{file}"));
            } else {
                ctx.log.error(&format!("missing config: conf/{file}"));
                missing += 1;
            }
        }
        if !conf.join("infra.toml").is_file() {
            ctx.log.warn("conf/infra.toml missing; infra commands have nothing to do");
        }
        if missing > 0 {
            anyhow::bail!("{missing} config file(s) missing");
        }
        Ok(TaskResult::Ok)
    }
}

/// Validate tool entries.
#[derive(Debug)]
struct ValidateTools;

impl Task for ValidateTools {
    fn name(&self) -> &'static str {
        "Validate tools"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.tools.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let tools = &ctx.config.tools;
        fail_on_warnings(ctx, &ToolValidator::new(tools), tools.len())
    }
}

/// Validate shell-profile blocks.
#[derive(Debug)]
struct ValidateShellProfile;

impl Task for ValidateShellProfile {
    fn name(&self) -> &'static str {
        "Validate shell profile"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.shell_profile.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let lines = &ctx.config.shell_profile;
        fail_on_warnings(ctx, &ProfileLineValidator::new(lines), lines.len())
    }
}

/// Validate module schemas and name uniqueness.
#[derive(Debug)]
pub(super) struct ValidateInfra;

impl Task for ValidateInfra {
    fn name(&self) -> &'static str {
        "Validate infrastructure"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.infra.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let infra = &ctx.config.infra;
        fail_on_warnings(ctx, &InfraValidator::new(infra), infra.modules.len())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::shell_profile::ProfileLine;
    use crate::tasks::test_helpers::{empty_config, make_linux_context};

    #[test]
    fn config_files_missing_fails() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("conf")).unwrap();
        std::fs::write(root.path().join("conf/profiles.toml"), "").unwrap();
        let ctx = make_linux_context(empty_config(root.path().to_path_buf()));
        let err = ValidateConfigFiles.run(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "2 config file(s) missing");
    }

    #[test]
    fn config_files_present_passes() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("conf")).unwrap();
        for file in EXPECTED_CONFIG {
            std::fs::write(root.path().join("conf").join(file), "").unwrap();
        }
        let ctx = make_linux_context(empty_config(root.path().to_path_buf()));
        assert_eq!(ValidateConfigFiles.run(&ctx).unwrap(), TaskResult::Ok);
    }

    #[test]
    fn duplicate_markers_fail_validation() {
        let mut config = empty_config(std::path::PathBuf::from("/ws"));
        let line = ProfileLine {
            marker: "workstation:brew".to_string(),
            content: "eval".to_string(),
        };
        config.shell_profile = vec![line.clone(), line];
        let ctx = make_linux_context(config);
        assert!(ValidateShellProfile.should_run(&ctx));
        let err = ValidateShellProfile.run(&ctx).unwrap_err();
        assert!(err.to_string().contains("shell-profile.toml"));
    }

    #[test]
    fn infra_not_applicable_without_modules() {
        let ctx = make_linux_context(empty_config(std::path::PathBuf::from("/ws")));
        assert!(!ValidateInfra.should_run(&ctx));
    }
}
