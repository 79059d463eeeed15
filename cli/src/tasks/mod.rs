//! Named, dependency-ordered tasks that drive resource changes.
pub mod aws_config;
mod context;
pub mod graph;
pub mod homebrew;
mod processing;
pub mod shell_profile;
pub mod tools;

/// Implement [`Task::dependencies`] from a list of task types.
///
/// # Examples
///
/// ```ignore
/// task_deps![super::homebrew::InstallHomebrew]
/// // expands to:
/// //   fn dependencies(&self) -> &[std::any::TypeId] {
/// //       const DEPS: &[std::any::TypeId] =
/// //           &[std::any::TypeId::of::<super::homebrew::InstallHomebrew>()];
/// //       DEPS
/// //   }
/// ```
macro_rules! task_deps {
    [$($dep:ty),+ $(,)?] => {
        fn dependencies(&self) -> &[std::any::TypeId] {
            const DEPS: &[std::any::TypeId] = &[$(std::any::TypeId::of::<$dep>()),+];
            DEPS
        }
    };
}

pub(crate) use task_deps;

pub use context::{Context, DEFAULT_SHELL_PROFILE, FailurePolicy, home_dir};
pub use processing::{
    ProcessOpts, TaskResult, TaskStats, process_resource_states, process_resources,
};

use std::any::TypeId;

use anyhow::Result;

use crate::logging::TaskStatus;

/// A named, executable task.
///
/// The `'static` bound gives each task a stable [`TypeId`], which is how
/// dependencies are declared.
pub trait Task: Send + Sync + 'static {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Identifier used by [`Task::dependencies`] of other tasks.
    fn task_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Tasks that must run before this one.
    fn dependencies(&self) -> &[TypeId] {
        &[]
    }

    /// Whether this task applies to the current platform and config.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails outright or any of its items failed.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every task run by `install`, in declared order.
///
/// Execution order is derived from [`Task::dependencies`] by
/// [`graph::execution_order`]; the declared order breaks ties.
#[must_use]
pub fn all_install_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(homebrew::InstallHomebrew),
        Box::new(tools::InstallBrewTools),
        Box::new(tools::InstallNpmTools),
        Box::new(tools::InstallPipxTools),
        Box::new(tools::InstallScriptTools),
        Box::new(aws_config::PrepareAwsConfig),
        Box::new(shell_profile::ConfigureShellProfile),
    ]
}

/// Run one task and record its outcome. Returns the recorded status.
pub fn execute(task: &dyn Task, ctx: &Context) -> TaskStatus {
    if !task.should_run(ctx) {
        ctx.log.debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log.record_task(task.name(), TaskStatus::NotApplicable, None);
        return TaskStatus::NotApplicable;
    }

    ctx.log.stage(task.name());

    let (status, message) = match task.run(ctx) {
        Ok(TaskResult::Ok) => (TaskStatus::Ok, None),
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            (TaskStatus::Skipped, Some(reason))
        }
        Ok(TaskResult::DryRun) => (TaskStatus::DryRun, None),
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            (TaskStatus::Failed, Some(format!("{e:#}")))
        }
    };
    ctx.log.record_task(task.name(), status, message.as_deref());
    status
}

/// Shared helpers for task unit tests.
#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::config::homebrew::HomebrewConfig;
    use crate::config::infra::InfraConfig;
    use crate::config::profiles::Profile;
    use crate::exec::Executor;
    use crate::logging::{Log, Logger};
    use crate::platform::{Os, Platform};
    use crate::resources::test_helpers::MockExecutor;

    use super::Context;

    /// A [`Config`] with nothing configured.
    #[must_use]
    pub fn empty_config(root: PathBuf) -> Config {
        Config {
            root,
            profile: Profile {
                name: "test".to_string(),
                active_categories: vec!["base".to_string()],
                excluded_categories: vec![],
            },
            tools: vec![],
            shell_profile: vec![],
            infra: InfraConfig::default(),
            homebrew: HomebrewConfig::default(),
        }
    }

    /// Context with home `/home/test` and the given pieces.
    pub fn make_context(
        config: Config,
        platform: Platform,
        executor: Arc<dyn Executor>,
    ) -> Context {
        Context::with_home(
            Arc::new(config),
            Arc::new(platform),
            Arc::new(Logger::new("test")),
            executor,
            PathBuf::from("/home/test"),
        )
    }

    /// Linux context whose executor finds nothing on `PATH` and fails every command.
    #[must_use]
    pub fn make_linux_context(config: Config) -> Context {
        make_context(
            config,
            Platform::new(Os::Linux, false),
            Arc::new(MockExecutor::with_responses(vec![])),
        )
    }

    /// macOS (arm) context with the given executor.
    pub fn make_macos_context(config: Config, executor: Arc<dyn Executor>) -> Context {
        make_context(config, Platform::new(Os::MacOs, true), executor)
    }

    /// Linux context plus its logger, for inspecting recorded tasks.
    #[must_use]
    pub fn make_static_context(config: Config) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let mut ctx = make_linux_context(config);
        ctx.log = Arc::clone(&log) as Arc<dyn Log>;
        (ctx, log)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use test_helpers::{empty_config, make_static_context};

    struct MockTask {
        name: &'static str,
        should_run: bool,
        result: Result<TaskResult, String>,
    }

    impl Task for MockTask {
        fn name(&self) -> &str {
            self.name
        }
        fn should_run(&self, _ctx: &Context) -> bool {
            self.should_run
        }
        fn run(&self, _ctx: &Context) -> Result<TaskResult> {
            self.result.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    fn run_mock(
        should_run: bool,
        result: Result<TaskResult, String>,
    ) -> (TaskStatus, Option<String>) {
        let (ctx, log) = make_static_context(empty_config(PathBuf::from("/ws")));
        let task = MockTask {
            name: "mock",
            should_run,
            result,
        };
        let status = execute(&task, &ctx);
        let entries = log.task_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, status);
        (status, entries[0].message.clone())
    }

    #[test]
    fn execute_records_not_applicable() {
        assert_eq!(
            run_mock(false, Ok(TaskResult::Ok)).0,
            TaskStatus::NotApplicable
        );
    }

    #[test]
    fn execute_records_ok() {
        assert_eq!(run_mock(true, Ok(TaskResult::Ok)), (TaskStatus::Ok, None));
    }

    #[test]
    fn execute_records_skip_reason() {
        assert_eq!(
            run_mock(true, Ok(TaskResult::Skipped("brew not on PATH".into()))),
            (TaskStatus::Skipped, Some("brew not on PATH".to_string()))
        );
    }

    #[test]
    fn execute_records_dry_run() {
        assert_eq!(run_mock(true, Ok(TaskResult::DryRun)).0, TaskStatus::DryRun);
    }

    #[test]
    fn execute_records_failure_message() {
        assert_eq!(
            run_mock(true, Err("2 of 5 item(s) failed".into())),
            (TaskStatus::Failed, Some("2 of 5 item(s) failed".to_string()))
        );
    }

    #[test]
    fn install_task_names_are_unique() {
        let tasks = all_install_tasks();
        let mut names: Vec<&str> = tasks.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tasks.len());
    }
}
