//! Top-level subcommand orchestration.
pub mod check;
pub mod completions;
pub mod infra;
pub mod install;
pub mod test;
pub mod version;

use std::any::TypeId;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::config::profiles;
use crate::error::TaskError;
use crate::exec::Executor;
use crate::logging::{Log, Logger, TaskStatus};
use crate::platform::Platform;
use crate::tasks::{self, Context, FailurePolicy, Task, graph};

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates platform detection, profile resolution, and configuration
/// loading so that each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Detected host platform.
    pub platform: Platform,
    /// Configuration filtered by the resolved profile.
    pub config: Config,
}

impl CommandSetup {
    /// Detect the platform, resolve the profile, and load all configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be determined, the profile
    /// cannot be resolved, or any configuration file fails to parse.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let platform = Platform::detect();
        let root = install::resolve_root(global)?;
        log.debug(&format!("root: {}", root.display()));

        log.stage("Resolving profile");
        let state_file = profiles::persisted_path(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            &tasks::home_dir()?,
        );
        let profile = profiles::resolve_from_args(
            global.profile.as_deref(),
            &root,
            &state_file,
            &platform,
            global.dry_run,
        )?;
        log.info(&format!("profile: {}", profile.name));
        log.debug(&format!(
            "active categories: {}",
            profile.active_categories.join(", ")
        ));

        log.stage("Loading configuration");
        let config = Config::load(&root, &profile, &platform)?;
        log.debug(&format!("{} shell-profile blocks", config.shell_profile.len()));
        log.debug(&format!(
            "{} infra modules, {} environments",
            config.infra.modules.len(),
            config.infra.environments.len()
        ));
        log.info(&format!("loaded {} tools", config.tools.len()));

        let warnings = config.validate(&platform);
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self { platform, config })
    }

    /// Build the task context from the loaded configuration and global flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOME` is not set.
    pub fn into_context(
        self,
        global: &GlobalOpts,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
    ) -> Result<Context> {
        let policy = if global.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::ContinueOnError
        };
        let ctx = Context::new(Arc::new(self.config), Arc::new(self.platform), log, executor)?
            .dry_run(global.dry_run)
            .parallel(global.parallel)
            .policy(policy);
        Ok(match &global.shell_profile {
            Some(path) => ctx.shell_profile(path.clone()),
            None => ctx,
        })
    }
}

/// Execute tasks in dependency order, print the summary, and bail if any
/// task failed.
///
/// A task whose dependency failed or was aborted is itself recorded as
/// aborted and never run. Under `--fail-fast` the first failed task stops
/// the run; every task not yet started is recorded as aborted.
///
/// # Errors
///
/// Returns [`TaskError::DependencyCycle`] if the tasks cannot be ordered,
/// [`TaskError::Aborted`] after a fail-fast stop, or [`TaskError::Failed`]
/// if one or more tasks recorded a failure.
pub fn run_tasks_to_completion(tasks: &[&dyn Task], ctx: &Context, log: &Logger) -> Result<()> {
    let order = graph::execution_order(tasks)?;

    let mut stopped_by: Option<&str> = None;
    let mut broken: HashMap<TypeId, &str> = HashMap::new();
    for task in order.into_iter().filter_map(|i| tasks.get(i)) {
        if let Some(failed) = stopped_by {
            log.record_task(
                task.name(),
                TaskStatus::Aborted,
                Some(&format!("not run: '{failed}' failed")),
            );
            continue;
        }
        if let Some(&dep) = task.dependencies().iter().find_map(|id| broken.get(id)) {
            log.warn(&format!("skipping '{}': dependency '{dep}' failed", task.name()));
            log.record_task(
                task.name(),
                TaskStatus::Aborted,
                Some(&format!("not run: dependency '{dep}' failed")),
            );
            broken.insert(task.task_id(), dep);
            continue;
        }
        let status = tasks::execute(*task, ctx);
        if status == TaskStatus::Failed {
            broken.insert(task.task_id(), task.name());
            if ctx.fail_fast() {
                log.error(&format!("stopping: '{}' failed (--fail-fast)", task.name()));
                stopped_by = Some(task.name());
            }
        }
    }

    log.print_summary();

    if let Some(task) = stopped_by {
        return Err(TaskError::Aborted {
            task: task.to_string(),
        }
        .into());
    }
    let count = log.failure_count();
    if count > 0 {
        return Err(TaskError::Failed(count).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::tasks::TaskResult;
    use crate::tasks::test_helpers::{empty_config, make_linux_context};

    struct First;
    struct Second;
    struct Third;
    struct Fourth;

    macro_rules! mock_task {
        ($ty:ident, $name:literal, $ok:expr, [$($dep:ty),*]) => {
            impl Task for $ty {
                fn name(&self) -> &str {
                    $name
                }
                fn dependencies(&self) -> &[TypeId] {
                    const DEPS: &[TypeId] = &[$(TypeId::of::<$dep>()),*];
                    DEPS
                }
                fn should_run(&self, _ctx: &Context) -> bool {
                    true
                }
                fn run(&self, _ctx: &Context) -> anyhow::Result<TaskResult> {
                    if $ok {
                        Ok(TaskResult::Ok)
                    } else {
                        anyhow::bail!("1 of 1 item(s) failed")
                    }
                }
            }
        };
    }

    mock_task!(First, "first", false, []);
    mock_task!(Second, "second", true, [First]);
    mock_task!(Third, "third", true, []);
    mock_task!(Fourth, "fourth", true, [Second]);

    fn run(policy: FailurePolicy) -> (anyhow::Error, Vec<(String, TaskStatus)>) {
        let (logger, _dir, _guard) = crate::logging::isolated_logger();
        let log = Arc::new(logger);
        let mut ctx = make_linux_context(empty_config(PathBuf::from("/ws"))).policy(policy);
        ctx.log = Arc::clone(&log) as Arc<dyn Log>;
        let tasks: [&dyn Task; 4] = [&Second, &First, &Third, &Fourth];
        let err = run_tasks_to_completion(&tasks, &ctx, &log).unwrap_err();
        let entries = log.task_entries()
            .into_iter()
            .map(|e| (e.name, e.status))
            .collect();
        (err, entries)
    }

    #[test]
    fn continue_on_error_runs_independent_tasks() {
        let (err, entries) = run(FailurePolicy::ContinueOnError);
        assert_eq!(err.to_string(), "1 task(s) failed");
        assert_eq!(
            entries,
            vec![
                ("first".to_string(), TaskStatus::Failed),
                ("second".to_string(), TaskStatus::Aborted),
                ("third".to_string(), TaskStatus::Ok),
                ("fourth".to_string(), TaskStatus::Aborted),
            ]
        );
    }

    #[test]
    fn fail_fast_aborts_remaining_tasks() {
        let (err, entries) = run(FailurePolicy::FailFast);
        assert_eq!(err.to_string(), "aborted after 'first' failed (--fail-fast)");
        assert_eq!(
            entries,
            vec![
                ("first".to_string(), TaskStatus::Failed),
                ("second".to_string(), TaskStatus::Aborted),
                ("third".to_string(), TaskStatus::Aborted),
                ("fourth".to_string(), TaskStatus::Aborted),
            ]
        );
    }
}
