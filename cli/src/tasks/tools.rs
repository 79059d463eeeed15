//! Tool installation tasks, one per backend family.
use std::collections::HashSet;

use anyhow::Result;

use super::homebrew::InstallHomebrew;
use super::{
    Context, ProcessOpts, Task, TaskResult, process_resource_states, process_resources, task_deps,
};
use crate::config::tools::{InstallMethod, Tool};
use crate::resources::ResourceState;
use crate::resources::tool::{Backend, ToolResource, get_installed};

const VERB: &str = "install";

fn tools_where(ctx: &Context, pred: impl Fn(&InstallMethod) -> bool) -> Vec<Tool> {
    ctx.config
        .tools
        .iter()
        .filter(|t| pred(&t.method))
        .cloned()
        .collect()
}

/// Probe `tools` with one query per needed backend, keeping declared order.
///
/// Tools probed by command (`which`) never trigger a backend query.
///
/// # Errors
///
/// Returns an error if a backend query cannot be spawned.
pub fn probe_tools<'a>(
    ctx: &'a Context,
    tools: Vec<Tool>,
) -> Result<Vec<(ToolResource<'a>, ResourceState)>> {
    let needs_query = |backend: Backend| {
        tools
            .iter()
            .any(|t| t.probe_command().is_none() && Backend::for_method(&t.method) == Some(backend))
    };
    let wanted: Vec<Backend> = [Backend::Brew, Backend::Cask, Backend::Npm, Backend::Pipx]
        .into_iter()
        .filter(|&b| needs_query(b))
        .collect();

    ctx.log.debug(&format!(
        "checking {} tools with {} package-manager queries",
        tools.len(),
        wanted.len()
    ));
    let executor = &*ctx.executor;
    let queried: Vec<(Backend, HashSet<String>)> = if ctx.parallel {
        use rayon::prelude::*;
        wanted
            .par_iter()
            .map(|&b| get_installed(b, executor).map(|set| (b, set)))
            .collect::<Result<_>>()?
    } else {
        wanted
            .iter()
            .map(|&b| get_installed(b, executor).map(|set| (b, set)))
            .collect::<Result<_>>()?
    };

    let empty = HashSet::new();
    Ok(tools
        .into_iter()
        .map(|tool| {
            let installed = Backend::for_method(&tool.method)
                .and_then(|b| queried.iter().find(|(q, _)| *q == b).map(|(_, s)| s))
                .unwrap_or(&empty);
            let resource = ToolResource::new(tool, executor);
            let state = resource.state_from_installed(installed);
            (resource, state)
        })
        .collect())
}

fn install_with_backends(ctx: &Context, tools: Vec<Tool>) -> Result<TaskResult> {
    let resource_states = probe_tools(ctx, tools)?;
    process_resource_states(ctx, resource_states, &ProcessOpts::install_missing(VERB))
}

/// Install Homebrew formulae and casks.
#[derive(Debug)]
pub struct InstallBrewTools;

impl Task for InstallBrewTools {
    fn name(&self) -> &'static str {
        "Install Homebrew tools"
    }

    task_deps![InstallHomebrew];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config
            .tools
            .iter()
            .any(|t| matches!(t.method, InstallMethod::Brew | InstallMethod::Cask))
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let supports_casks = ctx.platform.supports_casks();
        let tools = tools_where(ctx, |m| match m {
            InstallMethod::Brew => true,
            InstallMethod::Cask => supports_casks,
            _ => false,
        });
        let dropped = if supports_casks {
            0
        } else {
            ctx.config
                .tools
                .iter()
                .filter(|t| t.method == InstallMethod::Cask)
                .count()
        };
        if dropped > 0 {
            ctx.log.debug(&format!("ignoring {dropped} cask(s): casks need macOS"));
        }
        if tools.is_empty() {
            return Ok(TaskResult::Skipped("no Homebrew tools for this platform".to_string()));
        }
        if !ctx.executor.which("brew") && !ctx.dry_run {
            return Ok(TaskResult::Skipped("brew not on PATH".to_string()));
        }
        install_with_backends(ctx, tools)
    }
}

/// Install global npm packages.
#[derive(Debug)]
pub struct InstallNpmTools;

impl Task for InstallNpmTools {
    fn name(&self) -> &'static str {
        "Install npm tools"
    }

    task_deps![InstallBrewTools];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.tools.iter().any(|t| t.method == InstallMethod::Npm)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !ctx.executor.which("npm") && !ctx.dry_run {
            return Ok(TaskResult::Skipped("npm not on PATH".to_string()));
        }
        install_with_backends(ctx, tools_where(ctx, |m| *m == InstallMethod::Npm))
    }
}

/// Install pipx applications.
#[derive(Debug)]
pub struct InstallPipxTools;

impl Task for InstallPipxTools {
    fn name(&self) -> &'static str {
        "Install pipx tools"
    }

    task_deps![InstallBrewTools];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.tools.iter().any(|t| t.method == InstallMethod::Pipx)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !ctx.executor.which("pipx") && !ctx.dry_run {
            return Ok(TaskResult::Skipped("pipx not on PATH".to_string()));
        }
        install_with_backends(ctx, tools_where(ctx, |m| *m == InstallMethod::Pipx))
    }
}

/// Run install scripts for tools that are not on `PATH`.
#[derive(Debug)]
pub struct InstallScriptTools;

impl Task for InstallScriptTools {
    fn name(&self) -> &'static str {
        "Install script tools"
    }

    task_deps![InstallBrewTools];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config
            .tools
            .iter()
            .any(|t| matches!(t.method, InstallMethod::Script { .. }))
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let executor = &*ctx.executor;
        let resources = tools_where(ctx, |m| matches!(m, InstallMethod::Script { .. }))
            .into_iter()
            .map(|tool| ToolResource::new(tool, executor));
        process_resources(ctx, resources, &ProcessOpts::install_missing(VERB))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::resources::test_helpers::MockExecutor;
    use crate::tasks::FailurePolicy;
    use crate::tasks::test_helpers::{empty_config, make_context, make_macos_context};
    use crate::platform::{Os, Platform};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn tool(name: &str, method: InstallMethod) -> Tool {
        Tool {
            name: name.to_string(),
            method,
            package: None,
            command: None,
            version: None,
        }
    }

    fn config_with(tools: Vec<Tool>) -> Config {
        let mut config = empty_config(PathBuf::from("/ws"));
        config.tools = tools;
        config
    }

    fn sequential(ctx: Context) -> Context {
        ctx.parallel(false)
    }

    #[test]
    fn brew_installs_only_missing_in_declared_order() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![
                (true, "git\nripgrep\n".to_string()),
                (true, String::new()),
                (true, String::new()),
            ])
            .with_which(true),
        );
        let config = config_with(vec![
            tool("jq", InstallMethod::Brew),
            tool("git", InstallMethod::Brew),
            tool("awscli", InstallMethod::Brew),
        ]);
        let ctx = sequential(make_macos_context(config, Arc::clone(&executor) as _));

        assert_eq!(InstallBrewTools.run(&ctx).unwrap(), TaskResult::Ok);

        let calls = executor.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].1, ["list", "--formula", "-1"]);
        assert_eq!(calls[1], ("brew".to_string(), vec!["install".to_string(), "jq".to_string()]));
        assert_eq!(calls[2].1, ["install", "awscli"]);
    }

    #[test]
    fn second_run_installs_nothing() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![(true, "jq\n".to_string())]).with_which(true),
        );
        let ctx = sequential(make_macos_context(
            config_with(vec![tool("jq", InstallMethod::Brew)]),
            Arc::clone(&executor) as _,
        ));
        InstallBrewTools.run(&ctx).unwrap();
        assert_eq!(executor.call_count(), 1);
    }

    #[test]
    fn casks_ignored_off_macos() {
        let executor = Arc::new(MockExecutor::with_responses(vec![]).with_which(true));
        let ctx = make_context(
            config_with(vec![tool("docker", InstallMethod::Cask)]),
            Platform::new(Os::Linux, false),
            Arc::clone(&executor) as _,
        );
        assert!(matches!(
            InstallBrewTools.run(&ctx).unwrap(),
            TaskResult::Skipped(_)
        ));
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn skipped_when_brew_missing() {
        let executor = Arc::new(MockExecutor::with_responses(vec![]));
        let ctx = make_macos_context(
            config_with(vec![tool("jq", InstallMethod::Brew)]),
            Arc::clone(&executor) as _,
        );
        assert_eq!(
            InstallBrewTools.run(&ctx).unwrap(),
            TaskResult::Skipped("brew not on PATH".to_string())
        );
    }

    #[test]
    fn failed_install_continues_and_fails_task() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![
                (true, String::new()),
                (false, String::new()),
                (true, String::new()),
            ])
            .with_which(true),
        );
        let ctx = sequential(make_macos_context(
            config_with(vec![
                tool("broken", InstallMethod::Brew),
                tool("jq", InstallMethod::Brew),
            ]),
            Arc::clone(&executor) as _,
        ));
        let err = InstallBrewTools.run(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 item(s) failed");
        assert_eq!(executor.call_count(), 3);
    }

    #[test]
    fn fail_fast_stops_after_first_failed_install() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![(true, String::new()), (false, String::new())])
                .with_which(true),
        );
        let ctx = sequential(make_macos_context(
            config_with(vec![
                tool("broken", InstallMethod::Brew),
                tool("jq", InstallMethod::Brew),
            ]),
            Arc::clone(&executor) as _,
        ))
        .policy(FailurePolicy::FailFast);
        assert!(InstallBrewTools.run(&ctx).is_err());
        assert_eq!(executor.call_count(), 2);
    }

    #[test]
    fn npm_versions_are_pinned() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![
                (true, "/usr/local/lib\n".to_string()),
                (true, String::new()),
            ])
            .with_which(true),
        );
        let mut cdk = tool("aws-cdk", InstallMethod::Npm);
        cdk.version = Some("2.150.0".to_string());
        let ctx = sequential(make_macos_context(
            config_with(vec![cdk]),
            Arc::clone(&executor) as _,
        ));
        InstallNpmTools.run(&ctx).unwrap();
        assert_eq!(executor.calls()[1].1, ["install", "-g", "aws-cdk@2.150.0"]);
    }

    #[test]
    fn dry_run_queries_but_installs_nothing() {
        let executor = Arc::new(
            MockExecutor::with_responses(vec![(true, String::new())]).with_which(true),
        );
        let ctx = sequential(make_macos_context(
            config_with(vec![tool("poetry", InstallMethod::Pipx)]),
            Arc::clone(&executor) as _,
        ))
        .dry_run(true);
        assert_eq!(InstallPipxTools.run(&ctx).unwrap(), TaskResult::DryRun);
        assert_eq!(executor.call_count(), 1);
    }

    #[test]
    fn script_tools_probe_by_command() {
        let executor = Arc::new(MockExecutor::with_responses(vec![]).with_which(true));
        let ctx = make_macos_context(
            config_with(vec![tool(
                "rustup",
                InstallMethod::Script {
                    install: "curl https://sh.rustup.rs | sh -s -- -y".to_string(),
                },
            )]),
            Arc::clone(&executor) as _,
        );
        assert!(InstallScriptTools.should_run(&ctx));
        assert_eq!(InstallScriptTools.run(&ctx).unwrap(), TaskResult::Ok);
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn dependencies_follow_homebrew() {
        use std::any::TypeId;
        assert_eq!(InstallBrewTools.dependencies(), [TypeId::of::<InstallHomebrew>()]);
        assert_eq!(InstallNpmTools.dependencies(), [TypeId::of::<InstallBrewTools>()]);
    }
}
