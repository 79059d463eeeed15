//! Command: compose the infrastructure and hand convergence to Terragrunt.
use anyhow::{Context as _, Result};
use std::sync::Arc;

use crate::aws::{AwsEnv, SystemEnv};
use crate::cli::{GlobalOpts, InfraCommand, OutputsOpts, RenderOpts, RunOpts};
use crate::config::infra::InfraConfig;
use crate::error::InfraError;
use crate::exec::SystemExecutor;
use crate::infra::render::{self, Layout};
use crate::infra::schema::ModuleKind;
use crate::infra::{naming, outputs};
use crate::logging::{Log, Logger};
use crate::resources::file::GeneratedFileResource;
use crate::tasks::{Context, ProcessOpts, Task, TaskResult, process_resources, task_deps};

/// Run an `infra` subcommand.
///
/// # Errors
///
/// Returns an error if setup fails or any infra task fails.
pub fn run(global: &GlobalOpts, command: &InfraCommand, log: &Arc<Logger>) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let layout = Layout::for_config(&setup.config.root, &setup.config.infra);
    let ctx = setup.into_context(
        global,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor),
    )?;
    let aws = AwsEnv::from_source(&SystemEnv);

    match command {
        InfraCommand::Render(opts) => {
            let task = RenderInfra::from_opts(opts, layout, aws);
            super::run_tasks_to_completion(&[&task], &ctx, log)
        }
        InfraCommand::Check => {
            super::run_tasks_to_completion(&[&CheckNames, &super::test::ValidateInfra], &ctx, log)
        }
        InfraCommand::Run(opts) => {
            let render = RenderInfra {
                env: Some(opts.env.clone()),
                layout: layout.clone(),
                aws: aws.clone(),
            };
            let run = RunTerragrunt::new(opts, layout, aws);
            super::run_tasks_to_completion(&[&run, &render], &ctx, log)
        }
        InfraCommand::Outputs(opts) => {
            let task = VerifyOutputs::new(opts, layout, aws);
            super::run_tasks_to_completion(&[&task], &ctx, log)
        }
    }
}

/// Environments to act on: one by name, or all of them.
///
/// # Errors
///
/// Returns [`InfraError::UnknownEnvironment`] if `only` is not declared.
pub fn select_environments(
    infra: &InfraConfig,
    only: Option<&str>,
) -> Result<Vec<String>, InfraError> {
    match only {
        Some(env) if infra.environment(env).is_some() => Ok(vec![env.to_string()]),
        Some(env) => Err(InfraError::UnknownEnvironment(env.to_string())),
        None => Ok(infra.environments.keys().cloned().collect()),
    }
}

/// Write backend, provider, tfvars and terragrunt files.
#[derive(Debug)]
struct RenderInfra {
    env: Option<String>,
    layout: Layout,
    aws: AwsEnv,
}

impl RenderInfra {
    fn from_opts(opts: &RenderOpts, mut layout: Layout, aws: AwsEnv) -> Self {
        if let Some(out) = &opts.out {
            layout.out_dir.clone_from(out);
        }
        Self {
            env: opts.env.clone(),
            layout,
            aws,
        }
    }
}

impl Task for RenderInfra {
    fn name(&self) -> &'static str {
        "Render infrastructure"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.infra.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let infra = &ctx.config.infra;
        let mut files = Vec::new();
        for env in select_environments(infra, self.env.as_deref())? {
            let planned = render::plan(infra, &env, &self.layout, &self.aws)?;
            ctx.log.debug(&format!("{env}: {} files", planned.len()));
            files.extend(planned);
        }
        let resources = files
            .into_iter()
            .map(|f| GeneratedFileResource::new(f.path, f.content));
        process_resources(ctx, resources, &ProcessOpts::apply_all("write"))
    }
}

/// Derive every resource name and fail on collisions.
#[derive(Debug)]
struct CheckNames;

impl Task for CheckNames {
    fn name(&self) -> &'static str {
        "Check resource names"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.infra.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let names = naming::check_unique(&ctx.config.infra)?;
        for derived in &names {
            ctx.log.debug(&format!(
                "{}/{}: {}",
                derived.environment, derived.module, derived.name
            ));
        }
        ctx.log.info(&format!("{} resource names, all unique", names.len()));
        Ok(TaskResult::Ok)
    }
}

/// `terragrunt run-all <args>` in one environment directory.
#[derive(Debug)]
struct RunTerragrunt {
    env: String,
    args: Vec<String>,
    layout: Layout,
    aws: AwsEnv,
}

impl RunTerragrunt {
    fn new(opts: &RunOpts, layout: Layout, aws: AwsEnv) -> Self {
        Self {
            env: opts.env.clone(),
            args: opts.args.clone(),
            layout,
            aws,
        }
    }

    /// Every configured module must have a source directory to point at.
    fn check_sources(&self, infra: &InfraConfig) -> Result<(), InfraError> {
        for module in infra.modules.keys() {
            let source = self.layout.module_source(module);
            if !source.is_dir() {
                return Err(InfraError::MissingModuleSource {
                    module: module.clone(),
                    path: source.display().to_string(),
                });
            }
        }
        Ok(())
    }

    fn command_line(&self) -> Vec<&str> {
        std::iter::once("run-all")
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl Task for RunTerragrunt {
    fn name(&self) -> &'static str {
        "Run Terragrunt"
    }

    task_deps![RenderInfra];

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.infra.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let infra = &ctx.config.infra;
        if infra.environment(&self.env).is_none() {
            return Err(InfraError::UnknownEnvironment(self.env.clone()).into());
        }
        self.check_sources(infra)?;
        let dir = self.layout.out_dir.join(&self.env);
        let args = self.command_line();
        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would run in {}: terragrunt {}",
                dir.display(),
                args.join(" ")
            ));
            return Ok(TaskResult::DryRun);
        }
        if !ctx.executor.which("terragrunt") {
            anyhow::bail!("terragrunt not on PATH");
        }

        let env = self.aws.passthrough();
        let result = ctx
            .executor
            .run_in_with_env(&dir, "terragrunt", &args, &env)
            .with_context(|| format!("terragrunt {} ({})", args.join(" "), self.env))?;
        for line in result.stdout.lines().filter(|l| !l.trim().is_empty()) {
            ctx.log.info(line);
        }
        Ok(TaskResult::Ok)
    }
}

/// Read a module's outputs and require each declared one to be non-empty.
#[derive(Debug)]
struct VerifyOutputs {
    env: String,
    module: String,
    layout: Layout,
    aws: AwsEnv,
}

impl VerifyOutputs {
    fn new(opts: &OutputsOpts, layout: Layout, aws: AwsEnv) -> Self {
        Self {
            env: opts.env.clone(),
            module: opts.module.clone(),
            layout,
            aws,
        }
    }
}

impl Task for VerifyOutputs {
    fn name(&self) -> &'static str {
        "Verify module outputs"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.infra.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let infra = &ctx.config.infra;
        select_environments(infra, Some(&self.env))?;
        let kind = ModuleKind::from_name(&self.module)
            .filter(|_| infra.modules.contains_key(&self.module))
            .ok_or_else(|| InfraError::UnknownModule(self.module.clone()))?;

        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would check outputs of {}/{}: {}",
                self.env,
                self.module,
                kind.outputs().join(", ")
            ));
            return Ok(TaskResult::DryRun);
        }

        let dir = self.layout.module_dir(&self.env, &self.module);
        let result = ctx
            .executor
            .run_in_with_env(&dir, "terragrunt", &["output", "-json"], &self.aws.passthrough())
            .with_context(|| format!("reading outputs of {}/{}", self.env, self.module))?;
        let parsed = outputs::parse(&result.stdout)?;
        outputs::check_non_empty(&self.module, &parsed, kind.outputs())?;
        ctx.log.info(&format!(
            "{}/{}: {} outputs non-empty",
            self.env,
            self.module,
            kind.outputs().len()
        ));
        Ok(TaskResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::config::infra::{Environment, ModuleConfig};
    use crate::logging::TaskStatus;
    use crate::platform::{Os, Platform};
    use crate::resources::test_helpers::MockExecutor;
    use crate::tasks::test_helpers::{empty_config, make_context, make_linux_context};
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn infra() -> InfraConfig {
        let mut infra = InfraConfig {
            project_name: "ml".to_string(),
            region: "us-east-1".to_string(),
            ..InfraConfig::default()
        };
        infra.backend.bucket = "{project_name}-tfstate".to_string();
        for env in ["dev", "prod"] {
            infra.environments.insert(
                env.to_string(),
                Environment {
                    name: env.to_string(),
                    ..Environment::default()
                },
            );
        }
        infra.modules.insert(
            "ecr".to_string(),
            ModuleConfig {
                suffixes: vec!["images".to_string()],
                inputs: BTreeMap::from([("scan_on_push".to_string(), json!(true))]),
                ..ModuleConfig::default()
            },
        );
        infra
    }

    fn config(root: PathBuf) -> Config {
        let mut config = empty_config(root);
        config.infra = infra();
        config
    }

    fn layout(dir: &std::path::Path) -> Layout {
        Layout {
            out_dir: dir.join("live"),
            modules_dir: dir.join("modules"),
        }
    }

    fn with_module_sources(dir: &std::path::Path) -> Layout {
        let layout = layout(dir);
        std::fs::create_dir_all(layout.module_source("ecr")).unwrap();
        layout
    }

    fn render_task(dir: &std::path::Path, env: Option<&str>) -> RenderInfra {
        RenderInfra {
            env: env.map(str::to_string),
            layout: layout(dir),
            aws: AwsEnv::default(),
        }
    }

    #[test]
    fn select_environments_all_or_one() {
        let infra = infra();
        assert_eq!(select_environments(&infra, None).unwrap(), vec!["dev", "prod"]);
        assert_eq!(select_environments(&infra, Some("prod")).unwrap(), vec!["prod"]);
        assert_eq!(
            select_environments(&infra, Some("qa")).unwrap_err(),
            InfraError::UnknownEnvironment("qa".to_string())
        );
    }

    #[test]
    fn render_writes_every_environment_and_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_linux_context(config(dir.path().to_path_buf()));
        let task = render_task(dir.path(), None);

        assert_eq!(task.run(&ctx).unwrap(), TaskResult::Ok);
        let tfvars = dir.path().join("live/prod/ecr/terraform.tfvars.json");
        let first = std::fs::read(&tfvars).unwrap();
        assert!(dir.path().join("live/dev/ecr/backend.tf").is_file());

        task.run(&ctx).unwrap();
        assert_eq!(std::fs::read(&tfvars).unwrap(), first);
    }

    #[test]
    fn render_overwrites_hand_edits() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_linux_context(config(dir.path().to_path_buf()));
        let task = render_task(dir.path(), Some("dev"));
        task.run(&ctx).unwrap();

        let provider = dir.path().join("live/dev/ecr/provider.tf");
        let rendered = std::fs::read_to_string(&provider).unwrap();
        std::fs::write(&provider, "# edited\n").unwrap();
        task.run(&ctx).unwrap();
        assert_eq!(std::fs::read_to_string(&provider).unwrap(), rendered);
        assert!(!dir.path().join("live/prod").exists());
    }

    #[test]
    fn check_names_passes_for_distinct_environments() {
        let ctx = make_linux_context(config(PathBuf::from("/ws")));
        assert_eq!(CheckNames.run(&ctx).unwrap(), TaskResult::Ok);
    }

    #[test]
    fn run_passes_args_and_environment_through() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(
            MockExecutor::with_responses(vec![(true, "Plan: 0 to add\n".to_string())])
                .with_which(true),
        );
        let ctx = make_context(
            config(dir.path().to_path_buf()),
            Platform::new(Os::MacOs, true),
            Arc::clone(&executor) as _,
        );
        let task = RunTerragrunt::new(
            &RunOpts {
                env: "dev".to_string(),
                args: vec!["plan".to_string()],
            },
            with_module_sources(dir.path()),
            AwsEnv {
                profile: Some("sandbox".to_string()),
                ..AwsEnv::default()
            },
        );

        assert_eq!(task.run(&ctx).unwrap(), TaskResult::Ok);
        assert_eq!(
            executor.calls(),
            vec![(
                "terragrunt".to_string(),
                vec!["run-all".to_string(), "plan".to_string()]
            )]
        );
    }

    #[test]
    fn run_dry_run_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(MockExecutor::with_responses(vec![]).with_which(true));
        let ctx = make_context(
            config(dir.path().to_path_buf()),
            Platform::new(Os::Linux, false),
            Arc::clone(&executor) as _,
        )
        .dry_run(true);
        let task = RunTerragrunt::new(
            &RunOpts {
                env: "prod".to_string(),
                args: vec!["apply".to_string()],
            },
            with_module_sources(dir.path()),
            AwsEnv::default(),
        );
        assert_eq!(task.run(&ctx).unwrap(), TaskResult::DryRun);
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn run_refuses_missing_module_source() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(MockExecutor::ok("").with_which(true));
        let ctx = make_context(
            config(dir.path().to_path_buf()),
            Platform::new(Os::MacOs, true),
            Arc::clone(&executor) as _,
        );
        let task = RunTerragrunt::new(
            &RunOpts {
                env: "dev".to_string(),
                args: vec!["plan".to_string()],
            },
            layout(dir.path()),
            AwsEnv::default(),
        );

        let err = task.run(&ctx).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InfraError>(),
            Some(&InfraError::MissingModuleSource {
                module: "ecr".to_string(),
                path: dir.path().join("modules/ecr").display().to_string(),
            })
        );
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn failed_render_keeps_terragrunt_from_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path().to_path_buf());
        config.infra.backend.bucket = "{project_name}-tfstate-{account_id}".to_string();
        let executor = Arc::new(MockExecutor::ok("").with_which(true));
        let (logger, _log_dir, _guard) = crate::logging::isolated_logger();
        let log = Arc::new(logger);
        let mut ctx = make_context(
            config,
            Platform::new(Os::MacOs, true),
            Arc::clone(&executor) as _,
        );
        ctx.log = Arc::clone(&log) as Arc<dyn Log>;

        let opts = RunOpts {
            env: "dev".to_string(),
            args: vec!["apply".to_string()],
        };
        let render = render_task(dir.path(), Some("dev"));
        let run = RunTerragrunt::new(&opts, layout(dir.path()), AwsEnv::default());
        let err = crate::commands::run_tasks_to_completion(&[&run, &render], &ctx, &log)
            .unwrap_err();

        assert_eq!(err.to_string(), "1 task(s) failed");
        assert_eq!(executor.call_count(), 0);
        let statuses: Vec<_> = log.task_entries().into_iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![TaskStatus::Failed, TaskStatus::Aborted]);
    }

    fn outputs_task(dir: &std::path::Path, module: &str) -> VerifyOutputs {
        VerifyOutputs::new(
            &OutputsOpts {
                env: "dev".to_string(),
                module: module.to_string(),
            },
            layout(dir),
            AwsEnv::default(),
        )
    }

    #[test]
    fn outputs_accepted_when_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
  "repository_url": {"value": "123.dkr.ecr.us-east-1.amazonaws.com/ml-dev-images"},
  "repository_arn": {"value": "arn:aws:ecr:us-east-1:123:repository/ml-dev-images"}
}"#;
        let executor = Arc::new(MockExecutor::ok(json));
        let ctx = make_context(
            config(dir.path().to_path_buf()),
            Platform::new(Os::Linux, false),
            executor,
        );
        assert_eq!(outputs_task(dir.path(), "ecr").run(&ctx).unwrap(), TaskResult::Ok);
    }

    #[test]
    fn empty_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{"repository_url": {"value": ""}, "repository_arn": {"value": "arn"}}"#;
        let ctx = make_context(
            config(dir.path().to_path_buf()),
            Platform::new(Os::Linux, false),
            Arc::new(MockExecutor::ok(json)),
        );
        let err = outputs_task(dir.path(), "ecr").run(&ctx).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InfraError>(),
            Some(&InfraError::EmptyOutput {
                module: "ecr".to_string(),
                output: "repository_url".to_string(),
            })
        );
    }

    #[test]
    fn undeclared_module_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_linux_context(config(dir.path().to_path_buf()));
        let err = outputs_task(dir.path(), "vpc").run(&ctx).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InfraError>(),
            Some(&InfraError::UnknownModule("vpc".to_string()))
        );
    }
}
