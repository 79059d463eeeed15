//! Tool installation resource.
use std::collections::HashSet;

use anyhow::Result;

use super::error::ResourceError;
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::config::tools::{InstallMethod, Tool};
use crate::exec::Executor;

/// Package managers that can list everything they have installed in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Homebrew formulae.
    Brew,
    /// Homebrew casks.
    Cask,
    /// Global npm packages.
    Npm,
    /// pipx applications.
    Pipx,
}

impl Backend {
    /// Backend that lists packages of `method`, if it has one.
    #[must_use]
    pub const fn for_method(method: &InstallMethod) -> Option<Self> {
        match method {
            InstallMethod::Brew => Some(Self::Brew),
            InstallMethod::Cask => Some(Self::Cask),
            InstallMethod::Npm => Some(Self::Npm),
            InstallMethod::Pipx => Some(Self::Pipx),
            InstallMethod::Script { .. } => None,
        }
    }

    const fn list_command(self) -> (&'static str, &'static [&'static str]) {
        const FORMULAE: &[&str] = &["list", "--formula", "-1"];
        const CASKS: &[&str] = &["list", "--cask", "-1"];
        const NPM_GLOBAL: &[&str] = &["ls", "-g", "--depth=0", "--parseable"];
        const PIPX_APPS: &[&str] = &["list", "--short"];
        match self {
            Self::Brew => ("brew", FORMULAE),
            Self::Cask => ("brew", CASKS),
            Self::Npm => ("npm", NPM_GLOBAL),
            Self::Pipx => ("pipx", PIPX_APPS),
        }
    }

    /// Extract a package name from one line of the list output.
    fn parse_line(self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match self {
            Self::Brew | Self::Cask => Some(line.to_string()),
            // Parseable output is one path per line; the first is the prefix.
            Self::Npm => line
                .split_once("node_modules/")
                .map(|(_, pkg)| pkg.trim_end_matches('/').to_string()),
            // "poetry 1.8.3"
            Self::Pipx => line.split_whitespace().next().map(str::to_string),
        }
    }
}

/// Query the full set of installed package names for a backend.
///
/// Runs a **single** command regardless of how many tools are checked. When
/// the package manager itself is not on `PATH` the set is empty, so every
/// tool of that backend probes as missing.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned.
pub fn get_installed(backend: Backend, executor: &dyn Executor) -> Result<HashSet<String>> {
    let (program, args) = backend.list_command();
    if !executor.which(program) {
        return Ok(HashSet::new());
    }
    // npm exits non-zero on peer-dependency problems but still lists packages.
    let result = executor.run_unchecked(program, args)?;
    if !result.success && backend != Backend::Npm {
        return Ok(HashSet::new());
    }
    Ok(result
        .stdout
        .lines()
        .filter_map(|line| backend.parse_line(line))
        .collect())
}

/// A tool that can be probed and installed.
#[derive(Debug)]
pub struct ToolResource<'a> {
    /// The tool descriptor.
    pub tool: Tool,
    executor: &'a dyn Executor,
}

impl<'a> ToolResource<'a> {
    /// Create a new tool resource.
    #[must_use]
    pub const fn new(tool: Tool, executor: &'a dyn Executor) -> Self {
        Self { tool, executor }
    }

    /// Name the backend reports for this tool (taps are listed by short name).
    fn listed_name(&self) -> &str {
        let pkg = self.tool.package_name();
        match self.tool.method {
            InstallMethod::Brew | InstallMethod::Cask => pkg.rsplit('/').next().unwrap_or(pkg),
            _ => pkg,
        }
    }

    /// Determine the state from a pre-fetched set of installed names.
    ///
    /// Tools probed by command ignore the set and check `PATH`.
    #[must_use]
    pub fn state_from_installed(&self, installed: &HashSet<String>) -> ResourceState {
        let present = self.tool.probe_command().map_or_else(
            || installed.contains(self.listed_name()),
            |cmd| self.executor.which(cmd),
        );
        if present {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        }
    }

    fn install_args(&self) -> (&'static str, Vec<String>) {
        let pkg = self.tool.package_name().to_string();
        match (&self.tool.method, self.tool.version.as_deref()) {
            (InstallMethod::Brew, _) => ("brew", vec!["install".into(), pkg]),
            (InstallMethod::Cask, _) => ("brew", vec!["install".into(), "--cask".into(), pkg]),
            (InstallMethod::Npm, Some(v)) => {
                ("npm", vec!["install".into(), "-g".into(), format!("{pkg}@{v}")])
            }
            (InstallMethod::Npm, None) => ("npm", vec!["install".into(), "-g".into(), pkg]),
            (InstallMethod::Pipx, Some(v)) => {
                ("pipx", vec!["install".into(), format!("{pkg}=={v}")])
            }
            (InstallMethod::Pipx, None) => ("pipx", vec!["install".into(), pkg]),
            (InstallMethod::Script { install }, _) => {
                ("sh", vec!["-c".into(), install.clone()])
            }
        }
    }
}

impl Applicable for ToolResource<'_> {
    fn description(&self) -> String {
        match &self.tool.version {
            Some(v) => format!("{} {v} ({})", self.tool.name, self.tool.method),
            None => format!("{} ({})", self.tool.name, self.tool.method),
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if let InstallMethod::Script { install } = &self.tool.method
            && install.trim().is_empty()
        {
            return Ok(ResourceChange::Skipped {
                reason: "no install command".to_string(),
            });
        }
        let (program, args) = self.install_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = self.executor.run_unchecked(program, &args)?;
        if result.success {
            Ok(ResourceChange::Applied)
        } else {
            Err(ResourceError::from_exec(program, &result).into())
        }
    }
}

impl Resource for ToolResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        let installed = match Backend::for_method(&self.tool.method) {
            Some(backend) if self.tool.probe_command().is_none() => {
                get_installed(backend, self.executor)?
            }
            _ => HashSet::new(),
        };
        Ok(self.state_from_installed(&installed))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::resources::test_helpers::MockExecutor;

    fn tool(name: &str, method: InstallMethod) -> Tool {
        Tool {
            name: name.to_string(),
            method,
            package: None,
            command: None,
            version: None,
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn description_includes_method_and_version() {
        let executor = MockExecutor::ok("");
        let mut t = tool("aws-cdk", InstallMethod::Npm);
        assert_eq!(ToolResource::new(t.clone(), &executor).description(), "aws-cdk (npm)");
        t.version = Some("2.150.0".to_string());
        assert_eq!(
            ToolResource::new(t, &executor).description(),
            "aws-cdk 2.150.0 (npm)"
        );
    }

    #[test]
    fn state_from_installed_set() {
        let executor = MockExecutor::ok("");
        let jq = ToolResource::new(tool("jq", InstallMethod::Brew), &executor);
        assert_eq!(jq.state_from_installed(&set(&["git", "jq"])), ResourceState::Correct);
        assert_eq!(jq.state_from_installed(&set(&["git"])), ResourceState::Missing);
    }

    #[test]
    fn tapped_formula_matches_short_name() {
        let executor = MockExecutor::ok("");
        let mut t = tool("terraform", InstallMethod::Brew);
        t.package = Some("hashicorp/tap/terraform".to_string());
        let r = ToolResource::new(t, &executor);
        assert_eq!(r.state_from_installed(&set(&["terraform"])), ResourceState::Correct);
    }

    #[test]
    fn probe_by_command_uses_which() {
        let present = MockExecutor::ok("").with_which(true);
        let absent = MockExecutor::ok("").with_which(false);
        let t = tool(
            "pyenv",
            InstallMethod::Script {
                install: "curl https://pyenv.run | bash".to_string(),
            },
        );
        assert_eq!(
            ToolResource::new(t.clone(), &present).state_from_installed(&HashSet::new()),
            ResourceState::Correct
        );
        assert_eq!(
            ToolResource::new(t, &absent).state_from_installed(&set(&["pyenv"])),
            ResourceState::Missing
        );
    }

    #[test]
    fn get_installed_brew_formulae() {
        let executor = MockExecutor::ok("git\njq\nterraform\n").with_which(true);
        let installed = get_installed(Backend::Brew, &executor).unwrap();
        assert_eq!(installed, set(&["git", "jq", "terraform"]));
        assert_eq!(
            executor.calls(),
            vec![(
                "brew".to_string(),
                vec!["list".to_string(), "--formula".to_string(), "-1".to_string()]
            )]
        );
    }

    #[test]
    fn get_installed_npm_parseable() {
        let out = "/opt/homebrew/lib\n\
                   /opt/homebrew/lib/node_modules/aws-cdk\n\
                   /opt/homebrew/lib/node_modules/@aws-amplify/cli\n\
                   /opt/homebrew/lib/node_modules/npm\n";
        let executor = MockExecutor::ok(out).with_which(true);
        let installed = get_installed(Backend::Npm, &executor).unwrap();
        assert_eq!(installed, set(&["aws-cdk", "@aws-amplify/cli", "npm"]));
    }

    #[test]
    fn get_installed_npm_tolerates_non_zero_exit() {
        let executor = MockExecutor::with_responses(vec![(
            false,
            "/usr/lib\n/usr/lib/node_modules/aws-cdk\n".to_string(),
        )])
        .with_which(true);
        let installed = get_installed(Backend::Npm, &executor).unwrap();
        assert_eq!(installed, set(&["aws-cdk"]));
    }

    #[test]
    fn get_installed_pipx_short() {
        let executor = MockExecutor::ok("poetry 1.8.3\npre-commit 3.7.1\n").with_which(true);
        let installed = get_installed(Backend::Pipx, &executor).unwrap();
        assert_eq!(installed, set(&["poetry", "pre-commit"]));
    }

    #[test]
    fn get_installed_without_manager_is_empty() {
        let executor = MockExecutor::ok("git\n").with_which(false);
        let installed = get_installed(Backend::Brew, &executor).unwrap();
        assert!(installed.is_empty());
        assert_eq!(executor.call_count(), 0, "should not run a missing binary");
    }

    #[test]
    fn get_installed_failed_brew_is_empty() {
        let executor = MockExecutor::fail().with_which(true);
        assert!(get_installed(Backend::Cask, &executor).unwrap().is_empty());
    }

    #[test]
    fn current_state_runs_bulk_query() {
        let executor = MockExecutor::ok("docker\n").with_which(true);
        let r = ToolResource::new(tool("docker", InstallMethod::Cask), &executor);
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(executor.calls()[0].1[1], "--cask");
    }

    fn applied_command(t: Tool) -> (String, Vec<String>) {
        let executor = MockExecutor::ok("");
        let change = ToolResource::new(t, &executor).apply().unwrap();
        assert_eq!(change, ResourceChange::Applied);
        executor.calls().remove(0)
    }

    #[test]
    fn install_commands_per_method() {
        assert_eq!(
            applied_command(tool("jq", InstallMethod::Brew)),
            ("brew".to_string(), vec!["install".to_string(), "jq".to_string()])
        );
        assert_eq!(
            applied_command(tool("docker", InstallMethod::Cask)).1,
            vec!["install", "--cask", "docker"]
        );
        assert_eq!(
            applied_command(tool("aws-cdk", InstallMethod::Npm)).1,
            vec!["install", "-g", "aws-cdk"]
        );
        assert_eq!(
            applied_command(tool("poetry", InstallMethod::Pipx)).1,
            vec!["install", "poetry"]
        );
        assert_eq!(
            applied_command(tool(
                "pyenv",
                InstallMethod::Script {
                    install: "curl https://pyenv.run | bash".to_string()
                }
            )),
            (
                "sh".to_string(),
                vec!["-c".to_string(), "curl https://pyenv.run | bash".to_string()]
            )
        );
    }

    #[test]
    fn install_with_version_constraint() {
        let mut npm = tool("aws-cdk", InstallMethod::Npm);
        npm.version = Some("2.150.0".to_string());
        assert_eq!(applied_command(npm).1, vec!["install", "-g", "aws-cdk@2.150.0"]);

        let mut pipx = tool("poetry", InstallMethod::Pipx);
        pipx.version = Some("1.8.3".to_string());
        assert_eq!(applied_command(pipx).1, vec!["install", "poetry==1.8.3"]);
    }

    #[test]
    fn install_uses_package_override() {
        let mut t = tool("amplify", InstallMethod::Npm);
        t.package = Some("@aws-amplify/cli".to_string());
        assert_eq!(applied_command(t).1, vec!["install", "-g", "@aws-amplify/cli"]);
    }

    #[test]
    fn failed_install_is_typed_error() {
        let executor = MockExecutor::fail();
        let err = ToolResource::new(tool("nope", InstallMethod::Brew), &executor)
            .apply()
            .unwrap_err();
        let typed = err.downcast_ref::<ResourceError>().unwrap();
        assert!(matches!(
            typed,
            ResourceError::ExecutionFailed { program, exit_code: 1, .. } if program == "brew"
        ));
    }

    #[test]
    fn script_without_install_is_skipped() {
        let executor = MockExecutor::ok("");
        let change = ToolResource::new(
            tool(
                "x",
                InstallMethod::Script {
                    install: " ".to_string(),
                },
            ),
            &executor,
        )
        .apply()
        .unwrap();
        assert!(matches!(change, ResourceChange::Skipped { .. }));
        assert_eq!(executor.call_count(), 0);
    }
}
