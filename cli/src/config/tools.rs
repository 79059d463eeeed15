//! Tool inventory loading.
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use super::toml_loader;
use crate::error::ConfigError;

/// Package-manager backend used to install a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// Homebrew formula.
    Brew,
    /// Homebrew cask (macOS only).
    Cask,
    /// Global npm package.
    Npm,
    /// Python application installed with pipx.
    Pipx,
    /// Arbitrary installer run through `sh -c`.
    Script {
        /// Shell command that installs the tool.
        install: String,
    },
}

impl InstallMethod {
    /// Short backend label used in logs and grouping.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Cask => "cask",
            Self::Npm => "npm",
            Self::Pipx => "pipx",
            Self::Script { .. } => "script",
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MethodKind {
    Brew,
    Cask,
    Npm,
    Pipx,
    Script,
}

#[derive(Debug, Deserialize)]
struct RawTool {
    name: String,
    method: MethodKind,
    package: Option<String>,
    command: Option<String>,
    version: Option<String>,
    install: Option<String>,
}

/// A tool the workstation should have installed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTool")]
pub struct Tool {
    /// Display name; also the default package and command name.
    pub name: String,
    /// Backend that installs the tool.
    pub method: InstallMethod,
    /// Package name when it differs from `name` (e.g. `@aws-amplify/cli`).
    pub package: Option<String>,
    /// Binary to look for on `PATH` instead of querying the package manager.
    pub command: Option<String>,
    /// Version constraint passed to npm (`@ver`) or pipx (`==ver`).
    pub version: Option<String>,
}

impl From<RawTool> for Tool {
    fn from(raw: RawTool) -> Self {
        let method = match raw.method {
            MethodKind::Brew => InstallMethod::Brew,
            MethodKind::Cask => InstallMethod::Cask,
            MethodKind::Npm => InstallMethod::Npm,
            MethodKind::Pipx => InstallMethod::Pipx,
            // An empty install command is reported by validation.
            MethodKind::Script => InstallMethod::Script {
                install: raw.install.unwrap_or_default(),
            },
        };
        Self {
            name: raw.name,
            method,
            package: raw.package,
            command: raw.command,
            version: raw.version,
        }
    }
}

impl Tool {
    /// Package name passed to the backend.
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or(&self.name)
    }

    /// Binary probed with `which`, if this tool is detected that way.
    ///
    /// Script tools always probe by command, falling back to the tool name.
    #[must_use]
    pub fn probe_command(&self) -> Option<&str> {
        match (&self.method, self.command.as_deref()) {
            (_, Some(cmd)) => Some(cmd),
            (InstallMethod::Script { .. }, None) => Some(&self.name),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolSection {
    #[serde(default)]
    tools: Vec<Tool>,
}

/// Load tools from tools.toml, filtered by active categories.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path, active_categories: &[String]) -> Result<Vec<Tool>, ConfigError> {
    let items = toml_loader::load_section_items(path, |s: ToolSection| s.tools)?;
    Ok(toml_loader::filter_by_categories(items, active_categories))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::{assert_load_missing_returns_empty, write_temp_toml};

    fn active(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parse_every_method() {
        let (_dir, path) = write_temp_toml(
            r#"[base]
tools = [
  { name = "git", method = "brew" },
  { name = "docker", method = "cask" },
  { name = "aws-cdk", method = "npm", command = "cdk", version = "2.150.0" },
  { name = "poetry", method = "pipx" },
  { name = "pyenv", method = "script", install = "curl -fsSL https://pyenv.run | bash" },
]
"#,
        );
        let tools = load(&path, &active(&["base"])).unwrap();
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0].method, InstallMethod::Brew);
        assert_eq!(tools[1].method, InstallMethod::Cask);
        assert_eq!(tools[2].command.as_deref(), Some("cdk"));
        assert_eq!(tools[2].version.as_deref(), Some("2.150.0"));
        assert_eq!(tools[3].method, InstallMethod::Pipx);
        assert_eq!(
            tools[4].method,
            InstallMethod::Script {
                install: "curl -fsSL https://pyenv.run | bash".to_string()
            }
        );
    }

    #[test]
    fn declared_order_is_preserved_across_sections() {
        let (_dir, path) = write_temp_toml(
            r#"[full]
tools = [{ name = "terragrunt", method = "brew" }]

[base]
tools = [{ name = "git", method = "brew" }, { name = "jq", method = "brew" }]
"#,
        );
        let tools = load(&path, &active(&["base", "full"])).unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["terragrunt", "git", "jq"]);
    }

    #[test]
    fn filters_by_category() {
        let (_dir, path) = write_temp_toml(
            r#"[base]
tools = [{ name = "git", method = "brew" }]

[base-macos]
tools = [{ name = "iterm2", method = "cask" }]

[full]
tools = [{ name = "terraform", method = "brew" }]
"#,
        );
        let tools = load(&path, &active(&["base", "linux"])).unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "git");
    }

    #[test]
    fn unknown_method_is_a_syntax_error() {
        let (_dir, path) =
            write_temp_toml("[base]\ntools = [{ name = \"git\", method = \"apt\" }]\n");
        let err = load(&path, &active(&["base"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSyntax { .. }), "got: {err}");
    }

    #[test]
    fn script_without_install_loads_empty_command() {
        let (_dir, path) =
            write_temp_toml("[base]\ntools = [{ name = \"rustup\", method = \"script\" }]\n");
        let tools = load(&path, &active(&["base"])).unwrap();
        assert_eq!(
            tools[0].method,
            InstallMethod::Script {
                install: String::new()
            }
        );
    }

    #[test]
    fn package_name_defaults_to_name() {
        let tool = Tool {
            name: "amplify".to_string(),
            method: InstallMethod::Npm,
            package: Some("@aws-amplify/cli".to_string()),
            command: None,
            version: None,
        };
        assert_eq!(tool.package_name(), "@aws-amplify/cli");
        let plain = Tool {
            package: None,
            ..tool
        };
        assert_eq!(plain.package_name(), "amplify");
    }

    #[test]
    fn probe_command_rules() {
        let brew = Tool {
            name: "jq".to_string(),
            method: InstallMethod::Brew,
            package: None,
            command: None,
            version: None,
        };
        assert_eq!(brew.probe_command(), None);

        let script = Tool {
            name: "pyenv".to_string(),
            method: InstallMethod::Script {
                install: "x".to_string(),
            },
            ..brew.clone()
        };
        assert_eq!(script.probe_command(), Some("pyenv"));

        let npm_with_cmd = Tool {
            name: "aws-cdk".to_string(),
            method: InstallMethod::Npm,
            command: Some("cdk".to_string()),
            ..brew
        };
        assert_eq!(npm_with_cmd.probe_command(), Some("cdk"));
    }

    #[test]
    fn load_missing_file_returns_empty() {
        assert_load_missing_returns_empty(load);
    }
}
