//! Non-fatal configuration checks.
use std::collections::HashMap;

use super::infra::InfraConfig;
use super::shell_profile::ProfileLine;
use super::tools::{InstallMethod, Tool};
use crate::infra::{ModuleInputs, inputs, naming, schema::ModuleKind};
use crate::platform::Platform;

/// A validation warning detected during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration source (e.g., "tools.toml", "infra.toml").
    pub source: String,
    /// The specific item or section that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Build a warning from its three parts.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Trait for configuration validators.
pub trait ConfigValidator {
    /// Validate the configuration and return any warnings found.
    fn validate(&self, platform: &Platform) -> Vec<ValidationWarning>;

    /// Config file this validator checks (e.g. "tools.toml").
    fn source(&self) -> &'static str;
}

/// Validator for the tool inventory.
#[derive(Debug)]
pub struct ToolValidator<'a> {
    tools: &'a [Tool],
}

impl<'a> ToolValidator<'a> {
    /// Validate `tools`.
    #[must_use]
    pub const fn new(tools: &'a [Tool]) -> Self {
        Self { tools }
    }
}

impl ConfigValidator for ToolValidator<'_> {
    fn validate(&self, platform: &Platform) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let mut seen: HashMap<&str, &InstallMethod> = HashMap::new();

        for tool in self.tools {
            if tool.name.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    self.source(),
                    &tool.name,
                    "tool name is empty",
                ));
                continue;
            }

            if let Some(prev) = seen.insert(&tool.name, &tool.method) {
                warnings.push(ValidationWarning::new(
                    self.source(),
                    &tool.name,
                    format!("duplicate tool (already declared with method {prev})"),
                ));
            }

            match &tool.method {
                InstallMethod::Script { install } if install.trim().is_empty() => {
                    warnings.push(ValidationWarning::new(
                        self.source(),
                        &tool.name,
                        "script tool has no install command",
                    ));
                }
                InstallMethod::Cask if !platform.supports_casks() => {
                    warnings.push(ValidationWarning::new(
                        self.source(),
                        &tool.name,
                        format!("casks are macOS-only but platform is {}", platform.os),
                    ));
                }
                InstallMethod::Brew | InstallMethod::Cask if tool.version.is_some() => {
                    warnings.push(ValidationWarning::new(
                        self.source(),
                        &tool.name,
                        "version constraints are ignored for Homebrew packages",
                    ));
                }
                _ => {}
            }
        }

        warnings
    }

    fn source(&self) -> &'static str {
        "tools.toml"
    }
}

/// Validator for shell-profile blocks.
#[derive(Debug)]
pub struct ProfileLineValidator<'a> {
    lines: &'a [ProfileLine],
}

impl<'a> ProfileLineValidator<'a> {
    /// Validate `lines`.
    #[must_use]
    pub const fn new(lines: &'a [ProfileLine]) -> Self {
        Self { lines }
    }
}

impl ConfigValidator for ProfileLineValidator<'_> {
    fn validate(&self, _platform: &Platform) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (i, line) in self.lines.iter().enumerate() {
            if line.marker.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    self.source(),
                    &line.content,
                    "marker is empty; the block would count as applied everywhere",
                ));
                continue;
            }

            for earlier in self.lines.iter().take(i) {
                if earlier.marker == line.marker {
                    warnings.push(ValidationWarning::new(
                        self.source(),
                        &line.marker,
                        "duplicate marker; only the first block will be appended",
                    ));
                } else if earlier.marker.contains(&line.marker) {
                    warnings.push(ValidationWarning::new(
                        self.source(),
                        &line.marker,
                        format!(
                            "marker is a substring of earlier marker '{}' and will never be appended",
                            earlier.marker
                        ),
                    ));
                }
            }
        }

        warnings
    }

    fn source(&self) -> &'static str {
        "shell-profile.toml"
    }
}

/// Validator for the infrastructure composition.
#[derive(Debug)]
pub struct InfraValidator<'a> {
    infra: &'a InfraConfig,
}

impl<'a> InfraValidator<'a> {
    /// Validate `infra`.
    #[must_use]
    pub const fn new(infra: &'a InfraConfig) -> Self {
        Self { infra }
    }
}

fn derived_key_warnings(
    warnings: &mut Vec<ValidationWarning>,
    src: &'static str,
    item: &str,
    layer: &ModuleInputs,
) {
    for key in inputs::DERIVED_KEYS {
        if layer.contains_key(key) {
            warnings.push(ValidationWarning::new(
                src,
                item,
                format!("input '{key}' is derived and will be ignored"),
            ));
        }
    }
}

impl ConfigValidator for InfraValidator<'_> {
    fn validate(&self, _platform: &Platform) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        if self.infra.is_empty() {
            return warnings;
        }
        let src = self.source();

        if let Err(e) = naming::validate_part("project_name", &self.infra.project_name) {
            warnings.push(ValidationWarning::new(src, "project_name", e.to_string()));
        }
        if self.infra.region.trim().is_empty() {
            warnings.push(ValidationWarning::new(src, "region", "region is empty"));
        }
        if self.infra.environments.is_empty() {
            warnings.push(ValidationWarning::new(
                src,
                "environments",
                "modules are declared but no environments",
            ));
        }
        for (name, env) in &self.infra.environments {
            if let Err(e) = naming::validate_part("environment", name) {
                warnings.push(ValidationWarning::new(src, name, e.to_string()));
            }
            derived_key_warnings(&mut warnings, src, name, &env.inputs);
        }

        for (name, module) in &self.infra.modules {
            let Some(kind) = ModuleKind::from_name(name) else {
                warnings.push(ValidationWarning::new(
                    src,
                    name,
                    format!(
                        "unknown module (expected one of: {})",
                        ModuleKind::ALL
                            .iter()
                            .copied()
                            .map(ModuleKind::as_str)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                ));
                continue;
            };
            for suffix in &module.suffixes {
                if let Err(e) = naming::validate_part("suffix", suffix) {
                    warnings.push(ValidationWarning::new(src, name, e.to_string()));
                }
            }
            derived_key_warnings(&mut warnings, src, name, &module.inputs);
            for (env, over) in &module.environments {
                derived_key_warnings(&mut warnings, src, &format!("{name}/{env}"), &over.inputs);
                if !self.infra.environments.contains_key(env) {
                    warnings.push(ValidationWarning::new(
                        src,
                        name,
                        format!("override for undeclared environment '{env}'"),
                    ));
                }
            }
            for env in self.infra.environments.keys() {
                if let Ok(resolved) = inputs::resolve(self.infra, env, name) {
                    for missing in kind.missing_inputs(&resolved) {
                        warnings.push(ValidationWarning::new(
                            src,
                            format!("{env}/{name}"),
                            format!("required input '{missing}' is not set"),
                        ));
                    }
                }
            }
        }

        if let Err(e) = naming::check_unique(self.infra) {
            warnings.push(ValidationWarning::new(src, "resource names", e.to_string()));
        }

        warnings
    }

    fn source(&self) -> &'static str {
        "infra.toml"
    }
}

/// Run every validator over a loaded config.
#[must_use]
pub fn validate_all(config: &super::Config, platform: &Platform) -> Vec<ValidationWarning> {
    let validators: [&dyn ConfigValidator; 3] = [
        &ToolValidator::new(&config.tools),
        &ProfileLineValidator::new(&config.shell_profile),
        &InfraValidator::new(&config.infra),
    ];
    validators
        .iter()
        .flat_map(|v| v.validate(platform))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::infra::{Environment, ModuleConfig};
    use crate::platform::Os;
    use serde_json::json;

    fn macos() -> Platform {
        Platform::new(Os::MacOs, true)
    }

    fn tool(name: &str, method: InstallMethod) -> Tool {
        Tool {
            name: name.to_string(),
            method,
            package: None,
            command: None,
            version: None,
        }
    }

    fn line(marker: &str) -> ProfileLine {
        ProfileLine {
            marker: marker.to_string(),
            content: format!("# {marker}"),
        }
    }

    fn infra() -> InfraConfig {
        let mut infra = InfraConfig {
            project_name: "ml".to_string(),
            region: "us-east-1".to_string(),
            ..InfraConfig::default()
        };
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
                ..ModuleConfig::default()
            },
        );
        infra
    }

    #[test]
    fn clean_tools_have_no_warnings() {
        let tools = vec![
            tool("git", InstallMethod::Brew),
            tool("docker", InstallMethod::Cask),
        ];
        assert!(ToolValidator::new(&tools).validate(&macos()).is_empty());
    }

    #[test]
    fn duplicate_and_empty_tool_names() {
        let tools = vec![
            tool("git", InstallMethod::Brew),
            tool("git", InstallMethod::Npm),
            tool("  ", InstallMethod::Brew),
        ];
        let warnings = ToolValidator::new(&tools).validate(&macos());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("duplicate tool"));
        assert!(warnings[0].message.contains("brew"));
        assert_eq!(warnings[1].message, "tool name is empty");
    }

    #[test]
    fn script_without_install_command() {
        let tools = vec![tool(
            "pyenv",
            InstallMethod::Script {
                install: String::new(),
            },
        )];
        let warnings = ToolValidator::new(&tools).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "script tool has no install command");
    }

    #[test]
    fn cask_on_linux() {
        let tools = vec![tool("docker", InstallMethod::Cask)];
        let warnings = ToolValidator::new(&tools).validate(&Platform::new(Os::Linux, false));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("linux"));
    }

    #[test]
    fn version_on_brew_is_ignored() {
        let mut t = tool("terraform", InstallMethod::Brew);
        t.version = Some("1.9".to_string());
        let warnings = ToolValidator::new(&[t]).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("ignored"));
    }

    #[test]
    fn duplicate_and_empty_markers() {
        let lines = vec![line("brew"), line("brew"), line("")];
        let warnings = ProfileLineValidator::new(&lines).validate(&macos());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.starts_with("duplicate marker"));
        assert!(warnings[1].message.starts_with("marker is empty"));
    }

    #[test]
    fn overlapping_markers() {
        let lines = vec![line("workstation:pyenv-init"), line("workstation:pyenv")];
        let warnings = ProfileLineValidator::new(&lines).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("never be appended"));
    }

    #[test]
    fn clean_infra_has_no_warnings() {
        assert!(InfraValidator::new(&infra()).validate(&macos()).is_empty());
    }

    #[test]
    fn derived_inputs_in_any_layer_warn() {
        let mut infra = infra();
        infra
            .environments
            .get_mut("dev")
            .unwrap()
            .inputs
            .insert("environment".to_string(), json!("prod"));
        infra
            .modules
            .get_mut("ecr")
            .unwrap()
            .inputs
            .insert("project_name".to_string(), json!("other"));

        let warnings = InfraValidator::new(&infra).validate(&macos());
        let items: Vec<(&str, &str)> = warnings
            .iter()
            .map(|w| (w.item.as_str(), w.message.as_str()))
            .collect();
        assert_eq!(
            items,
            vec![
                ("dev", "input 'environment' is derived and will be ignored"),
                ("ecr", "input 'project_name' is derived and will be ignored"),
            ]
        );
    }

    #[test]
    fn empty_infra_is_not_validated() {
        let empty = InfraConfig::default();
        assert!(InfraValidator::new(&empty).validate(&macos()).is_empty());
    }

    #[test]
    fn invalid_project_name() {
        let mut cfg = infra();
        cfg.project_name = "My_Project".to_string();
        let warnings = InfraValidator::new(&cfg).validate(&macos());
        assert!(
            warnings
                .iter()
                .any(|w| w.item == "project_name" && w.message.contains("My_Project"))
        );
    }

    #[test]
    fn unknown_module_kind() {
        let mut cfg = infra();
        cfg.modules
            .insert("lambda".to_string(), ModuleConfig::default());
        let warnings = InfraValidator::new(&cfg).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.starts_with("unknown module"));
    }

    #[test]
    fn missing_required_input_per_environment() {
        let mut cfg = infra();
        cfg.modules.insert(
            "sagemaker".to_string(),
            ModuleConfig {
                suffixes: vec!["notebook".to_string()],
                ..ModuleConfig::default()
            },
        );
        cfg.environments
            .get_mut("prod")
            .unwrap()
            .inputs
            .insert("instance_type".to_string(), json!("ml.m5.xlarge"));
        let warnings = InfraValidator::new(&cfg).validate(&macos());
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert_eq!(warnings[0].item, "dev/sagemaker");
    }

    #[test]
    fn duplicate_resource_names() {
        let mut cfg = infra();
        cfg.modules.insert(
            "iam".to_string(),
            ModuleConfig {
                suffixes: vec!["images".to_string()],
                ..ModuleConfig::default()
            },
        );
        let warnings = InfraValidator::new(&cfg).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("ml-dev-images"));
    }

    #[test]
    fn override_for_undeclared_environment() {
        let mut cfg = infra();
        cfg.modules
            .get_mut("ecr")
            .unwrap()
            .environments
            .insert("qa".to_string(), Default::default());
        let warnings = InfraValidator::new(&cfg).validate(&macos());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("'qa'"));
    }
}
