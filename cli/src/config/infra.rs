//! Infrastructure composition config (`conf/infra.toml`).
//!
//! The file has a root layer (project, region, tags, backend), a set of
//! `[modules.<name>]` tables and a set of `[environments.<name>]` tables.
//! Maps are ordered so every derived artefact is deterministic.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::category_matcher::matches;
use super::toml_loader;
use crate::error::ConfigError;
use crate::infra::ModuleInputs;

/// Root of `infra.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfraConfig {
    /// First component of every resource name.
    pub project_name: String,
    /// Default AWS region.
    pub region: String,
    /// Tags applied to every module in every environment.
    pub tags: BTreeMap<String, String>,
    /// Remote state backend settings.
    pub backend: BackendConfig,
    /// Modules keyed by name (`bedrock`, `sagemaker`, ...).
    pub modules: BTreeMap<String, ModuleConfig>,
    /// Environments keyed by name (`dev`, `prod`).
    pub environments: BTreeMap<String, Environment>,
    /// Terraform module sources, relative to the repository root.
    /// Defaults to `infra/modules`.
    pub modules_dir: Option<PathBuf>,
}

impl InfraConfig {
    /// Returns `true` when no modules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up an environment by name.
    #[must_use]
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }
}

/// S3 + DynamoDB backend settings.
///
/// `bucket`, `lock_table` and `key` are templates. `{project_name}`,
/// `{environment}`, `{module}` and `{region}` are always available; `{account_id}`
/// requires `AWS_ACCOUNT_ID`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// State bucket name template.
    pub bucket: String,
    /// Lock table name template.
    pub lock_table: String,
    /// State object key template.
    pub key: String,
    /// Enable server-side encryption of state.
    pub encrypt: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bucket: "{project_name}-tfstate-{account_id}".to_string(),
            lock_table: "{project_name}-tf-locks".to_string(),
            key: "{environment}/{module}/terraform.tfstate".to_string(),
            encrypt: true,
        }
    }
}

/// One module and its input layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Name suffixes of the physical resources this module creates.
    pub suffixes: Vec<String>,
    /// Module defaults, overriding environment inputs.
    pub inputs: ModuleInputs,
    /// Per-environment overrides of `inputs`.
    pub environments: BTreeMap<String, ModuleOverride>,
    /// Categories that must all be active for the module to be composed.
    pub categories: Vec<String>,
}

impl ModuleConfig {
    /// Per-environment inputs for `env`, if any.
    #[must_use]
    pub fn override_for(&self, env: &str) -> Option<&ModuleInputs> {
        self.environments.get(env).map(|o| &o.inputs)
    }
}

/// Module inputs specific to one environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleOverride {
    /// Highest-precedence inputs.
    pub inputs: ModuleInputs,
}

/// An environment binding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Environment name; filled in from the table key.
    #[serde(skip)]
    pub name: String,
    /// Region override for this environment.
    pub region: Option<String>,
    /// Inputs shared by every module in this environment.
    pub inputs: ModuleInputs,
    /// Tags added on top of the root tags.
    pub tags: BTreeMap<String, String>,
}

/// Load infra.toml, dropping modules whose categories are not all active.
///
/// A missing file yields an empty config.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path, active_categories: &[String]) -> Result<InfraConfig, ConfigError> {
    let mut infra: InfraConfig = toml_loader::load_config(path)?;
    for (name, env) in &mut infra.environments {
        env.name.clone_from(name);
    }
    infra
        .modules
        .retain(|_, module| matches(&module.categories, active_categories));
    Ok(infra)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::test_helpers::write_temp_toml;
    use serde_json::json;

    const SAMPLE: &str = r#"
project_name = "mlplay"
region = "us-east-1"
modules_dir = "terraform/modules"

[tags]
owner = "platform"

[backend]
bucket = "{project_name}-state"

[modules.sagemaker]
suffixes = ["notebook", "artifacts"]
inputs = { instance_type = "ml.t3.medium" }

[modules.sagemaker.environments.prod]
inputs = { instance_type = "ml.m5.xlarge" }

[modules.bedrock]
suffixes = ["invocation-logs"]
categories = ["full"]
inputs = { model_id = "anthropic.claude-3-haiku" }

[environments.dev]
inputs = { log_retention_days = 7 }

[environments.prod]
region = "us-west-2"
tags = { cost_center = "ml" }
"#;

    #[test]
    fn parse_full_file() {
        let (_dir, path) = write_temp_toml(SAMPLE);
        let infra = load(&path, &["base".to_string(), "full".to_string()]).unwrap();
        assert_eq!(infra.project_name, "mlplay");
        assert_eq!(infra.modules_dir, Some(PathBuf::from("terraform/modules")));
        assert_eq!(infra.tags["owner"], "platform");
        assert_eq!(infra.backend.bucket, "{project_name}-state");
        assert_eq!(infra.backend.lock_table, "{project_name}-tf-locks");
        assert!(infra.backend.encrypt);
        assert_eq!(infra.modules.len(), 2);
        assert_eq!(
            infra.modules["sagemaker"].override_for("prod").unwrap()["instance_type"],
            json!("ml.m5.xlarge")
        );
        assert_eq!(infra.environments["prod"].region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn environment_names_come_from_keys() {
        let (_dir, path) = write_temp_toml(SAMPLE);
        let infra = load(&path, &["base".to_string()]).unwrap();
        assert_eq!(infra.environment("dev").unwrap().name, "dev");
        assert_eq!(infra.environment("prod").unwrap().name, "prod");
        assert!(infra.environment("qa").is_none());
    }

    #[test]
    fn modules_filtered_by_category() {
        let (_dir, path) = write_temp_toml(SAMPLE);
        let infra = load(&path, &["base".to_string()]).unwrap();
        assert!(infra.modules.contains_key("sagemaker"));
        assert!(!infra.modules.contains_key("bedrock"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let infra = load(&dir.path().join("infra.toml"), &[]).unwrap();
        assert!(infra.is_empty());
        assert!(infra.modules_dir.is_none());
        assert_eq!(infra.backend, BackendConfig::default());
    }
}
