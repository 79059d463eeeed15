//! Hierarchical input binding: root, environment, module, module-per-env.
use serde_json::{Value, json};
use std::collections::BTreeMap;

use super::ModuleInputs;
use crate::aws::AwsEnv;
use crate::config::infra::InfraConfig;
use crate::error::InfraError;

/// Key whose object values are merged key by key instead of replaced.
const TAGS_KEY: &str = "tags";

/// Inputs derived from the root config that no layer may override.
pub const DERIVED_KEYS: [&str; 3] = ["project_name", "environment", "name_prefix"];

fn merge_layer(into: &mut ModuleInputs, layer: &ModuleInputs) {
    for (key, value) in layer {
        if key == TAGS_KEY
            && let (Some(Value::Object(existing)), Value::Object(extra)) =
                (into.get_mut(key), value)
        {
            existing.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
            continue;
        }
        into.insert(key.clone(), value.clone());
    }
}

fn tags_value(tags: &BTreeMap<String, String>) -> Value {
    Value::Object(
        tags.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

/// Resolve the inputs of `module` in `env` from the config alone.
///
/// Layers, each overriding the previous one:
/// 1. root defaults: `project_name`, `environment`, `region`, root `tags`
///    plus the environment's `tags`
/// 2. the environment's `inputs`
/// 3. the module's `inputs`
/// 4. the module's `inputs` for this environment
///
/// `tags` objects are merged key by key. The [`DERIVED_KEYS`] are pinned
/// after the merge: `project_name` and `environment` always match the
/// backend key and the resource names, and `name_prefix` is always
/// `{project_name}-{environment}`.
///
/// # Errors
///
/// Returns an error if the environment or module is not declared.
pub fn resolve(infra: &InfraConfig, env: &str, module: &str) -> Result<ModuleInputs, InfraError> {
    let env_cfg = infra
        .environment(env)
        .ok_or_else(|| InfraError::UnknownEnvironment(env.to_string()))?;
    let module_cfg = infra
        .modules
        .get(module)
        .ok_or_else(|| InfraError::UnknownModule(module.to_string()))?;

    let mut tags = infra.tags.clone();
    tags.extend(env_cfg.tags.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut inputs = ModuleInputs::from([
        ("project_name".to_string(), json!(infra.project_name)),
        ("environment".to_string(), json!(env)),
        (
            "region".to_string(),
            json!(env_cfg.region.as_deref().unwrap_or(&infra.region)),
        ),
        (TAGS_KEY.to_string(), tags_value(&tags)),
    ]);

    merge_layer(&mut inputs, &env_cfg.inputs);
    merge_layer(&mut inputs, &module_cfg.inputs);
    if let Some(overrides) = module_cfg.override_for(env) {
        merge_layer(&mut inputs, overrides);
    }

    inputs.insert("project_name".to_string(), json!(infra.project_name));
    inputs.insert("environment".to_string(), json!(env));
    inputs.insert(
        "name_prefix".to_string(),
        json!(format!("{}-{env}", infra.project_name)),
    );
    Ok(inputs)
}

/// Effective region of `env`: environment variables first, then config.
#[must_use]
pub fn effective_region<'a>(infra: &'a InfraConfig, env: &str, aws: &'a AwsEnv) -> &'a str {
    aws.region().unwrap_or_else(|| {
        infra
            .environment(env)
            .and_then(|e| e.region.as_deref())
            .unwrap_or(&infra.region)
    })
}

/// [`resolve`], then apply the region from the environment variables.
///
/// # Errors
///
/// Returns an error if the environment or module is not declared.
pub fn resolve_for(
    infra: &InfraConfig,
    env: &str,
    module: &str,
    aws: &AwsEnv,
) -> Result<ModuleInputs, InfraError> {
    let mut inputs = resolve(infra, env, module)?;
    if let Some(region) = aws.region() {
        inputs.insert("region".to_string(), json!(region));
    }
    Ok(inputs)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::infra::{Environment, ModuleConfig, ModuleOverride};

    fn map(pairs: &[(&str, Value)]) -> ModuleInputs {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn sample() -> InfraConfig {
        let mut infra = InfraConfig {
            project_name: "ml".to_string(),
            region: "us-east-1".to_string(),
            tags: BTreeMap::from([
                ("owner".to_string(), "platform".to_string()),
                ("tier".to_string(), "root".to_string()),
            ]),
            ..InfraConfig::default()
        };
        infra.environments.insert(
            "dev".to_string(),
            Environment {
                name: "dev".to_string(),
                inputs: map(&[
                    ("log_retention_days", json!(7)),
                    ("instance_type", json!("ml.t3.small")),
                ]),
                ..Environment::default()
            },
        );
        infra.environments.insert(
            "prod".to_string(),
            Environment {
                name: "prod".to_string(),
                region: Some("us-west-2".to_string()),
                tags: BTreeMap::from([("tier".to_string(), "prod".to_string())]),
                inputs: map(&[("log_retention_days", json!(90))]),
            },
        );
        infra.modules.insert(
            "sagemaker".to_string(),
            ModuleConfig {
                suffixes: vec!["notebook".to_string()],
                inputs: map(&[
                    ("instance_type", json!("ml.t3.medium")),
                    ("tags", json!({"component": "notebook"})),
                ]),
                environments: BTreeMap::from([(
                    "prod".to_string(),
                    ModuleOverride {
                        inputs: map(&[
                            ("instance_type", json!("ml.m5.xlarge")),
                            ("name_prefix", json!("hijack")),
                        ]),
                    },
                )]),
                categories: vec![],
            },
        );
        infra
    }

    #[test]
    fn root_defaults_present() {
        let inputs = resolve(&sample(), "dev", "sagemaker").unwrap();
        assert_eq!(inputs["project_name"], json!("ml"));
        assert_eq!(inputs["environment"], json!("dev"));
        assert_eq!(inputs["region"], json!("us-east-1"));
        assert_eq!(inputs["name_prefix"], json!("ml-dev"));
    }

    #[test]
    fn module_overrides_environment() {
        let inputs = resolve(&sample(), "dev", "sagemaker").unwrap();
        assert_eq!(inputs["instance_type"], json!("ml.t3.medium"));
        assert_eq!(inputs["log_retention_days"], json!(7));
    }

    #[test]
    fn module_env_override_wins() {
        let inputs = resolve(&sample(), "prod", "sagemaker").unwrap();
        assert_eq!(inputs["instance_type"], json!("ml.m5.xlarge"));
        assert_eq!(inputs["log_retention_days"], json!(90));
        assert_eq!(inputs["region"], json!("us-west-2"));
    }

    #[test]
    fn name_prefix_cannot_be_overridden() {
        let inputs = resolve(&sample(), "prod", "sagemaker").unwrap();
        assert_eq!(inputs["name_prefix"], json!("ml-prod"));
    }

    #[test]
    fn project_and_environment_are_pinned() {
        let mut infra = sample();
        infra.environments.get_mut("dev").unwrap().inputs =
            map(&[("environment", json!("prod"))]);
        infra
            .modules
            .get_mut("sagemaker")
            .unwrap()
            .inputs
            .insert("project_name".to_string(), json!("other"));

        let inputs = resolve(&infra, "dev", "sagemaker").unwrap();
        assert_eq!(inputs["environment"], json!("dev"));
        assert_eq!(inputs["project_name"], json!("ml"));
        assert_eq!(inputs["name_prefix"], json!("ml-dev"));
    }

    #[test]
    fn tags_merge_key_by_key() {
        let inputs = resolve(&sample(), "prod", "sagemaker").unwrap();
        assert_eq!(
            inputs["tags"],
            json!({"owner": "platform", "tier": "prod", "component": "notebook"})
        );
    }

    #[test]
    fn unknown_environment_and_module() {
        assert_eq!(
            resolve(&sample(), "qa", "sagemaker").unwrap_err(),
            InfraError::UnknownEnvironment("qa".to_string())
        );
        assert_eq!(
            resolve(&sample(), "dev", "lambda").unwrap_err(),
            InfraError::UnknownModule("lambda".to_string())
        );
    }

    #[test]
    fn environment_variables_override_region() {
        let aws = AwsEnv {
            default_region: Some("eu-central-1".to_string()),
            ..AwsEnv::default()
        };
        let infra = sample();
        let inputs = resolve_for(&infra, "prod", "sagemaker", &aws).unwrap();
        assert_eq!(inputs["region"], json!("eu-central-1"));
        assert_eq!(effective_region(&infra, "prod", &aws), "eu-central-1");
        assert_eq!(
            effective_region(&infra, "prod", &AwsEnv::default()),
            "us-west-2"
        );
        assert_eq!(effective_region(&infra, "dev", &AwsEnv::default()), "us-east-1");
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(&sample(), "prod", "sagemaker").unwrap();
        let b = resolve(&sample(), "prod", "sagemaker").unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
