//! Physical resource naming: `{project}-{environment}-{suffix}`.
use std::collections::HashMap;

use crate::config::infra::InfraConfig;
use crate::error::InfraError;

/// Check one name component: non-empty, lowercase ASCII letters, digits and `-`.
///
/// # Errors
///
/// Returns [`InfraError::InvalidNamePart`] naming `field` if the value is invalid.
pub fn validate_part(field: &'static str, value: &str) -> Result<(), InfraError> {
    let valid = !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(InfraError::InvalidNamePart {
            field,
            value: value.to_string(),
        })
    }
}

/// Prefix shared by every resource of one environment.
///
/// # Errors
///
/// Returns an error if either component is invalid.
pub fn name_prefix(project: &str, env: &str) -> Result<String, InfraError> {
    validate_part("project_name", project)?;
    validate_part("environment", env)?;
    Ok(format!("{project}-{env}"))
}

/// Physical name of one resource.
///
/// # Examples
///
/// ```
/// use workstation_cli::infra::naming::resource_name;
///
/// assert_eq!(resource_name("ml", "dev", "artifacts").unwrap(), "ml-dev-artifacts");
/// assert!(resource_name("ml", "Dev", "artifacts").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if any component is invalid.
pub fn resource_name(project: &str, env: &str, suffix: &str) -> Result<String, InfraError> {
    validate_part("suffix", suffix)?;
    Ok(format!("{}-{suffix}", name_prefix(project, env)?))
}

/// A derived name and the module that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// The physical name.
    pub name: String,
    /// Environment it belongs to.
    pub environment: String,
    /// Module that creates it.
    pub module: String,
}

impl DerivedName {
    fn producer(&self) -> String {
        format!("{}/{}", self.environment, self.module)
    }
}

/// Every name derived for every environment and module, environments first.
///
/// # Errors
///
/// Returns an error on the first invalid component.
pub fn all_names(infra: &InfraConfig) -> Result<Vec<DerivedName>, InfraError> {
    let mut names = Vec::new();
    for env in infra.environments.keys() {
        for (module, cfg) in &infra.modules {
            for suffix in &cfg.suffixes {
                names.push(DerivedName {
                    name: resource_name(&infra.project_name, env, suffix)?,
                    environment: env.clone(),
                    module: module.clone(),
                });
            }
        }
    }
    Ok(names)
}

/// Derive every name and fail on the first collision.
///
/// # Errors
///
/// Returns [`InfraError::DuplicateName`] for a collision, or an invalid-name
/// error from [`all_names`].
pub fn check_unique(infra: &InfraConfig) -> Result<Vec<DerivedName>, InfraError> {
    let names = all_names(infra)?;
    let mut seen: HashMap<&str, &DerivedName> = HashMap::new();
    for derived in &names {
        if let Some(first) = seen.insert(&derived.name, derived) {
            return Err(InfraError::DuplicateName {
                name: derived.name.clone(),
                first: first.producer(),
                second: derived.producer(),
            });
        }
    }
    Ok(names)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::infra::{Environment, ModuleConfig};

    fn infra(modules: &[(&str, &[&str])]) -> InfraConfig {
        let mut infra = InfraConfig {
            project_name: "ml".to_string(),
            region: "us-east-1".to_string(),
            ..InfraConfig::default()
        };
        for env in ["dev", "prod"] {
            infra
                .environments
                .insert(env.to_string(), Environment::default());
        }
        for (name, suffixes) in modules {
            infra.modules.insert(
                (*name).to_string(),
                ModuleConfig {
                    suffixes: suffixes.iter().map(|s| (*s).to_string()).collect(),
                    ..ModuleConfig::default()
                },
            );
        }
        infra
    }

    #[test]
    fn valid_parts() {
        assert!(validate_part("suffix", "notebook-01").is_ok());
        assert!(validate_part("suffix", "a").is_ok());
    }

    #[test]
    fn invalid_parts() {
        for bad in ["", "Dev", "my_bucket", "ml.dev", "ümlaut", "a b"] {
            let err = validate_part("environment", bad).unwrap_err();
            assert_eq!(
                err,
                InfraError::InvalidNamePart {
                    field: "environment",
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn resource_name_format() {
        assert_eq!(
            resource_name("mlplay", "prod", "invocation-logs").unwrap(),
            "mlplay-prod-invocation-logs"
        );
    }

    #[test]
    fn resource_name_reports_the_bad_field() {
        let err = resource_name("ml", "dev", "").unwrap_err();
        assert!(matches!(err, InfraError::InvalidNamePart { field: "suffix", .. }));
        let err = resource_name("ML", "dev", "x").unwrap_err();
        assert!(matches!(err, InfraError::InvalidNamePart { field: "project_name", .. }));
    }

    #[test]
    fn names_unique_across_dev_and_prod() {
        let cfg = infra(&[
            ("sagemaker", &["notebook", "artifacts"]),
            ("ecr", &["images"]),
        ]);
        let names = check_unique(&cfg).unwrap();
        let list: Vec<&str> = names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            list,
            vec![
                "ml-dev-images",
                "ml-dev-notebook",
                "ml-dev-artifacts",
                "ml-prod-images",
                "ml-prod-notebook",
                "ml-prod-artifacts",
            ]
        );
    }

    #[test]
    fn collision_between_modules() {
        let cfg = infra(&[("ecr", &["shared"]), ("iam", &["shared"])]);
        let err = check_unique(&cfg).unwrap_err();
        assert_eq!(
            err,
            InfraError::DuplicateName {
                name: "ml-dev-shared".to_string(),
                first: "dev/ecr".to_string(),
                second: "dev/iam".to_string(),
            }
        );
    }

    #[test]
    fn collision_from_dashes_across_environments() {
        // "ml" + "a-b" + "c" == "ml" + "a" + "b-c"
        let mut cfg = infra(&[("ecr", &["c"]), ("iam", &["b-c"])]);
        cfg.environments.clear();
        cfg.environments.insert("a".to_string(), Environment::default());
        cfg.environments.insert("a-b".to_string(), Environment::default());
        let err = check_unique(&cfg).unwrap_err();
        assert!(matches!(err, InfraError::DuplicateName { ref name, .. } if name == "ml-a-b-c"));
    }
}
