//! Fixed input and output schemas of the Terraform modules.
use std::fmt;

use super::ModuleInputs;

/// A module the composer knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// S3 state bucket and DynamoDB lock table.
    Backend,
    /// Execution roles.
    Iam,
    /// Network for notebooks and endpoints.
    Vpc,
    /// Container image repository.
    Ecr,
    /// Notebook instance and artifact bucket.
    Sagemaker,
    /// Model invocation role and logging.
    Bedrock,
}

impl ModuleKind {
    /// Every known module, in dependency order.
    pub const ALL: [Self; 6] = [
        Self::Backend,
        Self::Iam,
        Self::Vpc,
        Self::Ecr,
        Self::Sagemaker,
        Self::Bedrock,
    ];

    /// Parse a module name from `infra.toml`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Module directory name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Iam => "iam",
            Self::Vpc => "vpc",
            Self::Ecr => "ecr",
            Self::Sagemaker => "sagemaker",
            Self::Bedrock => "bedrock",
        }
    }

    /// Inputs that must be set beyond the root defaults.
    #[must_use]
    pub const fn required_inputs(self) -> &'static [&'static str] {
        match self {
            Self::Backend | Self::Iam | Self::Ecr => &[],
            Self::Vpc => &["cidr_block"],
            Self::Sagemaker => &["instance_type"],
            Self::Bedrock => &["model_id"],
        }
    }

    /// Outputs every apply must produce with a non-empty value.
    #[must_use]
    pub const fn outputs(self) -> &'static [&'static str] {
        match self {
            Self::Backend => &["bucket_name", "lock_table_name"],
            Self::Iam => &["execution_role_arn", "execution_role_name"],
            Self::Vpc => &["vpc_id", "private_subnet_ids"],
            Self::Ecr => &["repository_url", "repository_arn"],
            Self::Sagemaker => &["notebook_instance_arn", "notebook_url", "bucket_name"],
            Self::Bedrock => &["invocation_role_arn", "log_group_name"],
        }
    }

    /// Required inputs absent from `inputs`.
    #[must_use]
    pub fn missing_inputs(self, inputs: &ModuleInputs) -> Vec<&'static str> {
        self.required_inputs()
            .iter()
            .copied()
            .filter(|key| inputs.get(*key).is_none_or(serde_json::Value::is_null))
            .collect()
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_round_trip() {
        for kind in ModuleKind::ALL {
            assert_eq!(ModuleKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ModuleKind::from_name("lambda"), None);
    }

    #[test]
    fn every_module_declares_outputs() {
        for kind in ModuleKind::ALL {
            assert!(!kind.outputs().is_empty(), "{kind} has no outputs");
        }
    }

    #[test]
    fn missing_inputs_treats_null_as_unset() {
        let mut inputs = ModuleInputs::new();
        assert_eq!(ModuleKind::Sagemaker.missing_inputs(&inputs), vec!["instance_type"]);
        inputs.insert("instance_type".to_string(), json!(null));
        assert_eq!(ModuleKind::Sagemaker.missing_inputs(&inputs), vec!["instance_type"]);
        inputs.insert("instance_type".to_string(), json!("ml.t3.medium"));
        assert!(ModuleKind::Sagemaker.missing_inputs(&inputs).is_empty());
        assert!(ModuleKind::Iam.missing_inputs(&ModuleInputs::new()).is_empty());
    }
}
