//! AWS-related environment variables consumed by the infra commands.
//!
//! Reads go through [`EnvSource`] so tests never touch the process
//! environment.

/// Source of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` if unset or empty.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

/// Snapshot of the AWS/Terraform variables at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsEnv {
    /// `AWS_PROFILE`.
    pub profile: Option<String>,
    /// `AWS_REGION`.
    pub region: Option<String>,
    /// `AWS_DEFAULT_REGION`.
    pub default_region: Option<String>,
    /// `AWS_ACCOUNT_ID`, used in backend templates.
    pub account_id: Option<String>,
    /// `TF_LOG`.
    pub tf_log: Option<String>,
}

impl AwsEnv {
    /// Read every variable from `source`.
    #[must_use]
    pub fn from_source(source: &dyn EnvSource) -> Self {
        Self {
            profile: source.var("AWS_PROFILE"),
            region: source.var("AWS_REGION"),
            default_region: source.var("AWS_DEFAULT_REGION"),
            account_id: source.var("AWS_ACCOUNT_ID"),
            tf_log: source.var("TF_LOG"),
        }
    }

    /// Region from the environment: `AWS_REGION`, then `AWS_DEFAULT_REGION`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().or(self.default_region.as_deref())
    }

    /// Variables forwarded explicitly to Terragrunt.
    #[must_use]
    pub fn passthrough(&self) -> Vec<(&'static str, &str)> {
        [("AWS_PROFILE", &self.profile), ("TF_LOG", &self.tf_log)]
            .into_iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn mock_with(vars: &[(&str, &str)]) -> MockEnvSource {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut mock = MockEnvSource::new();
        mock.expect_var()
            .returning(move |key| vars.get(key).cloned());
        mock
    }

    #[test]
    fn reads_every_variable() {
        let env = AwsEnv::from_source(&mock_with(&[
            ("AWS_PROFILE", "ml-dev"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
            ("AWS_ACCOUNT_ID", "123456789012"),
            ("TF_LOG", "DEBUG"),
        ]));
        assert_eq!(env.profile.as_deref(), Some("ml-dev"));
        assert_eq!(env.account_id.as_deref(), Some("123456789012"));
        assert_eq!(env.tf_log.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn aws_region_wins_over_default_region() {
        let env = AwsEnv::from_source(&mock_with(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
        ]));
        assert_eq!(env.region(), Some("eu-west-1"));
    }

    #[test]
    fn default_region_is_fallback() {
        let env = AwsEnv::from_source(&mock_with(&[("AWS_DEFAULT_REGION", "us-east-1")]));
        assert_eq!(env.region(), Some("us-east-1"));
    }

    #[test]
    fn nothing_set() {
        let env = AwsEnv::from_source(&mock_with(&[]));
        assert_eq!(env, AwsEnv::default());
        assert_eq!(env.region(), None);
        assert!(env.passthrough().is_empty());
    }

    #[test]
    fn passthrough_only_set_variables() {
        let env = AwsEnv::from_source(&mock_with(&[("TF_LOG", "TRACE")]));
        assert_eq!(env.passthrough(), vec![("TF_LOG", "TRACE")]);
    }

    #[test]
    fn system_env_ignores_unset() {
        assert_eq!(SystemEnv.var("WORKSTATION_TEST_SURELY_UNSET_VAR"), None);
    }
}
