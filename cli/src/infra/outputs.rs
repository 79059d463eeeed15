//! Checks on `terraform output -json` after apply.
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::InfraError;

/// One entry of `terraform output -json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputValue {
    /// The output's value.
    #[serde(default)]
    pub value: Value,
    /// Whether Terraform marks the output sensitive.
    #[serde(default)]
    pub sensitive: bool,
}

/// Parsed outputs keyed by name.
pub type Outputs = BTreeMap<String, OutputValue>;

/// Parse the JSON printed by `terraform output -json`.
///
/// # Errors
///
/// Returns [`InfraError::OutputParse`] if the text is not an object of
/// output entries.
pub fn parse(json: &str) -> Result<Outputs, InfraError> {
    serde_json::from_str(json).map_err(|e| InfraError::OutputParse(e.to_string()))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Fail on the first expected output that is missing, null or empty.
///
/// # Errors
///
/// Returns [`InfraError::MissingOutput`] or [`InfraError::EmptyOutput`].
pub fn check_non_empty(
    module: &str,
    outputs: &Outputs,
    expected: &[&str],
) -> Result<(), InfraError> {
    for name in expected {
        let output = outputs.get(*name).ok_or_else(|| InfraError::MissingOutput {
            module: module.to_string(),
            output: (*name).to_string(),
        })?;
        if is_empty(&output.value) {
            return Err(InfraError::EmptyOutput {
                module: module.to_string(),
                output: (*name).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    const APPLIED: &str = r#"{
  "bucket_name": {"sensitive": false, "type": "string", "value": "ml-dev-artifacts"},
  "notebook_instance_arn": {"sensitive": false, "type": "string", "value": "arn:aws:sagemaker:us-east-1:123456789012:notebook-instance/ml-dev-notebook"},
  "notebook_url": {"sensitive": true, "type": "string", "value": "ml-dev-notebook.notebook.us-east-1.sagemaker.aws"},
  "subnets": {"sensitive": false, "type": ["list", "string"], "value": []},
  "pending": {"sensitive": false, "type": "string", "value": null}
}"#;

    #[test]
    fn parse_terraform_json() {
        let outputs = parse(APPLIED).unwrap();
        assert_eq!(outputs.len(), 5);
        assert_eq!(outputs["bucket_name"].value, json!("ml-dev-artifacts"));
        assert!(outputs["notebook_url"].sensitive);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse("not json"), Err(InfraError::OutputParse(_))));
        assert!(matches!(parse("[1, 2]"), Err(InfraError::OutputParse(_))));
    }

    #[test]
    fn all_present_and_non_empty() {
        let outputs = parse(APPLIED).unwrap();
        check_non_empty(
            "sagemaker",
            &outputs,
            &["notebook_instance_arn", "notebook_url", "bucket_name"],
        )
        .unwrap();
    }

    #[test]
    fn missing_output() {
        let outputs = parse(APPLIED).unwrap();
        assert_eq!(
            check_non_empty("ecr", &outputs, &["repository_url"]).unwrap_err(),
            InfraError::MissingOutput {
                module: "ecr".to_string(),
                output: "repository_url".to_string()
            }
        );
    }

    #[test]
    fn null_and_empty_list_are_empty() {
        let outputs = parse(APPLIED).unwrap();
        for name in ["pending", "subnets"] {
            assert!(matches!(
                check_non_empty("vpc", &outputs, &[name]),
                Err(InfraError::EmptyOutput { .. })
            ));
        }
    }

    #[test]
    fn blank_string_is_empty() {
        let outputs = parse(r#"{"vpc_id": {"value": "  "}}"#).unwrap();
        assert!(check_non_empty("vpc", &outputs, &["vpc_id"]).is_err());
    }

    #[test]
    fn numbers_and_bools_are_values() {
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
    }
}
