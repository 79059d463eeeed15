//! Deterministic generation of per-module Terraform/Terragrunt files.
//!
//! Every module of an environment gets its own directory:
//!
//! ```text
//! <out>/<env>/<module>/backend.tf
//! <out>/<env>/<module>/provider.tf
//! <out>/<env>/<module>/terraform.tfvars.json
//! <out>/<env>/<module>/terragrunt.hcl
//! ```
//!
//! The HCL files come from embedded tera templates. Output depends only on
//! the config, the layout and the AWS environment snapshot, so repeated runs
//! are byte-identical.
use std::collections::{BTreeMap, HashMap};
use std::error::Error as _;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tera::{Tera, Value};

use super::{ModuleInputs, inputs};
use crate::aws::AwsEnv;
use crate::config::infra::InfraConfig;
use crate::error::InfraError;

/// Embedded templates, registered under the name of the file they produce.
const TEMPLATES: [(&str, &str); 3] = [
    ("backend.tf", include_str!("templates/backend.tf.tera")),
    ("provider.tf", include_str!("templates/provider.tf.tera")),
    ("terragrunt.hcl", include_str!("templates/terragrunt.hcl.tera")),
];

/// Default module source directory, relative to the repository root.
pub const DEFAULT_MODULES_DIR: &str = "infra/modules";

/// Where generated files go and where module sources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root of the generated tree.
    pub out_dir: PathBuf,
    /// Directory holding one Terraform module per subdirectory.
    pub modules_dir: PathBuf,
}

impl Layout {
    /// Default layout under a repository root: `infra/live` and `infra/modules`.
    #[must_use]
    pub fn for_root(root: &Path) -> Self {
        Self {
            out_dir: root.join("infra").join("live"),
            modules_dir: root.join(DEFAULT_MODULES_DIR),
        }
    }

    /// Layout under `root`, honouring `modules_dir` from `infra.toml`.
    ///
    /// A relative `modules_dir` is resolved against `root`.
    #[must_use]
    pub fn for_config(root: &Path, infra: &InfraConfig) -> Self {
        let mut layout = Self::for_root(root);
        if let Some(dir) = &infra.modules_dir {
            layout.modules_dir = root.join(dir);
        }
        layout
    }

    /// Generated directory of one module.
    #[must_use]
    pub fn module_dir(&self, env: &str, module: &str) -> PathBuf {
        self.out_dir.join(env).join(module)
    }

    /// Terraform source directory of one module.
    #[must_use]
    pub fn module_source(&self, module: &str) -> PathBuf {
        self.modules_dir.join(module)
    }
}

/// A file to write and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination path.
    pub path: PathBuf,
    /// Complete file content.
    pub content: String,
}

/// Quote a string as an HCL literal.
fn hcl_string(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace("${", "$${")
        .replace("%{", "%%{");
    format!("\"{escaped}\"")
}

/// A scalar as an HCL literal: strings quoted, booleans and numbers bare.
fn hcl_literal(value: &Value) -> tera::Result<String> {
    match value {
        Value::String(s) => Ok(hcl_string(s)),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        other => Err(tera::Error::msg(format!("not an HCL scalar: {other}"))),
    }
}

/// `{{ value | hcl }}`
fn hcl_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    hcl_literal(value).map(Value::String)
}

/// `{{ map | to_hcl_map(indent=N) }}`: one `"key" = value` line per entry,
/// keys sorted and `=` signs aligned as `terraform fmt` does. No trailing
/// newline.
fn to_hcl_map_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let map = value
        .as_object()
        .ok_or_else(|| tera::Error::msg("to_hcl_map expects a map"))?;
    let indent = args
        .get("indent")
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(2);
    let sorted: BTreeMap<String, &Value> = map.iter().map(|(k, v)| (hcl_string(k), v)).collect();
    let width = sorted.keys().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (key, value) in sorted {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{:indent$}{key:<width$} = {}", "", hcl_literal(value)?);
    }
    Ok(Value::String(out))
}

fn render_error(file: String, err: &tera::Error) -> InfraError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(message, ": {cause}");
        source = cause.source();
    }
    InfraError::Render { file, message }
}

/// Expand `{name}` placeholders of a backend template.
fn expand(
    template: &str,
    infra: &InfraConfig,
    env: &str,
    module: &str,
    aws: &AwsEnv,
) -> Result<String, InfraError> {
    let mut out = template
        .replace("{project_name}", &infra.project_name)
        .replace("{environment}", env)
        .replace("{module}", module)
        .replace("{region}", &infra.region);
    if out.contains("{account_id}") {
        let account = aws.account_id.as_deref().ok_or(InfraError::MissingAccountId)?;
        out = out.replace("{account_id}", account);
    }
    Ok(out)
}

/// Renders the HCL files of a module from the embedded templates.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Register the filters and load every template.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Render`] if a template does not parse.
    pub fn new() -> Result<Self, InfraError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.register_filter("hcl", hcl_filter);
        tera.register_filter("to_hcl_map", to_hcl_map_filter);
        for (name, source) in TEMPLATES {
            tera.add_raw_template(name, source)
                .map_err(|e| render_error(name.to_string(), &e))?;
        }
        Ok(Self { tera })
    }

    /// Render `template`, ending the output with exactly one newline.
    fn render(
        &self,
        template: &str,
        file: String,
        ctx: &tera::Context,
    ) -> Result<String, InfraError> {
        let mut out = self
            .tera
            .render(template, ctx)
            .map_err(|e| render_error(file, &e))?;
        out.truncate(out.trim_end_matches('\n').len());
        out.push('\n');
        Ok(out)
    }

    /// `backend.tf` for one module.
    ///
    /// The state bucket lives in the root region regardless of overrides.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::MissingAccountId`] if a template needs
    /// `{account_id}` and `AWS_ACCOUNT_ID` is unset.
    pub fn backend_tf(
        &self,
        infra: &InfraConfig,
        env: &str,
        module: &str,
        aws: &AwsEnv,
    ) -> Result<String, InfraError> {
        let b = &infra.backend;
        let mut ctx = tera::Context::new();
        ctx.insert("bucket", &expand(&b.bucket, infra, env, module, aws)?);
        ctx.insert("key", &expand(&b.key, infra, env, module, aws)?);
        ctx.insert("region", &infra.region);
        ctx.insert("lock_table", &expand(&b.lock_table, infra, env, module, aws)?);
        ctx.insert("encrypt", &b.encrypt);
        self.render("backend.tf", format!("{env}/{module}/backend.tf"), &ctx)
    }

    /// `provider.tf` for one environment.
    ///
    /// Default tags are the root tags overlaid with the environment's tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment is not declared.
    pub fn provider_tf(
        &self,
        infra: &InfraConfig,
        env: &str,
        aws: &AwsEnv,
    ) -> Result<String, InfraError> {
        let env_cfg = infra
            .environment(env)
            .ok_or_else(|| InfraError::UnknownEnvironment(env.to_string()))?;
        let mut tags: BTreeMap<&str, &str> = infra
            .tags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        tags.extend(env_cfg.tags.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let mut ctx = tera::Context::new();
        ctx.insert("region", inputs::effective_region(infra, env, aws));
        ctx.insert("tags", &tags);
        self.render("provider.tf", format!("{env}/provider.tf"), &ctx)
    }

    /// `terragrunt.hcl` pointing the module directory at its source.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Render`] if the template fails to render.
    pub fn terragrunt_hcl(&self, layout: &Layout, module: &str) -> Result<String, InfraError> {
        let mut ctx = tera::Context::new();
        ctx.insert("source", &layout.module_source(module).display().to_string());
        self.render("terragrunt.hcl", format!("{module}/terragrunt.hcl"), &ctx)
    }
}

/// Pretty-printed JSON with sorted keys and a trailing newline.
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub fn tfvars_json(inputs: &ModuleInputs) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(inputs)?;
    out.push('\n');
    Ok(out)
}

/// Every file for one environment, modules in name order.
///
/// # Errors
///
/// Returns an error if the environment is unknown or a template cannot be
/// expanded.
pub fn plan(
    infra: &InfraConfig,
    env: &str,
    layout: &Layout,
    aws: &AwsEnv,
) -> Result<Vec<GeneratedFile>, InfraError> {
    let renderer = Renderer::new()?;
    let provider = renderer.provider_tf(infra, env, aws)?;
    let mut files = Vec::with_capacity(infra.modules.len() * 4);

    for module in infra.modules.keys() {
        let dir = layout.module_dir(env, module);
        let vars = inputs::resolve_for(infra, env, module, aws)?;
        let tfvars = tfvars_json(&vars).map_err(|e| InfraError::Render {
            file: format!("{env}/{module}/terraform.tfvars.json"),
            message: e.to_string(),
        })?;

        files.push(GeneratedFile {
            path: dir.join("backend.tf"),
            content: renderer.backend_tf(infra, env, module, aws)?,
        });
        files.push(GeneratedFile {
            path: dir.join("provider.tf"),
            content: provider.clone(),
        });
        files.push(GeneratedFile {
            path: dir.join("terraform.tfvars.json"),
            content: tfvars,
        });
        files.push(GeneratedFile {
            path: dir.join("terragrunt.hcl"),
            content: renderer.terragrunt_hcl(layout, module)?,
        });
    }
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::infra::{Environment, ModuleConfig};
    use serde_json::json;

    fn sample() -> InfraConfig {
        let mut infra = InfraConfig {
            project_name: "ml".to_string(),
            region: "us-east-1".to_string(),
            tags: BTreeMap::from([("owner".to_string(), "platform".to_string())]),
            ..InfraConfig::default()
        };
        infra.backend.bucket = "{project_name}-tfstate-{account_id}".to_string();
        infra.environments.insert(
            "dev".to_string(),
            Environment {
                name: "dev".to_string(),
                ..Environment::default()
            },
        );
        infra.environments.insert(
            "prod".to_string(),
            Environment {
                name: "prod".to_string(),
                region: Some("us-west-2".to_string()),
                tags: BTreeMap::from([("cost-center".to_string(), "ml".to_string())]),
                ..Environment::default()
            },
        );
        infra.modules.insert(
            "ecr".to_string(),
            ModuleConfig {
                suffixes: vec!["images".to_string()],
                ..ModuleConfig::default()
            },
        );
        infra.modules.insert(
            "sagemaker".to_string(),
            ModuleConfig {
                suffixes: vec!["notebook".to_string()],
                inputs: BTreeMap::from([("instance_type".to_string(), json!("ml.t3.medium"))]),
                ..ModuleConfig::default()
            },
        );
        infra
    }

    fn aws() -> AwsEnv {
        AwsEnv {
            account_id: Some("123456789012".to_string()),
            ..AwsEnv::default()
        }
    }

    fn layout() -> Layout {
        Layout::for_root(Path::new("/repo"))
    }

    fn renderer() -> Renderer {
        Renderer::new().unwrap()
    }

    #[test]
    fn backend_tf_content() {
        let tf = renderer().backend_tf(&sample(), "dev", "ecr", &aws()).unwrap();
        assert_eq!(
            tf,
            "# Generated by workstation. Do not edit.\n\
             terraform {\n  backend \"s3\" {\n\
             \x20   bucket         = \"ml-tfstate-123456789012\"\n\
             \x20   key            = \"dev/ecr/terraform.tfstate\"\n\
             \x20   region         = \"us-east-1\"\n\
             \x20   dynamodb_table = \"ml-tf-locks\"\n\
             \x20   encrypt        = true\n\
             \x20 }\n}\n"
        );
    }

    #[test]
    fn backend_needs_account_id() {
        let err = renderer().backend_tf(&sample(), "dev", "ecr", &AwsEnv::default()).unwrap_err();
        assert_eq!(err, InfraError::MissingAccountId);
    }

    #[test]
    fn backend_without_account_placeholder() {
        let mut infra = sample();
        infra.backend.bucket = "{project_name}-state".to_string();
        let tf = renderer().backend_tf(&infra, "prod", "ecr", &AwsEnv::default()).unwrap();
        assert!(tf.contains("\"ml-state\""));
        // state bucket stays in the root region
        assert!(tf.contains("region         = \"us-east-1\""));
    }

    #[test]
    fn provider_tf_merges_tags_and_uses_env_region() {
        let tf = renderer().provider_tf(&sample(), "prod", &AwsEnv::default()).unwrap();
        assert_eq!(
            tf,
            "# Generated by workstation. Do not edit.\n\
             provider \"aws\" {\n\
             \x20 region = \"us-west-2\"\n\
             \n\
             \x20 default_tags {\n\
             \x20   tags = {\n\
             \x20     \"cost-center\" = \"ml\"\n\
             \x20     \"owner\"       = \"platform\"\n\
             \x20   }\n\
             \x20 }\n\
             }\n"
        );
    }

    #[test]
    fn provider_region_from_environment_variables() {
        let env = AwsEnv {
            region: Some("eu-west-1".to_string()),
            ..AwsEnv::default()
        };
        let tf = renderer().provider_tf(&sample(), "prod", &env).unwrap();
        assert!(tf.contains("region = \"eu-west-1\""));
    }

    #[test]
    fn provider_without_tags_has_no_block() {
        let mut infra = sample();
        infra.tags.clear();
        let tf = renderer().provider_tf(&infra, "dev", &AwsEnv::default()).unwrap();
        assert!(!tf.contains("default_tags"));
    }

    #[test]
    fn hcl_strings_are_escaped() {
        assert_eq!(hcl_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(hcl_string("${var.x}"), "\"$${var.x}\"");
        assert_eq!(hcl_string("c:\\tmp"), "\"c:\\\\tmp\"");
    }

    #[test]
    fn tfvars_sorted_with_newline() {
        let inputs = BTreeMap::from([
            ("zeta".to_string(), json!(1)),
            ("alpha".to_string(), json!({"b": 2, "a": 1})),
        ]);
        let out = tfvars_json(&inputs).unwrap();
        assert_eq!(
            out,
            "{\n  \"alpha\": {\n    \"a\": 1,\n    \"b\": 2\n  },\n  \"zeta\": 1\n}\n"
        );
    }

    #[test]
    fn terragrunt_points_at_module_source() {
        let hcl = renderer().terragrunt_hcl(&layout(), "ecr").unwrap();
        assert_eq!(
            hcl,
            "# Generated by workstation. Do not edit.\n\
             terraform {\n  source = \"/repo/infra/modules/ecr\"\n}\n"
        );
    }

    #[test]
    fn modules_dir_from_config_is_relative_to_root() {
        let mut infra = sample();
        assert_eq!(Layout::for_config(Path::new("/repo"), &infra), layout());
        infra.modules_dir = Some(PathBuf::from("terraform/modules"));
        let custom = Layout::for_config(Path::new("/repo"), &infra);
        assert_eq!(custom.module_source("ecr"), Path::new("/repo/terraform/modules/ecr"));
        assert_eq!(custom.out_dir, Path::new("/repo/infra/live"));
    }

    #[test]
    fn hcl_map_filter_sorts_and_aligns() {
        let map = json!({"zone": "a", "cost-center": "ml", "replicas": 2});
        let args = HashMap::from([("indent".to_string(), json!(4))]);
        let out = to_hcl_map_filter(&map, &args).unwrap();
        assert_eq!(
            out,
            json!(
                "    \"cost-center\" = \"ml\"\n    \"replicas\"    = 2\n    \"zone\"        = \"a\""
            )
        );
    }

    #[test]
    fn hcl_filter_rejects_non_scalars() {
        let none = HashMap::new();
        assert_eq!(hcl_filter(&json!(true), &none).unwrap(), json!("true"));
        assert_eq!(hcl_filter(&json!("x"), &none).unwrap(), json!("\"x\""));
        assert!(hcl_filter(&json!(["a"]), &none).is_err());
        assert!(to_hcl_map_filter(&json!("a"), &none).is_err());
    }

    #[test]
    fn plan_lists_four_files_per_module() {
        let files = plan(&sample(), "dev", &layout(), &aws()).unwrap();
        let paths: Vec<String> = files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/repo/infra/live/dev/ecr/backend.tf",
                "/repo/infra/live/dev/ecr/provider.tf",
                "/repo/infra/live/dev/ecr/terraform.tfvars.json",
                "/repo/infra/live/dev/ecr/terragrunt.hcl",
                "/repo/infra/live/dev/sagemaker/backend.tf",
                "/repo/infra/live/dev/sagemaker/provider.tf",
                "/repo/infra/live/dev/sagemaker/terraform.tfvars.json",
                "/repo/infra/live/dev/sagemaker/terragrunt.hcl",
            ]
        );
    }

    #[test]
    fn plan_is_byte_identical_when_repeated() {
        let a = plan(&sample(), "prod", &layout(), &aws()).unwrap();
        let b = plan(&sample(), "prod", &layout(), &aws()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn plan_unknown_environment() {
        let err = plan(&sample(), "qa", &layout(), &aws()).unwrap_err();
        assert_eq!(err, InfraError::UnknownEnvironment("qa".to_string()));
    }
}
