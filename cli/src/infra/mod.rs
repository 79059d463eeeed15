//! Infrastructure composer.
//!
//! Binds module inputs per environment, derives resource names and renders
//! the files Terragrunt runs. Convergence itself is left to Terraform.
pub mod inputs;
pub mod naming;
pub mod outputs;
pub mod render;
pub mod schema;

use std::collections::BTreeMap;

/// Input variables of one module in one environment, sorted by name.
pub type ModuleInputs = BTreeMap<String, serde_json::Value>;
