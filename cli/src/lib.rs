//! Workstation bootstrap engine.
//!
//! Converges a development workstation (Homebrew, npm, pipx and script
//! tools, the AWS config files, shell-profile blocks) and composes the
//! Terraform/Terragrunt inputs of its AWS infrastructure. Everything is
//! driven by TOML files in `conf/`, filtered by profile and platform.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: parse and validate TOML config files
//! - **[`resources`]**: idempotent `check + apply` primitives (tools, profile blocks, files)
//! - **[`tasks`]**: named, dependency-ordered units of work wired to resources
//! - **[`infra`]**: module input binding, resource naming and file rendering
//! - **[`commands`]**: top-level subcommand orchestration (`install`, `check`, `infra`, ...)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod infra;
pub mod logging;
pub mod platform;
pub mod resources;
pub mod tasks;
