//! Domain-specific error types for the workstation engine.
//!
//! Internal modules return typed errors (e.g. [`ConfigError`], [`InfraError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! WorkstationError
//! ├── Config(ConfigError)     — TOML parsing, profile resolution
//! ├── Task(TaskError)         — task execution and failure policy
//! ├── Resource(ResourceError) — probes, installs, file writes
//! └── Infra(InfraError)       — naming, composition, module outputs
//! ```

use thiserror::Error;

pub use crate::resources::error::ResourceError;

/// Top-level error type for the workstation engine.
#[derive(Error, Debug)]
pub enum WorkstationError {
    /// Configuration-related error (parsing, profile resolution, I/O).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution error.
    #[error("Task execution error: {0}")]
    Task(#[from] TaskError),

    /// Resource operation error.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Infrastructure composition error.
    #[error("Infrastructure error: {0}")]
    Infra(#[from] InfraError),
}

/// Errors that arise from configuration loading and profile resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested profile name is not defined in `profiles.toml`.
    #[error("unknown profile '{name}' (available: {available})")]
    InvalidProfile {
        /// Requested profile name.
        name: String,
        /// Comma-separated list of defined profiles.
        available: String,
    },

    /// The TOML file contains a syntax or schema error.
    #[error("invalid TOML in {file}: {message}")]
    InvalidSyntax {
        /// Config file that failed to parse.
        file: String,
        /// Parser message.
        message: String,
    },

    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The workstation root directory could not be located.
    #[error("cannot determine workstation root. Use --root or set WORKSTATION_ROOT")]
    RootNotFound,
}

/// Errors that arise during task execution.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A task failed to execute.
    #[error("Task '{task}' failed: {reason}")]
    ExecutionFailed {
        /// Name of the task that failed.
        task: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// Fail-fast mode stopped the run after a failure.
    #[error("aborted after '{task}' failed (--fail-fast)")]
    Aborted {
        /// Name of the task whose failure stopped the run.
        task: String,
    },

    /// One or more tasks recorded a failure.
    #[error("{0} task(s) failed")]
    Failed(usize),

    /// Task dependencies form a cycle.
    #[error("task dependency cycle involving: {0}")]
    DependencyCycle(String),
}

/// Errors that arise from the infrastructure composer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InfraError {
    /// The requested environment is not declared in `infra.toml`.
    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),

    /// The requested module is not declared in `infra.toml`.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// A name component is empty or contains characters AWS rejects.
    #[error("invalid {field} '{value}': must be non-empty lowercase [a-z0-9-]")]
    InvalidNamePart {
        /// Which component was invalid (`project_name`, `environment`, `suffix`).
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// Two resources derive the same physical name.
    #[error("resource name '{name}' is produced by both {first} and {second}")]
    DuplicateName {
        /// The colliding name.
        name: String,
        /// First producer (`env/module`).
        first: String,
        /// Second producer (`env/module`).
        second: String,
    },

    /// The backend bucket template needs `AWS_ACCOUNT_ID` but it is unset.
    #[error("backend bucket template uses {{account_id}} but AWS_ACCOUNT_ID is not set")]
    MissingAccountId,

    /// A generated file could not be rendered.
    #[error("cannot render {file}: {message}")]
    Render {
        /// File being rendered.
        file: String,
        /// Serializer message.
        message: String,
    },

    /// A configured module has no Terraform source directory.
    #[error("module '{module}' has no source at {path} (set modules_dir in infra.toml)")]
    MissingModuleSource {
        /// Module name.
        module: String,
        /// Directory that was expected to hold the module.
        path: String,
    },

    /// `terraform output -json` could not be parsed.
    #[error("cannot parse terraform outputs: {0}")]
    OutputParse(String),

    /// A declared module output is absent after apply.
    #[error("module '{module}' is missing output '{output}'")]
    MissingOutput {
        /// Module name.
        module: String,
        /// Output name.
        output: String,
    },

    /// A declared module output resolved to null or an empty value.
    #[error("module '{module}' output '{output}' is empty")]
    EmptyOutput {
        /// Module name.
        module: String,
        /// Output name.
        output: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_invalid_profile_display() {
        let e = ConfigError::InvalidProfile {
            name: "unknown".to_string(),
            available: "base, full".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unknown profile 'unknown' (available: base, full)"
        );
    }

    #[test]
    fn config_error_invalid_syntax_display() {
        let e = ConfigError::InvalidSyntax {
            file: "tools.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert_eq!(e.to_string(), "invalid TOML in tools.toml: expected `=`");
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "/conf/tools.toml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("/conf/tools.toml"));
        assert!(e.source().is_some());
    }

    #[test]
    fn task_error_aborted_display() {
        let e = TaskError::Aborted {
            task: "Install Homebrew tools".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "aborted after 'Install Homebrew tools' failed (--fail-fast)"
        );
    }

    #[test]
    fn task_error_failed_display() {
        assert_eq!(TaskError::Failed(2).to_string(), "2 task(s) failed");
    }

    #[test]
    fn infra_error_duplicate_name_display() {
        let e = InfraError::DuplicateName {
            name: "ml-dev-artifacts".to_string(),
            first: "dev/sagemaker".to_string(),
            second: "dev/bedrock".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "resource name 'ml-dev-artifacts' is produced by both dev/sagemaker and dev/bedrock"
        );
    }

    #[test]
    fn infra_error_missing_account_id_display() {
        assert!(
            InfraError::MissingAccountId
                .to_string()
                .contains("{account_id}")
        );
    }

    #[test]
    fn workstation_error_from_infra_error() {
        let e: WorkstationError = InfraError::UnknownEnvironment("qa".to_string()).into();
        assert!(e.to_string().contains("Infrastructure error"));
        assert!(e.to_string().contains("qa"));
    }

    #[test]
    fn workstation_error_from_config_error() {
        let e: WorkstationError = ConfigError::RootNotFound.into();
        assert!(e.to_string().contains("Configuration error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<WorkstationError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<TaskError>();
        assert_send_sync::<InfraError>();
        assert_send_sync::<ResourceError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _a: anyhow::Error = TaskError::Failed(1).into();
        let _b: anyhow::Error = InfraError::UnknownModule("x".to_string()).into();
        let _c: anyhow::Error = ConfigError::RootNotFound.into();
    }
}
