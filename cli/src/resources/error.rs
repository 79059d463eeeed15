//! Typed error variants for resource operations.
//!
//! Resource code may return these variants directly; callers convert to
//! [`anyhow::Error`] via `?`.

use thiserror::Error;

/// Errors that arise from resource probes and apply operations.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// An install command exited non-zero.
    #[error("command '{program}' failed (exit {exit_code}): {stderr}")]
    ExecutionFailed {
        /// Name of the program that was invoked.
        program: String,
        /// Exit code returned by the process.
        exit_code: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// A resource exists but is in a state the engine will not touch.
    #[error("invalid state for '{resource}': {reason}")]
    InvalidState {
        /// Name or description of the resource.
        resource: String,
        /// Human-readable explanation of why the state is invalid.
        reason: String,
    },

    /// The requested operation is not supported for this resource type.
    #[error("operation '{operation}' is not supported for resource '{resource}'")]
    UnsupportedOperation {
        /// Name of the unsupported operation (e.g. `"remove"`).
        operation: String,
        /// Name or description of the resource.
        resource: String,
    },

    /// A downloaded installer did not match its pinned checksum.
    #[error("checksum mismatch for {resource}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// What was downloaded.
        resource: String,
        /// Pinned SHA-256.
        expected: String,
        /// Computed SHA-256.
        actual: String,
    },
}

impl ResourceError {
    /// Build an [`ExecutionFailed`](Self::ExecutionFailed) from a finished process.
    #[must_use]
    pub fn from_exec(program: &str, result: &crate::exec::ExecResult) -> Self {
        // Installers like brew and npm print most diagnostics to stdout.
        let detail = if result.stderr.trim().is_empty() {
            result.stdout.trim().to_string()
        } else {
            result.stderr.trim().to_string()
        };
        Self::ExecutionFailed {
            program: program.to_string(),
            exit_code: result.code.unwrap_or(-1),
            stderr: detail,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::exec::ExecResult;

    #[test]
    fn execution_failed_display() {
        let e = ResourceError::ExecutionFailed {
            program: "brew".to_string(),
            exit_code: 1,
            stderr: "No available formula".to_string(),
        };
        assert!(e.to_string().contains("brew"));
        assert!(e.to_string().contains("exit 1"));
        assert!(e.to_string().contains("No available formula"));
    }

    #[test]
    fn from_exec_prefers_stderr() {
        let result = ExecResult {
            stdout: "progress".to_string(),
            stderr: "boom".to_string(),
            success: false,
            code: Some(2),
        };
        let e = ResourceError::from_exec("npm", &result);
        assert_eq!(e.to_string(), "command 'npm' failed (exit 2): boom");
    }

    #[test]
    fn from_exec_falls_back_to_stdout() {
        let result = ExecResult {
            stdout: "Error: No available formula with the name \"nope\"".to_string(),
            stderr: "  ".to_string(),
            success: false,
            code: None,
        };
        let e = ResourceError::from_exec("brew", &result);
        assert!(e.to_string().contains("exit -1"));
        assert!(e.to_string().contains("No available formula"));
    }

    #[test]
    fn unsupported_operation_display() {
        let e = ResourceError::UnsupportedOperation {
            operation: "remove".to_string(),
            resource: "~/.zshrc: pyenv".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "operation 'remove' is not supported for resource '~/.zshrc: pyenv'"
        );
    }

    #[test]
    fn checksum_mismatch_display() {
        let e = ResourceError::ChecksumMismatch {
            resource: "Homebrew installer".to_string(),
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert!(e.to_string().contains("expected aa, got bb"));
    }
}
