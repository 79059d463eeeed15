//! Idempotent resource primitives (check + apply pattern).
pub mod error;
pub mod file;
pub mod helpers;
pub mod profile_line;
pub mod tool;

use anyhow::Result;

/// Something the applier can describe and bring into its desired state.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be made (failed install command,
    /// I/O failure, permission issue).
    fn apply(&self) -> Result<ResourceChange>;

    /// Undo `apply()`. Unsupported unless a resource overrides it.
    ///
    /// # Errors
    ///
    /// Returns an error if removal is not supported or fails.
    fn remove(&self) -> Result<ResourceChange> {
        Err(error::ResourceError::UnsupportedOperation {
            operation: "remove".to_string(),
            resource: self.description(),
        }
        .into())
    }
}

/// State of a resource as seen by a probe.
///
/// # Examples
///
/// ```
/// use workstation_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let correct = ResourceState::Correct;
/// let wrong = ResourceState::Incorrect { current: "content differs".into() };
///
/// assert_ne!(missing, correct);
/// assert_eq!(correct, ResourceState::Correct);
/// assert_ne!(wrong, missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource is absent (tool not installed, marker not in profile, file missing).
    Missing,
    /// Resource is present and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// The current value of the resource.
        current: String,
    },
    /// Resource cannot be applied on this host.
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
    /// Resource was not changed.
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// A resource whose state can be probed without side effects.
pub trait Resource: Applicable {
    /// Probe the current state. Must not change anything on the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState>;
}

/// Shared test helpers for resource unit tests.
#[cfg(test)]
pub mod test_helpers {
    use crate::exec::{ExecResult, Executor};
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    /// A configurable mock executor for resource unit tests.
    ///
    /// Maintains a queue of `(success, stdout)` responses consumed in FIFO
    /// order. When the queue is empty any call returns a failed response.
    /// Every call is recorded as `(program, args)`.
    #[derive(Debug)]
    pub struct MockExecutor {
        responses: Mutex<VecDeque<(bool, String)>>,
        /// Return value for every [`Executor::which`] call.
        which_result: bool,
        calls: Mutex<Vec<(String, Vec<String>)>>,
        call_count: AtomicUsize,
    }

    impl MockExecutor {
        /// Create a mock with a single successful response.
        #[must_use]
        pub fn ok(stdout: &str) -> Self {
            Self::with_responses(vec![(true, stdout.to_string())])
        }

        /// Create a mock with a single failed response (empty stdout).
        #[must_use]
        pub fn fail() -> Self {
            Self::with_responses(vec![(false, String::new())])
        }

        /// Create a mock from an ordered list of `(success, stdout)` pairs.
        #[must_use]
        pub fn with_responses(responses: Vec<(bool, String)>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                which_result: false,
                calls: Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Set the value returned by every [`Executor::which`] call.
        #[must_use]
        pub const fn with_which(mut self, result: bool) -> Self {
            self.which_result = result;
            self
        }

        /// Return the total number of executor calls made so far.
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// Return every recorded `(program, args)` pair.
        #[must_use]
        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls
                .lock()
                .map_or_else(|_| Vec::new(), |guard| guard.clone())
        }

        fn next(&self, program: &str, args: &[&str]) -> (bool, String) {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((
                    program.to_string(),
                    args.iter().map(|s| (*s).to_string()).collect(),
                ));
            }
            self.responses.lock().map_or_else(
                |_| (false, "mutex poisoned".to_string()),
                |mut guard| {
                    guard
                        .pop_front()
                        .unwrap_or_else(|| (false, "unexpected call".to_string()))
                },
            )
        }

        fn next_result(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next(program, args);
            if success {
                Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                })
            } else {
                anyhow::bail!("mock command failed")
            }
        }
    }

    impl Executor for MockExecutor {
        fn run_in_with_env(
            &self,
            _: &Path,
            program: &str,
            args: &[&str],
            _: &[(&str, &str)],
        ) -> anyhow::Result<ExecResult> {
            self.next_result(program, args)
        }

        fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next(program, args);
            Ok(ExecResult {
                stdout,
                stderr: String::new(),
                success,
                code: Some(i32::from(!success)),
            })
        }

        fn which(&self, _: &str) -> bool {
            self.which_result
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    struct TestResource;

    impl Applicable for TestResource {
        fn description(&self) -> String {
            "test resource".to_string()
        }

        fn apply(&self) -> Result<ResourceChange> {
            Ok(ResourceChange::Applied)
        }
    }

    #[test]
    fn default_remove_returns_error() {
        let err = TestResource.remove().unwrap_err();
        assert!(
            err.to_string().contains("not supported"),
            "expected 'not supported' in: {err}"
        );
        assert!(
            err.to_string().contains("test resource"),
            "expected resource description in: {err}"
        );
    }
}
