//! Task entries, task status, and the [`Log`] trait.

/// One task's outcome, kept for the run summary.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Task name.
    pub name: String,
    /// Final status.
    pub status: TaskStatus,
    /// Skip reason or error text.
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task completed successfully.
    Ok,
    /// Task does not apply to this platform or profile.
    NotApplicable,
    /// Task chose not to run (nothing configured, tool unavailable).
    Skipped,
    /// Task ran in dry-run mode.
    DryRun,
    /// Task failed, or completed with failed items.
    Failed,
    /// Task never started because an earlier failure aborted the run.
    Aborted,
}

impl TaskStatus {
    /// Summary icon for this status.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::NotApplicable => "·",
            Self::Skipped | Self::Aborted => "○",
            Self::DryRun => "~",
            Self::Failed => "✗",
        }
    }

    pub(super) const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::NotApplicable => "\x1b[2m",
            Self::Skipped | Self::Aborted => "\x1b[33m",
            Self::DryRun => "\x1b[37m",
            Self::Failed => "\x1b[31m",
        }
    }
}

/// Logging backend used by tasks and commands.
pub trait Log: Send + Sync {
    /// Log a stage header.
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (console only with `-v`).
    fn debug(&self, msg: &str);
    /// Log a warning.
    fn warn(&self, msg: &str);
    /// Log an error.
    fn error(&self, msg: &str);
    /// Log an action that dry-run mode did not perform.
    fn dry_run(&self, msg: &str);
    /// Record a task result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct_for_reported_states() {
        let icons = [
            TaskStatus::Ok.icon(),
            TaskStatus::NotApplicable.icon(),
            TaskStatus::Skipped.icon(),
            TaskStatus::DryRun.icon(),
            TaskStatus::Failed.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn aborted_reads_as_skipped() {
        assert_eq!(TaskStatus::Aborted.icon(), TaskStatus::Skipped.icon());
        assert_ne!(TaskStatus::Aborted, TaskStatus::Skipped);
    }
}
