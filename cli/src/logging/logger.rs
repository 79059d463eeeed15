//! Structured logger with dry-run awareness and summary collection.
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus};
use super::utils::{log_file_path, terminal_columns, truncate};

macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Console and file logger that also collects per-task results.
///
/// Events go through `tracing`; the file copy lives at
/// `$XDG_CACHE_HOME/workstation/<command>.log` (see
/// [`init_subscriber`](super::init_subscriber)).
#[derive(Debug)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

/// Per-status totals of recorded tasks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Tasks that completed.
    pub ok: usize,
    /// Tasks not applicable here.
    pub not_applicable: usize,
    /// Tasks skipped or aborted.
    pub skipped: usize,
    /// Tasks run in dry-run mode.
    pub dry_run: usize,
    /// Tasks that failed.
    pub failed: usize,
}

impl SummaryCounts {
    /// Total number of recorded tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ok + self.not_applicable + self.skipped + self.dry_run + self.failed
    }
}

impl Logger {
    /// Create a logger for `command`. Does not touch the log file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Path of this run's log file, when the cache directory is usable.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Recorded task entries, in record order.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run notice.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Number of failed tasks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.counts().failed
    }

    /// Whether any task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Totals per status.
    #[must_use]
    pub fn counts(&self) -> SummaryCounts {
        let mut counts = SummaryCounts::default();
        for task in self.task_entries() {
            match task.status {
                TaskStatus::Ok => counts.ok += 1,
                TaskStatus::NotApplicable => counts.not_applicable += 1,
                TaskStatus::Skipped | TaskStatus::Aborted => counts.skipped += 1,
                TaskStatus::DryRun => counts.dry_run += 1,
                TaskStatus::Failed => counts.failed += 1,
            }
        }
        counts
    }

    /// Print one line per recorded task and the totals.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        writeln!(std::io::stdout()).ok();
        self.stage("Summary");

        let width = terminal_columns().saturating_sub(4);
        for task in &tasks {
            let suffix = task
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            let line = truncate(
                &format!("{} {}{suffix}", task.status.icon(), task.name),
                width,
            );
            self.info(&format!("{}{line}\x1b[0m", task.status.color()));
        }

        let c = self.counts();
        writeln!(std::io::stdout()).ok();
        self.info(&format!(
            "{} tasks: \x1b[32m{} ok\x1b[0m, \x1b[2m{} n/a\x1b[0m, \x1b[33m{} skipped\x1b[0m, \x1b[37m{} dry-run\x1b[0m, \x1b[31m{} failed\x1b[0m",
            c.total(),
            c.ok,
            c.not_applicable,
            c.skipped,
            c.dry_run,
            c.failed
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.record_task(name, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::isolated_logger;
    use std::fs;

    #[test]
    fn starts_empty() {
        let (log, _tmp, _guard) = isolated_logger();
        assert!(log.task_entries().is_empty());
        assert_eq!(log.counts(), SummaryCounts::default());
    }

    #[test]
    fn records_in_order_with_messages() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_task("Install Homebrew", TaskStatus::Ok, None);
        log.record_task("Install npm tools", TaskStatus::Skipped, Some("no npm tools"));
        let entries = log.task_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Install Homebrew");
        assert_eq!(entries[1].message.as_deref(), Some("no npm tools"));
    }

    #[test]
    fn counts_group_aborted_with_skipped() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_task("a", TaskStatus::Ok, None);
        log.record_task("b", TaskStatus::Failed, Some("1 of 3 failed"));
        log.record_task("c", TaskStatus::Aborted, None);
        log.record_task("d", TaskStatus::Skipped, None);
        log.record_task("e", TaskStatus::NotApplicable, None);
        let c = log.counts();
        assert_eq!(c.failed, 1);
        assert_eq!(c.skipped, 2);
        assert_eq!(c.total(), 5);
        assert!(log.has_failures());
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let (log, _tmp, _guard) = isolated_logger();
        let log_ref: &dyn Log = &log;
        log_ref.record_task("via-trait", TaskStatus::DryRun, None);
        assert_eq!(log.counts().dry_run, 1);
    }

    #[test]
    fn events_reach_the_log_file() {
        let (log, _tmp, _guard) = isolated_logger();
        let marker = format!("marker-{}", std::process::id());
        log.stage(&format!("stage {marker}"));
        log.debug(&format!("debug {marker}"));
        log.warn(&format!("warn {marker}"));
        log.error(&format!("error {marker}"));
        log.dry_run(&format!("dry {marker}"));
        let contents = fs::read_to_string(log.log_path().unwrap()).unwrap();
        assert!(contents.contains(&format!("==> stage {marker}")));
        assert!(contents.contains(&format!("[debug] debug {marker}")));
        assert!(contents.contains(&format!("[warn] warn {marker}")));
        assert!(contents.contains(&format!("[error] error {marker}")));
        assert!(contents.contains(&format!("[dry run] dry {marker}")));
    }

    #[test]
    fn summary_is_written_to_file_without_ansi() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_task("Configure shell profile", TaskStatus::Ok, None);
        log.print_summary();
        let contents = fs::read_to_string(log.log_path().unwrap()).unwrap();
        assert!(contents.contains("✓ Configure shell profile"));
        assert!(contents.contains("1 tasks: 1 ok"));
        assert!(!contents.contains('\x1b'));
    }
}
