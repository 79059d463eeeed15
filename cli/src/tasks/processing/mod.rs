//! Resource processing loop: probe every item, then apply in declared order.
//!
//! - [`apply`]: single-resource handling and failure accounting
//! - [`parallel`]: rayon-backed probes

mod apply;
mod parallel;

use anyhow::Result;

use super::context::Context;
use crate::resources::{Resource, ResourceState};

/// Result of a single task execution.
///
/// # Examples
///
/// ```
/// use workstation_cli::tasks::TaskResult;
///
/// let skipped = TaskResult::Skipped("no npm tools configured".into());
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// assert!(matches!(TaskResult::DryRun, TaskResult::DryRun));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task had nothing to do.
    Skipped(String),
    /// Task ran in dry-run mode.
    DryRun,
}

/// Per-task item counters.
///
/// # Examples
///
/// ```
/// use workstation_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 2, already_ok: 5, skipped: 0, failed: 0 };
/// assert_eq!(stats.summary("install", false), "2 installed, 5 already ok");
/// assert_eq!(stats.summary("install", true), "2 would install, 5 already ok");
///
/// let stats = TaskStats { changed: 1, already_ok: 0, skipped: 1, failed: 2 };
/// assert_eq!(
///     stats.summary("install", false),
///     "1 installed, 0 already ok, 1 skipped, 2 failed"
/// );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Items changed (or that would change in dry-run).
    pub changed: u32,
    /// Items already in the desired state.
    pub already_ok: u32,
    /// Items not touched (not applicable, not fixable, nothing to run).
    pub skipped: u32,
    /// Items whose probe or apply failed.
    pub failed: u32,
}

fn past_tense(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{verb}d")
    } else {
        format!("{verb}ed")
    }
}

impl TaskStats {
    /// Create a new empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of items seen.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.changed + self.already_ok + self.skipped + self.failed
    }

    /// One-line summary, e.g. `"3 installed, 10 already ok, 1 failed"`.
    #[must_use]
    pub fn summary(&self, verb: &str, dry_run: bool) -> String {
        let verb = if dry_run {
            format!("would {verb}")
        } else {
            past_tense(verb)
        };
        let mut out = format!("{} {verb}, {} already ok", self.changed, self.already_ok);
        if self.skipped > 0 || self.failed > 0 {
            out.push_str(&format!(", {} skipped", self.skipped));
        }
        if self.failed > 0 {
            out.push_str(&format!(", {} failed", self.failed));
        }
        out
    }

    /// Log the summary and turn the counters into the task's result.
    ///
    /// # Errors
    ///
    /// Returns an error when any item failed, so the task is recorded as
    /// failed even though the remaining items were processed.
    pub fn finish(self, ctx: &Context, verb: &str) -> Result<TaskResult> {
        ctx.log.info(&self.summary(verb, ctx.dry_run));
        if self.failed > 0 {
            anyhow::bail!("{} of {} item(s) failed", self.failed, self.total());
        }
        Ok(if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        })
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// How each [`ResourceState`] is handled.
///
/// # Examples
///
/// ```
/// use workstation_cli::tasks::ProcessOpts;
///
/// let opts = ProcessOpts::install_missing("install");
/// assert!(opts.fix_missing && !opts.fix_incorrect && !opts.bail_on_error);
///
/// let opts = ProcessOpts::apply_all("write").bail();
/// assert!(opts.fix_missing && opts.fix_incorrect && opts.bail_on_error);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProcessOpts<'a> {
    /// Verb for log messages ("install", "append", "write").
    pub verb: &'a str,
    /// Apply resources that are `Incorrect`.
    pub fix_incorrect: bool,
    /// Apply resources that are `Missing`.
    pub fix_missing: bool,
    /// Propagate the first failure. `--fail-fast` forces this on.
    pub bail_on_error: bool,
}

impl<'a> ProcessOpts<'a> {
    /// Fix missing and incorrect resources, continuing past failures.
    #[must_use]
    pub const fn apply_all(verb: &'a str) -> Self {
        Self {
            verb,
            fix_incorrect: true,
            fix_missing: true,
            bail_on_error: false,
        }
    }

    /// Only create missing resources; never touch existing ones.
    #[must_use]
    pub const fn install_missing(verb: &'a str) -> Self {
        Self {
            verb,
            fix_incorrect: false,
            fix_missing: true,
            bail_on_error: false,
        }
    }

    /// Stop at the first failure.
    #[must_use]
    pub const fn bail(mut self) -> Self {
        self.bail_on_error = true;
        self
    }
}

/// Probe every resource, then apply those that need it in declared order.
///
/// Probes run on the rayon pool when `ctx.parallel` is set; applies always
/// run one at a time.
///
/// # Errors
///
/// Returns the first failure when bailing (see [`ProcessOpts::bail_on_error`]
/// and `--fail-fast`), otherwise an error summarising how many items failed.
pub fn process_resources<R: Resource + Sync>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    opts: &ProcessOpts,
) -> Result<TaskResult> {
    let resources: Vec<R> = resources.into_iter().collect();
    let states = parallel::probe_all(ctx, &resources);
    let mut stats = TaskStats::new();
    for (resource, state) in resources.iter().zip(states) {
        stats += match state {
            Ok(state) => apply::process_single(ctx, resource, state, opts)?,
            Err(e) => apply::record_failure(ctx, resource, opts, "probe", e)?,
        };
    }
    stats.finish(ctx, opts.verb)
}

/// Apply resources whose states were already probed (bulk backend queries).
///
/// # Errors
///
/// As for [`process_resources`].
pub fn process_resource_states<R: Resource>(
    ctx: &Context,
    resource_states: impl IntoIterator<Item = (R, ResourceState)>,
    opts: &ProcessOpts,
) -> Result<TaskResult> {
    let mut stats = TaskStats::new();
    for (resource, state) in resource_states {
        stats += apply::process_single(ctx, &resource, state, opts)?;
    }
    stats.finish(ctx, opts.verb)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::resources::{Applicable, ResourceChange};
    use crate::tasks::test_helpers::{empty_config, make_static_context};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Resource double that records the order of apply calls.
    struct MockResource<'a> {
        id: usize,
        state: Result<ResourceState, String>,
        apply_result: Result<ResourceChange, String>,
        applied: &'a Mutex<Vec<usize>>,
        probes: &'a AtomicUsize,
    }

    impl<'a> MockResource<'a> {
        fn new(
            id: usize,
            state: ResourceState,
            applied: &'a Mutex<Vec<usize>>,
            probes: &'a AtomicUsize,
        ) -> Self {
            Self {
                id,
                state: Ok(state),
                apply_result: Ok(ResourceChange::Applied),
                applied,
                probes,
            }
        }

        fn failing_apply(mut self) -> Self {
            self.apply_result = Err(format!("install {} failed", self.id));
            self
        }

        fn failing_probe(mut self) -> Self {
            self.state = Err("probe exploded".to_string());
            self
        }

        fn with_change(mut self, change: ResourceChange) -> Self {
            self.apply_result = Ok(change);
            self
        }
    }

    impl Applicable for MockResource<'_> {
        fn description(&self) -> String {
            format!("item-{}", self.id)
        }

        fn apply(&self) -> Result<ResourceChange> {
            self.applied.lock().unwrap().push(self.id);
            self.apply_result.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    impl Resource for MockResource<'_> {
        fn current_state(&self) -> Result<ResourceState> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.state.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    fn ctx() -> Context {
        make_static_context(empty_config(PathBuf::from("/ws"))).0
    }

    fn opts() -> ProcessOpts<'static> {
        ProcessOpts::install_missing("install")
    }

    const fn stats(changed: u32, already_ok: u32, skipped: u32, failed: u32) -> TaskStats {
        TaskStats {
            changed,
            already_ok,
            skipped,
            failed,
        }
    }

    #[test]
    fn summary_shapes() {
        let s = stats(3, 10, 0, 0);
        assert_eq!(s.summary("install", false), "3 installed, 10 already ok");
        assert_eq!(s.summary("append", false), "3 appended, 10 already ok");
        assert_eq!(s.summary("write", true), "3 would write, 10 already ok");
        let s = stats(0, 0, 2, 0);
        assert_eq!(s.summary("create", false), "0 created, 0 already ok, 2 skipped");
    }

    #[test]
    fn add_assign_accumulates() {
        let mut a = stats(1, 1, 1, 1);
        a += stats(1, 2, 3, 4);
        assert_eq!(a, stats(2, 3, 4, 5));
        assert_eq!(a.total(), 14);
    }

    #[test]
    fn applies_missing_in_declared_order_after_probing_all() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources: Vec<_> = (0..6)
            .map(|i| {
                let state = if i % 2 == 0 {
                    ResourceState::Missing
                } else {
                    ResourceState::Correct
                };
                MockResource::new(i, state, &applied, &probes)
            })
            .collect();
        let result = process_resources(&ctx(), resources, &opts()).unwrap();
        assert_eq!(result, TaskResult::Ok);
        assert_eq!(probes.load(Ordering::SeqCst), 6);
        assert_eq!(*applied.lock().unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn sequential_probe_when_parallel_disabled() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let c = ctx().parallel(false);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes),
            MockResource::new(1, ResourceState::Missing, &applied, &probes),
        ];
        process_resources(&c, resources, &opts()).unwrap();
        assert_eq!(*applied.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn failure_does_not_stop_remaining_items() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes).failing_apply(),
            MockResource::new(1, ResourceState::Missing, &applied, &probes),
            MockResource::new(2, ResourceState::Missing, &applied, &probes),
        ];
        let err = process_resources(&ctx(), resources, &opts()).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 item(s) failed");
        assert_eq!(*applied.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let c = ctx().policy(crate::tasks::FailurePolicy::FailFast);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes),
            MockResource::new(1, ResourceState::Missing, &applied, &probes).failing_apply(),
            MockResource::new(2, ResourceState::Missing, &applied, &probes),
        ];
        let err = process_resources(&c, resources, &opts()).unwrap_err();
        assert!(format!("{err:#}").contains("install 1 failed"));
        assert_eq!(*applied.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn bail_opts_stop_without_fail_fast() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes).failing_apply(),
            MockResource::new(1, ResourceState::Missing, &applied, &probes),
        ];
        assert!(process_resources(&ctx(), resources, &opts().bail()).is_err());
        assert_eq!(*applied.lock().unwrap(), vec![0]);
    }

    #[test]
    fn probe_failure_counts_as_failed_item() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes).failing_probe(),
            MockResource::new(1, ResourceState::Missing, &applied, &probes),
        ];
        let err = process_resources(&ctx(), resources, &opts()).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 item(s) failed");
        assert_eq!(*applied.lock().unwrap(), vec![1]);
    }

    #[test]
    fn dry_run_changes_nothing() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let c = ctx().dry_run(true);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes),
            MockResource::new(1, ResourceState::Correct, &applied, &probes),
        ];
        let result = process_resources(&c, resources, &opts()).unwrap();
        assert_eq!(result, TaskResult::DryRun);
        assert!(applied.lock().unwrap().is_empty());
    }

    #[test]
    fn install_missing_leaves_incorrect_alone() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![MockResource::new(
            0,
            ResourceState::Incorrect { current: "edited".into() },
            &applied,
            &probes,
        )];
        process_resources(&ctx(), resources, &opts()).unwrap();
        assert!(applied.lock().unwrap().is_empty());
    }

    #[test]
    fn apply_all_rewrites_incorrect() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![MockResource::new(
            0,
            ResourceState::Incorrect { current: "stale".into() },
            &applied,
            &probes,
        )];
        process_resources(&ctx(), resources, &ProcessOpts::apply_all("write")).unwrap();
        assert_eq!(*applied.lock().unwrap(), vec![0]);
    }

    #[test]
    fn skipped_change_is_not_a_failure() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let resources = vec![
            MockResource::new(0, ResourceState::Missing, &applied, &probes)
                .with_change(ResourceChange::Skipped { reason: "no install command".into() }),
        ];
        assert_eq!(
            process_resources(&ctx(), resources, &opts()).unwrap(),
            TaskResult::Ok
        );
    }

    #[test]
    fn precomputed_states_are_not_reprobed() {
        let applied = Mutex::new(Vec::new());
        let probes = AtomicUsize::new(0);
        let states = vec![
            (
                MockResource::new(0, ResourceState::Correct, &applied, &probes),
                ResourceState::Missing,
            ),
            (
                MockResource::new(1, ResourceState::Missing, &applied, &probes),
                ResourceState::Correct,
            ),
        ];
        process_resource_states(&ctx(), states, &opts()).unwrap();
        assert_eq!(probes.load(Ordering::SeqCst), 0);
        assert_eq!(*applied.lock().unwrap(), vec![0]);
    }

    #[test]
    fn empty_list_is_ok() {
        let none: Vec<MockResource<'_>> = vec![];
        assert_eq!(
            process_resources(&ctx(), none, &opts()).unwrap(),
            TaskResult::Ok
        );
    }
}
