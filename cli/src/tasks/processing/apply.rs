//! Single-resource handling: apply if needed, count the outcome.

use anyhow::Result;

use super::super::context::Context;
use super::{ProcessOpts, TaskStats};
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Handle one probed resource, returning a stats delta.
pub(super) fn process_single<R: Resource>(
    ctx: &Context,
    resource: &R,
    state: ResourceState,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let desc = resource.description();
    let mut delta = TaskStats::new();
    match state {
        ResourceState::Correct => {
            ctx.log.debug(&format!("ok: {desc}"));
            delta.already_ok += 1;
        }
        ResourceState::Invalid { reason } => {
            ctx.log.warn(&format!("skipping {desc}: {reason}"));
            delta.skipped += 1;
        }
        ResourceState::Missing if !opts.fix_missing => {
            delta.skipped += 1;
        }
        ResourceState::Incorrect { current } if !opts.fix_incorrect => {
            ctx.log.debug(&format!("leaving {desc} as is ({current})"));
            delta.already_ok += 1;
        }
        state @ (ResourceState::Missing | ResourceState::Incorrect { .. }) => {
            if ctx.dry_run {
                let msg = if let ResourceState::Incorrect { current } = &state {
                    format!("would {} {desc} (currently {current})", opts.verb)
                } else {
                    format!("would {}: {desc}", opts.verb)
                };
                ctx.log.dry_run(&msg);
                delta.changed += 1;
                return Ok(delta);
            }
            delta += apply_resource(ctx, resource, opts)?;
        }
    }
    Ok(delta)
}

/// Apply one resource, returning a stats delta.
fn apply_resource<R: Resource>(
    ctx: &Context,
    resource: &R,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let desc = resource.description();
    ctx.log.debug(&format!("{}: {desc}", opts.verb));
    let mut delta = TaskStats::new();
    match resource.apply() {
        Ok(ResourceChange::Applied) => {
            ctx.log.info(&format!("{}: {desc}", super::past_tense(opts.verb)));
            delta.changed += 1;
        }
        Ok(ResourceChange::AlreadyCorrect) => delta.already_ok += 1,
        Ok(ResourceChange::Skipped { reason }) => {
            ctx.log.info(&format!("skipped {desc}: {reason}"));
            delta.skipped += 1;
        }
        Err(e) => return record_failure(ctx, resource, opts, opts.verb, e),
    }
    Ok(delta)
}

/// Count a failed probe or apply, or propagate it when bailing.
pub(super) fn record_failure<R: Resource>(
    ctx: &Context,
    resource: &R,
    opts: &ProcessOpts,
    action: &str,
    err: anyhow::Error,
) -> Result<TaskStats> {
    let desc = resource.description();
    if opts.bail_on_error || ctx.fail_fast() {
        return Err(err.context(format!("failed to {action} {desc}")));
    }
    ctx.log.error(&format!("failed to {action} {desc}: {err:#}"));
    Ok(TaskStats {
        failed: 1,
        ..TaskStats::default()
    })
}
