//! Rayon-backed probes.

use anyhow::Result;
use rayon::prelude::*;

use super::super::context::Context;
use crate::resources::{Resource, ResourceState};

/// Probe every resource, preserving input order in the result.
///
/// Probes are read-only, so they may run on the rayon pool. Each result is
/// kept separately so one failed probe does not hide the others.
pub(super) fn probe_all<R: Resource + Sync>(
    ctx: &Context,
    resources: &[R],
) -> Vec<Result<ResourceState>> {
    if ctx.parallel && resources.len() > 1 {
        ctx.log.debug(&format!("probing {} resources in parallel", resources.len()));
        resources.par_iter().map(Resource::current_state).collect()
    } else {
        resources.iter().map(Resource::current_state).collect()
    }
}
