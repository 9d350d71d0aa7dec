//! Access-list reconciliation core.
//!
//! Computes the diff between the last-applied and the edited principal
//! set and applies it against the remote store as an ordered pipeline of
//! two phases: all removals first, then all additions. Calls within a
//! phase are issued strictly sequentially, each awaited before the next,
//! so a failure always leaves a known applied prefix.

use thiserror::Error;
use tracing::{debug, info};

use meetbot_core::error::{AppError, ErrorKind};
use meetbot_core::traits::AuthorizationStore;
use meetbot_core::types::{Principal, TaskRef};
use meetbot_entity::access::{AccessChange, AccessDiff, AccessList, Phase};

/// Error of an aborted reconciliation run.
///
/// Already-applied changes are not rolled back; after a failure the
/// remote store reflects a strict subset of the intended diff.
/// `remaining` is the ordered suffix of the run that never reached the
/// store, the failed change first, kept so a retry-from-checkpoint can
/// resume where this run stopped.
#[derive(Debug, Error)]
#[error("reconciliation stopped in {phase} phase at {principal}: {source}")]
pub struct ReconcileError {
    /// Phase the failure occurred in.
    pub phase: Phase,
    /// Principal whose call failed.
    pub principal: Principal,
    /// Changes not applied, in issue order, the failed one included.
    pub remaining: Vec<AccessChange>,
    /// The remote failure.
    #[source]
    pub source: AppError,
}

impl From<ReconcileError> for AppError {
    fn from(err: ReconcileError) -> Self {
        let message = format!(
            "Reconciliation incomplete: {} of {} failed with {} change(s) unapplied",
            err.phase,
            err.principal,
            err.remaining.len()
        );
        AppError::with_source(ErrorKind::ExternalService, message, err)
    }
}

/// Apply the minimal change sequence taking `before` to `after`.
///
/// Removals run before additions so a principal is never left authorized
/// under stale state longer than necessary. Issues exactly
/// `|before − after|` revoke and `|after − before|` grant calls, none for
/// principals present on both sides; an empty diff performs no remote
/// calls at all. On full success returns the `after` set as the new
/// last-applied state for caller-side cache update.
pub async fn reconcile(
    store: &dyn AuthorizationStore,
    task: &TaskRef,
    before: &AccessList,
    after: &AccessList,
) -> Result<AccessList, ReconcileError> {
    let diff = before.diff(after);
    if diff.is_empty() {
        debug!(task = %task, "Access list unchanged, nothing to reconcile");
        return Ok(after.clone());
    }

    for (applied, principal) in diff.to_remove.iter().enumerate() {
        if let Err(source) = store.revoke_access(task, principal).await {
            return Err(stopped(&diff, Phase::Remove, applied, principal, source));
        }
    }

    for (index, principal) in diff.to_add.iter().enumerate() {
        if let Err(source) = store.grant_access(task, principal).await {
            let applied = diff.to_remove.len() + index;
            return Err(stopped(&diff, Phase::Add, applied, principal, source));
        }
    }

    info!(
        task = %task,
        removed = diff.to_remove.len(),
        added = diff.to_add.len(),
        "Access list reconciled"
    );
    Ok(after.clone())
}

fn stopped(
    diff: &AccessDiff,
    phase: Phase,
    applied: usize,
    principal: &Principal,
    source: AppError,
) -> ReconcileError {
    ReconcileError {
        phase,
        principal: principal.clone(),
        remaining: diff.changes().split_off(applied),
        source,
    }
}
