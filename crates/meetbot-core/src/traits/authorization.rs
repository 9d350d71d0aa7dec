//! Remote authorization store trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Principal, TaskRef};

/// The remote store holding the authoritative per-task access state.
///
/// The trait is defined here in `meetbot-core` and implemented over HTTP
/// in `meetbot-client`; services consume it as an `Arc<dyn
/// AuthorizationStore>` so tests can substitute an in-memory double.
///
/// Grant and revoke apply one principal at a time; callers sequence the
/// calls themselves (removals before additions) and treat the first
/// failure as aborting the run.
#[async_trait]
pub trait AuthorizationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Authorize a principal for the given task.
    async fn grant_access(&self, task: &TaskRef, principal: &Principal) -> AppResult<()>;

    /// Withdraw a principal's authorization for the given task.
    async fn revoke_access(&self, task: &TaskRef, principal: &Principal) -> AppResult<()>;

    /// Flip the task's access-restriction flag and return the new value
    /// as reported by the server.
    async fn toggle_restriction(&self, task: &TaskRef) -> AppResult<bool>;
}
