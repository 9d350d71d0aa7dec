//! Per-task access-restriction toggle.

use std::sync::Arc;

use tracing::info;

use meetbot_core::result::AppResult;
use meetbot_core::traits::AuthorizationStore;
use meetbot_core::types::TaskRef;

use crate::registry::TaskRegistry;

/// Toggles the access-restriction flag of a meeting-bot resource.
#[derive(Debug, Clone)]
pub struct RestrictionService {
    /// Remote store owning the authoritative flag.
    store: Arc<dyn AuthorizationStore>,
    /// Local task cache.
    registry: Arc<TaskRegistry>,
}

impl RestrictionService {
    /// Creates a new restriction service.
    pub fn new(store: Arc<dyn AuthorizationStore>, registry: Arc<TaskRegistry>) -> Self {
        Self { store, registry }
    }

    /// Flip the task's restriction flag.
    ///
    /// The server reports the resulting value and only that confirmed
    /// value is written into the local cache — the flag is never flipped
    /// optimistically, so a failed round-trip leaves local and remote
    /// state agreeing. Returns the new flag.
    pub async fn toggle(&self, task: &TaskRef) -> AppResult<bool> {
        let restriction = self.store.toggle_restriction(task).await?;
        self.registry.set_restriction(&task.task_id, restriction);
        info!(task = %task, restriction, "Restriction toggled");
        Ok(restriction)
    }
}
