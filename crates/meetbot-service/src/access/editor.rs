//! Access-list editor session.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use meetbot_core::error::AppError;
use meetbot_core::traits::AuthorizationStore;
use meetbot_core::types::{Principal, TaskRef};
use meetbot_entity::access::AccessList;

use super::reconcile::{ReconcileError, reconcile};
use crate::registry::TaskRegistry;

/// Why a commit did not complete.
#[derive(Debug, Error)]
pub enum CommitError {
    /// A save for this resource is already running.
    #[error("a save is already in flight for task {0}")]
    InFlight(TaskRef),
    /// The reconciliation run aborted.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl From<CommitError> for AppError {
    fn from(err: CommitError) -> Self {
        match err {
            CommitError::InFlight(task) => {
                AppError::conflict(format!("A save is already in flight for task {task}"))
            }
            CommitError::Reconcile(err) => err.into(),
        }
    }
}

/// One access-list editing session for a single meeting-bot resource.
///
/// Opening an editor clones the last-applied list into a draft; the draft
/// is mutated freely and nothing reaches the remote store until
/// [`commit`]. The draft is single-owner — it lives and dies with this
/// instance.
///
/// [`commit`]: AccessEditor::commit
#[derive(Debug)]
pub struct AccessEditor {
    /// Resource the session is scoped to, fixed at open time.
    task: TaskRef,
    /// Last-known-applied list; the diff base for commits.
    initial: AccessList,
    /// The working copy.
    draft: AccessList,
    /// Input buffer for the next principal to add.
    pending_entry: String,
    store: Arc<dyn AuthorizationStore>,
    registry: Arc<TaskRegistry>,
}

impl AccessEditor {
    /// Opens an editing session over `initial`.
    pub fn open(
        task: TaskRef,
        initial: AccessList,
        store: Arc<dyn AuthorizationStore>,
        registry: Arc<TaskRegistry>,
    ) -> Self {
        let draft = initial.clone();
        Self {
            task,
            initial,
            draft,
            pending_entry: String::new(),
            store,
            registry,
        }
    }

    /// The resource this session edits.
    pub fn task(&self) -> &TaskRef {
        &self.task
    }

    /// The current draft.
    pub fn draft(&self) -> &AccessList {
        &self.draft
    }

    /// The list the draft was opened from (advances on each commit).
    pub fn initial(&self) -> &AccessList {
        &self.initial
    }

    /// The pending-input buffer.
    pub fn pending_entry(&self) -> &str {
        &self.pending_entry
    }

    /// Replace the pending-input buffer.
    pub fn set_pending_entry(&mut self, input: impl Into<String>) {
        self.pending_entry = input.into();
    }

    /// Add the buffered entry to the draft.
    ///
    /// Empty input and duplicates are silent no-ops; the buffer is
    /// cleared only when the draft actually changed, so a rejected entry
    /// stays visible for correction. Returns whether the draft changed.
    pub fn add_pending_entry(&mut self) -> bool {
        let Some(principal) = Principal::parse(&self.pending_entry) else {
            return false;
        };
        if self.draft.insert(principal) {
            self.pending_entry.clear();
            true
        } else {
            false
        }
    }

    /// Add a principal to the draft; duplicate adds are no-ops.
    pub fn add_principal(&mut self, principal: Principal) -> bool {
        self.draft.insert(principal)
    }

    /// Remove a principal from the draft; absent principals are no-ops.
    pub fn remove_principal(&mut self, principal: &Principal) -> bool {
        self.draft.remove(principal)
    }

    /// Reconcile the draft against the remote store.
    ///
    /// At most one save may be in flight per resource; a re-entrant
    /// commit fails with [`CommitError::InFlight`] without issuing any
    /// remote call. On success the registry's applied list is updated,
    /// the committed list becomes the new diff base, and it is returned
    /// to the caller. On failure the draft is left untouched so the
    /// session can be corrected and retried.
    pub async fn commit(&mut self) -> Result<AccessList, CommitError> {
        if !self.registry.begin_save(&self.task.task_id) {
            return Err(CommitError::InFlight(self.task.clone()));
        }

        let result = reconcile(self.store.as_ref(), &self.task, &self.initial, &self.draft).await;
        self.registry.finish_save(&self.task.task_id);

        let committed = result?;
        self.registry
            .set_access_list(&self.task.task_id, committed.clone());
        self.initial = committed.clone();
        Ok(committed)
    }

    /// Discard the draft; no remote calls occur.
    pub fn cancel(self) {
        debug!(task = %self.task, "Access edit cancelled");
    }
}
