//! Resource identity for meeting-bot tasks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `(owner, task)` pair scoping which meeting-bot resource an
/// operation targets.
///
/// Every remote authorization call is applied against the `TaskRef` that
/// was active when the operation began; the pair never changes mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskRef {
    /// Username of the owning account.
    pub owner: String,
    /// Unique task identifier within the owner's account.
    pub task_id: String,
}

impl TaskRef {
    /// Creates a new resource reference.
    pub fn new(owner: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            task_id: task_id.into(),
        }
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.task_id)
    }
}
