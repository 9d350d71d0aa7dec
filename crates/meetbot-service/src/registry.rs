//! Shared local cache of meeting-bot tasks.

use dashmap::DashMap;
use tracing::debug;

use meetbot_entity::access::AccessList;
use meetbot_entity::task::Task;

/// Caller-side cache of tasks plus the per-resource save guard.
///
/// Entries mirror server-confirmed state only: the mutators here are
/// called after a remote operation acknowledged the new value, never
/// optimistically. Updating one task leaves every other entry untouched.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    /// Tasks keyed by unique task id.
    tasks: DashMap<String, Task>,
    /// Task ids with a reconciliation run in flight.
    in_flight: DashMap<String, ()>,
}

impl TaskRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a task.
    pub fn insert(&self, task: Task) {
        self.tasks.insert(task.unique_task_id.clone(), task);
    }

    /// Fetch a snapshot of a task.
    pub fn get(&self, task_id: &str) -> Option<Task> {
        self.tasks.get(task_id).map(|entry| entry.clone())
    }

    /// Number of cached tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Store the committed access list for a task. Returns whether the
    /// task was present.
    pub fn set_access_list(&self, task_id: &str, list: AccessList) -> bool {
        match self.tasks.get_mut(task_id) {
            Some(mut task) => {
                task.meeting.access_list = list;
                true
            }
            None => {
                debug!(task_id, "Access list update for unknown task dropped");
                false
            }
        }
    }

    /// Store the server-confirmed restriction flag for a task. Returns
    /// whether the task was present.
    pub fn set_restriction(&self, task_id: &str, restriction: bool) -> bool {
        match self.tasks.get_mut(task_id) {
            Some(mut task) => {
                task.meeting.restriction = restriction;
                true
            }
            None => false,
        }
    }

    /// Store the server-confirmed activation flag for a task. Returns
    /// whether the task was present.
    pub fn set_bot_activated(&self, task_id: &str, activated: bool) -> bool {
        match self.tasks.get_mut(task_id) {
            Some(mut task) => {
                task.meeting.bot_activated = activated;
                true
            }
            None => false,
        }
    }

    /// Claim the save slot for a task. Returns `false` when a save is
    /// already running for it.
    pub fn begin_save(&self, task_id: &str) -> bool {
        self.in_flight.insert(task_id.to_string(), ()).is_none()
    }

    /// Release the save slot for a task.
    pub fn finish_save(&self, task_id: &str) {
        self.in_flight.remove(task_id);
    }
}
