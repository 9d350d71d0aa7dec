//! Top-level admin handlers.
//!
//! Every error stops here: operations resolve to a [`Notice`], the
//! underlying error is logged for diagnostics only, and nothing else
//! propagates to the caller.

use std::sync::Arc;

use tracing::{error, info};

use meetbot_core::error::{AppError, ErrorKind};
use meetbot_core::result::AppResult;
use meetbot_core::traits::{AuthorizationStore, BotRegistrar};
use meetbot_entity::bot::OwnerProfile;
use meetbot_entity::notice::Notice;

use crate::access::AccessEditor;
use crate::provision::{ProvisionError, ProvisionService};
use crate::registry::TaskRegistry;
use crate::restriction::RestrictionService;

/// The admin surface over one owner's cached tasks.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    store: Arc<dyn AuthorizationStore>,
    registry: Arc<TaskRegistry>,
    restriction: RestrictionService,
    provision: ProvisionService,
}

impl AdminConsole {
    /// Creates a console over the given remote endpoints and task cache.
    pub fn new(
        store: Arc<dyn AuthorizationStore>,
        registrar: Arc<dyn BotRegistrar>,
        registry: Arc<TaskRegistry>,
    ) -> Self {
        Self {
            restriction: RestrictionService::new(store.clone(), registry.clone()),
            provision: ProvisionService::new(registrar, registry.clone()),
            store,
            registry,
        }
    }

    /// The shared task cache.
    pub fn registry(&self) -> &Arc<TaskRegistry> {
        &self.registry
    }

    /// Open an access-list editing session over the task's last-applied
    /// list.
    pub fn open_access_editor(&self, task_id: &str) -> AppResult<AccessEditor> {
        let task = self
            .registry
            .get(task_id)
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;
        Ok(AccessEditor::open(
            task.reference(),
            task.meeting.access_list.clone(),
            self.store.clone(),
            self.registry.clone(),
        ))
    }

    /// Commit the editor's draft and report the outcome.
    pub async fn save_access_list(&self, editor: &mut AccessEditor) -> Notice {
        match editor.commit().await {
            Ok(committed) => {
                info!(task = %editor.task(), members = committed.len(), "Access list saved");
                Notice::success("Access list updated successfully")
            }
            Err(err) => {
                error!(task = %editor.task(), error = %err, "Error updating access list");
                Notice::error("Failed to update access list")
            }
        }
    }

    /// Flip the task's restriction flag and report the outcome.
    pub async fn toggle_restriction(&self, task_id: &str) -> Notice {
        let Some(task) = self.registry.get(task_id) else {
            error!(task_id, "Restriction toggle for unknown task");
            return Notice::error("Failed to toggle access restriction");
        };
        match self.restriction.toggle(&task.reference()).await {
            Ok(true) => Notice::success("Access restriction enabled"),
            Ok(false) => Notice::success("Access restriction disabled"),
            Err(err) => {
                error!(task_id, error = %err, "Error toggling bot restriction");
                Notice::error("Failed to toggle access restriction")
            }
        }
    }

    /// Provision an assistant bot for the task and report the outcome.
    pub async fn create_bot(&self, task_id: &str, owner: &OwnerProfile) -> Notice {
        let Some(task) = self.registry.get(task_id) else {
            return Notice::error("Meeting data not available");
        };
        match self.provision.create_bot(&task, owner).await {
            Ok(provision) => {
                info!(task_id, bot_id = %provision.bot_id, "Bot assistant created");
                Notice::success("Bot assistant created successfully")
            }
            Err(ProvisionError::Registration(err)) => {
                error!(task_id, error = %err, "Error creating bot assistant");
                registration_notice(err)
            }
            Err(ProvisionError::Activation { provision, source }) => {
                error!(
                    task_id,
                    bot_id = %provision.bot_id,
                    error = %source,
                    "Bot registered but activation failed"
                );
                Notice::error("Failed to create bot assistant")
            }
        }
    }
}

/// Surface the server's human-readable message when the registration
/// endpoint supplied one; transport and decode failures (which keep their
/// underlying cause attached) fall back to the generic message.
fn registration_notice(err: AppError) -> Notice {
    if err.kind == ErrorKind::ExternalService && err.source.is_none() {
        Notice::error(err.message)
    } else {
        Notice::error("Failed to create bot assistant")
    }
}
