//! Bot provisioning saga.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use meetbot_core::error::AppError;
use meetbot_core::traits::BotRegistrar;
use meetbot_entity::bot::{ActivationState, BotProvision, OwnerProfile};
use meetbot_entity::task::Task;

use crate::registry::TaskRegistry;

/// Why a provisioning run did not fully complete.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Identity creation failed; no bot exists.
    #[error("bot registration failed: {0}")]
    Registration(#[source] AppError),
    /// The identity exists but the activation flag was not confirmed.
    ///
    /// The carried provision is the defined intermediate state of the
    /// saga: `activation` is [`ActivationState::Pending`] and no
    /// compensation is attempted.
    #[error("bot registered but activation not confirmed: {source}")]
    Activation {
        /// The partial provisioning state, bot id included.
        provision: BotProvision,
        /// The activation failure.
        #[source]
        source: AppError,
    },
}

/// Creates bot identities for meeting tasks.
///
/// Provisioning is a two-step saga of independent remote calls: register
/// the identity, then mark the task bot-activated. A failure after
/// registration leaves the partial state in place — the error carries it
/// — and the local cache is only updated once both steps confirmed.
#[derive(Debug, Clone)]
pub struct ProvisionService {
    /// Remote identity registry.
    registrar: Arc<dyn BotRegistrar>,
    /// Local task cache.
    registry: Arc<TaskRegistry>,
}

impl ProvisionService {
    /// Creates a new provisioning service.
    pub fn new(registrar: Arc<dyn BotRegistrar>, registry: Arc<TaskRegistry>) -> Self {
        Self { registrar, registry }
    }

    /// Run the provisioning saga for `task`.
    pub async fn create_bot(
        &self,
        task: &Task,
        owner: &OwnerProfile,
    ) -> Result<BotProvision, ProvisionError> {
        let payload = task.bot_payload(owner);
        let task_ref = task.reference();

        let bot_id = self
            .registrar
            .register_bot(&payload)
            .await
            .map_err(ProvisionError::Registration)?;
        info!(task = %task_ref, bot_id = %bot_id, "Bot identity registered");

        let pending = BotProvision {
            bot_id,
            activation: ActivationState::Pending,
        };
        match self.registrar.set_bot_activated(&task_ref, true).await {
            Ok(true) => {
                self.registry.set_bot_activated(&task_ref.task_id, true);
                info!(task = %task_ref, bot_id = %pending.bot_id, "Bot activated");
                Ok(BotProvision {
                    activation: ActivationState::Activated,
                    ..pending
                })
            }
            Ok(false) => Err(ProvisionError::Activation {
                provision: pending,
                source: AppError::external_service("Server declined the activation update"),
            }),
            Err(source) => Err(ProvisionError::Activation {
                provision: pending,
                source,
            }),
        }
    }
}
