//! Bot provisioning entity models.

use serde::{Deserialize, Serialize};

use meetbot_core::types::BotId;

/// The admin identity whose credentials seed bot registration payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerProfile {
    /// Username of the owning account.
    pub username: String,
    /// Contact number, if the account has one.
    pub mobile_no: Option<String>,
    /// Model API key the bot account inherits.
    pub api_key: String,
}

/// Where the provisioning saga got to.
///
/// Registration and activation are independent remote calls; `Pending`
/// is the defined intermediate state when the identity exists but the
/// task's activation flag was never confirmed. No compensation or retry
/// is attempted from that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationState {
    /// Both saga steps confirmed.
    Activated,
    /// Identity registered, activation flag not confirmed.
    Pending,
}

/// Outcome of a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotProvision {
    /// Server-assigned id of the registered bot identity.
    pub bot_id: BotId,
    /// How far the saga got.
    pub activation: ActivationState,
}

impl BotProvision {
    /// Whether both saga steps completed.
    pub fn is_activated(&self) -> bool {
        self.activation == ActivationState::Activated
    }
}
