//! Wire DTOs for the remote admin API.
//!
//! Field names follow the backend's camelCase JSON contract exactly;
//! domain types never cross this boundary unserialized.

use serde::{Deserialize, Serialize};

use meetbot_core::traits::CreateBot;
use meetbot_entity::access::AccessAction;

/// `POST /update-bot-access` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessUpdateRequest<'a> {
    /// Username of the task owner.
    pub owner_username: &'a str,
    /// Unique task id.
    pub task_id: &'a str,
    /// Principal being granted or revoked.
    pub target_username: &'a str,
    /// `"add"` or `"remove"`.
    pub action: AccessAction,
}

/// `POST /update-bot-access` acknowledgment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessUpdateResponse {
    /// Human-readable acknowledgment.
    #[serde(default)]
    pub message: Option<String>,
    /// The store's resulting access list, when echoed back.
    #[serde(default)]
    pub access_list: Option<Vec<String>>,
}

/// `POST /toggle-bot-restriction` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionToggleRequest<'a> {
    /// Username of the task owner.
    pub owner_username: &'a str,
    /// Unique task id.
    pub task_id: &'a str,
}

/// `POST /toggle-bot-restriction` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionToggleResponse {
    /// The new flag value as stored by the server.
    pub restriction: bool,
    /// Human-readable acknowledgment.
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /register` request body.
///
/// The backend reuses the owner's api key as the bot account's password,
/// so both wire fields map from the single `api_key` of [`CreateBot`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBotRequest<'a> {
    /// Display name.
    pub name: &'a str,
    /// Synthetic contact address.
    pub email: &'a str,
    /// Contact number, omitted when the owner has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<&'a str>,
    /// Bot account username (the task id).
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
    /// Model API key.
    pub gemini_api_key: &'a str,
    /// Subscription plan.
    pub plan: &'a str,
    /// Context prompt.
    pub prompt: &'a str,
}

impl<'a> From<&'a CreateBot> for RegisterBotRequest<'a> {
    fn from(request: &'a CreateBot) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            mobile_no: request.mobile_no.as_deref(),
            username: &request.username,
            password: &request.api_key,
            gemini_api_key: &request.api_key,
            plan: &request.plan,
            prompt: &request.prompt,
        }
    }
}

/// `POST /register` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBotResponse {
    /// Server-assigned id of the created identity.
    pub user_id: String,
}

/// `PATCH /tasks` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateRequest<'a> {
    /// Username of the task owner.
    pub user_id: &'a str,
    /// Unique task id.
    pub unique_task_id: &'a str,
    /// New activation flag value.
    pub bot_activated: bool,
}

/// `PATCH /tasks` response.
#[derive(Debug, Deserialize)]
pub struct TaskUpdateResponse {
    /// Whether the server applied the update.
    pub success: bool,
}

/// Error body shape shared by the backend routes.
///
/// Some routes report under `message`, others under `msg`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    /// The human-readable message, whichever field carried it.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.msg)
    }
}
