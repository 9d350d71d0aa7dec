//! Bot identity registration trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{BotId, TaskRef};

/// Identity-creation payload for a new meeting bot.
///
/// The backend registers bots through the same account pipeline as regular
/// users, so the payload mirrors an account signup. Field derivation from
/// a task lives in `meetbot-entity`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateBot {
    /// Display name of the bot.
    pub name: String,
    /// Synthetic contact address (`<task_id>@meetingbot.local`).
    pub email: String,
    /// Contact number inherited from the owner account, if any.
    pub mobile_no: Option<String>,
    /// Account username; the task id, so the bot is bound 1:1 to its task.
    pub username: String,
    /// Model API key inherited from the owner account.
    pub api_key: String,
    /// Subscription plan the bot account runs under.
    pub plan: String,
    /// Context prompt seeded from the meeting data.
    pub prompt: String,
}

/// Remote registry that creates bot identities and marks tasks as
/// bot-activated.
///
/// Registration and activation are two independent remote calls; an
/// implementation must not couple them. Callers own the saga ordering and
/// the handling of partial state.
#[async_trait]
pub trait BotRegistrar: Send + Sync + std::fmt::Debug + 'static {
    /// Create a new bot identity and return its server-assigned id.
    async fn register_bot(&self, request: &CreateBot) -> AppResult<BotId>;

    /// Set the task's bot-activation flag. Returns the server's `success`
    /// acknowledgment.
    async fn set_bot_activated(&self, task: &TaskRef, activated: bool) -> AppResult<bool>;
}
