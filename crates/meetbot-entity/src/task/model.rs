//! Meeting task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meetbot_core::traits::CreateBot;
use meetbot_core::types::{Principal, TaskRef};

use crate::access::AccessList;
use crate::bot::OwnerProfile;

/// Lifecycle status of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    /// No meeting scheduled yet.
    Pending,
    /// Scheduled with a meeting link.
    Scheduled,
    /// The meeting has taken place.
    Completed,
}

/// Per-meeting state attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingState {
    /// Meeting title.
    pub title: String,
    /// Free-form meeting description.
    pub description: String,
    /// Lifecycle status.
    pub status: MeetingStatus,
    /// Join link once scheduled.
    pub meeting_link: Option<String>,
    /// Scheduled start time.
    pub starts_at: Option<DateTime<Utc>>,
    /// Scheduled duration in minutes.
    pub duration_minutes: Option<u32>,
    /// Raw meeting notes/transcript captured for the bot prompt.
    pub raw_notes: String,
    /// Whether a bot identity has been created and activated for this task.
    pub bot_activated: bool,
    /// Whether access to the bot is restricted to the access list.
    pub restriction: bool,
    /// Last-known-applied authorized principal set.
    pub access_list: AccessList,
}

impl MeetingState {
    /// Creates a fresh meeting in pending state.
    ///
    /// The access list seeds with the owner so the creator can always
    /// reach their own bot.
    pub fn new(title: impl Into<String>, owner: &str) -> Self {
        let mut access_list = AccessList::new();
        if let Some(owner) = Principal::parse(owner) {
            access_list.insert(owner);
        }
        Self {
            title: title.into(),
            description: String::new(),
            status: MeetingStatus::Pending,
            meeting_link: None,
            starts_at: None,
            duration_minutes: None,
            raw_notes: String::new(),
            bot_activated: false,
            restriction: false,
            access_list,
        }
    }
}

/// A meeting-bot task: the resource every admin operation is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier within the owner's account.
    pub unique_task_id: String,
    /// Username of the owning account.
    pub owner: String,
    /// Topic context used to label the bot.
    pub topic_context: String,
    /// Task description.
    pub description: String,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Meeting state.
    pub meeting: MeetingState,
}

impl Task {
    /// Creates a new meeting task owned by `owner`.
    pub fn new(
        owner: impl Into<String>,
        unique_task_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let meeting = MeetingState::new(title, &owner);
        Self {
            unique_task_id: unique_task_id.into(),
            owner,
            topic_context: String::new(),
            description: String::new(),
            created_at: Utc::now(),
            meeting,
        }
    }

    /// The resource identity of this task.
    pub fn reference(&self) -> TaskRef {
        TaskRef::new(self.owner.clone(), self.unique_task_id.clone())
    }

    /// Build the identity-creation payload for this task's assistant bot.
    ///
    /// Field derivation: the bot is named after the topic context, falling
    /// back to the meeting title, falling back to a generic label; its
    /// username is the task id so identity and task stay bound 1:1; the
    /// prompt carries the raw meeting notes, falling back to the task
    /// description.
    pub fn bot_payload(&self, owner: &OwnerProfile) -> CreateBot {
        let name = first_non_empty(&[&self.topic_context, &self.meeting.title])
            .unwrap_or("Meeting Assistant");
        let prompt = first_non_empty(&[&self.meeting.raw_notes, &self.description]).unwrap_or("");
        CreateBot {
            name: name.to_string(),
            email: format!("{}@meetingbot.local", self.unique_task_id),
            mobile_no: owner.mobile_no.clone(),
            username: self.unique_task_id.clone(),
            api_key: owner.api_key.clone(),
            plan: "meeting".to_string(),
            prompt: prompt.to_string(),
        }
    }
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|s| !s.trim().is_empty())
}
