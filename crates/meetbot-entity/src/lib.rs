//! # meetbot-entity
//!
//! Domain entity models for the MeetBot admin platform: access lists and
//! their diffs, meeting tasks, bot provisioning payloads, and user-facing
//! notices.

pub mod access;
pub mod bot;
pub mod notice;
pub mod task;

pub use access::{AccessAction, AccessChange, AccessDiff, AccessList, Phase};
pub use bot::{ActivationState, BotProvision, OwnerProfile};
pub use notice::{Notice, NoticeLevel};
pub use task::{MeetingState, MeetingStatus, Task};
