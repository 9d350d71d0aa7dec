//! Typed identifiers shared across the MeetBot crates.

pub mod id;
pub mod principal;
pub mod resource;

pub use id::BotId;
pub use principal::Principal;
pub use resource::TaskRef;
