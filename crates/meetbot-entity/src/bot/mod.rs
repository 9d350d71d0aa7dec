//! Bot provisioning domain entities.

pub mod model;

pub use model::{ActivationState, BotProvision, OwnerProfile};
