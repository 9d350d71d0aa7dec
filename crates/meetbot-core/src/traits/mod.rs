//! Core traits defined in `meetbot-core` and implemented by other crates.

pub mod authorization;
pub mod registrar;

pub use authorization::AuthorizationStore;
pub use registrar::{BotRegistrar, CreateBot};
