//! # meetbot-client
//!
//! Reqwest-based client for the remote admin API. Implements the
//! [`AuthorizationStore`] and [`BotRegistrar`] traits from `meetbot-core`
//! over the backend's JSON endpoints.
//!
//! [`AuthorizationStore`]: meetbot_core::traits::AuthorizationStore
//! [`BotRegistrar`]: meetbot_core::traits::BotRegistrar

pub mod client;
pub mod wire;

pub use client::AdminApiClient;
