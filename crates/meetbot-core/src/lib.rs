//! # meetbot-core
//!
//! Core crate for the MeetBot admin platform. Contains traits,
//! configuration schemas, typed identifiers, the logging bootstrap,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other MeetBot crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
