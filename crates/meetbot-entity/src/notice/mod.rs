//! User-facing outcome notices.

pub mod model;

pub use model::{Notice, NoticeLevel};
