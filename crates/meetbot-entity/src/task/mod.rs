//! Meeting task domain entities.

pub mod model;

pub use model::{MeetingState, MeetingStatus, Task};
