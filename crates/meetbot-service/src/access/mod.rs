//! Access-list editing and reconciliation.

pub mod editor;
pub mod reconcile;

pub use editor::{AccessEditor, CommitError};
pub use reconcile::{ReconcileError, reconcile};
