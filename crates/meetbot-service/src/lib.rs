//! # meetbot-service
//!
//! Admin services for the MeetBot platform: the access-list editor and
//! its reconciliation core, the restriction toggle, the bot-provisioning
//! saga, the shared task registry, and the console layer that converts
//! every outcome into a user-facing notice.

pub mod access;
pub mod console;
pub mod provision;
pub mod registry;
pub mod restriction;

pub use access::{AccessEditor, CommitError, ReconcileError};
pub use console::AdminConsole;
pub use provision::{ProvisionError, ProvisionService};
pub use registry::TaskRegistry;
pub use restriction::RestrictionService;
