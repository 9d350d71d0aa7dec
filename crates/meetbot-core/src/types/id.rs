//! Newtype wrappers for server-assigned identifiers.
//!
//! Using distinct types prevents accidentally passing a bot identity id
//! where a task id string is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a registered bot identity.
///
/// This is the `userId` value returned by the registration endpoint; the
/// backend stores bot identities alongside regular accounts, so the id is
/// an opaque string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotId(pub String);

impl BotId {
    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
