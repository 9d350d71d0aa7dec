//! Computed access changes and reconciliation phases.

use std::fmt;

use serde::{Deserialize, Serialize};

use meetbot_core::types::Principal;

/// The direction of a single access change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessAction {
    /// Authorize the principal.
    Add,
    /// Withdraw the principal's authorization.
    Remove,
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// One computed change of a reconciliation run.
///
/// Changes are produced transiently from an [`AccessDiff`] and consumed
/// within a single run; they are never persisted. A failed run reports the
/// changes it did not get to apply.
///
/// [`AccessDiff`]: crate::access::AccessDiff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessChange {
    /// The principal being added or removed.
    pub principal: Principal,
    /// The direction of the change.
    pub action: AccessAction,
}

impl AccessChange {
    /// Creates an add change.
    pub fn add(principal: Principal) -> Self {
        Self {
            principal,
            action: AccessAction::Add,
        }
    }

    /// Creates a remove change.
    pub fn remove(principal: Principal) -> Self {
        Self {
            principal,
            action: AccessAction::Remove,
        }
    }
}

/// One of the two reconciliation stages.
///
/// The remove phase always runs to completion before the add phase starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Revocations (`before − after`).
    Remove,
    /// Grants (`after − before`).
    Add,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove => write!(f, "remove"),
            Self::Add => write!(f, "add"),
        }
    }
}
