//! Access list model and diff computation.

use serde::{Deserialize, Serialize};

use meetbot_core::types::Principal;

use super::change::AccessChange;

/// The set of principals authorized for one meeting-bot resource.
///
/// Principals are unique; insertion order is preserved because it is the
/// display order, while authorization semantics are order-irrelevant. The
/// authoritative copy lives in the remote store — an `AccessList` held
/// locally is either the last-known-applied state or an editor draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Principal>", from = "Vec<Principal>")]
pub struct AccessList {
    entries: Vec<Principal>,
}

impl AccessList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of principals in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the principal is present.
    pub fn contains(&self, principal: &Principal) -> bool {
        self.entries.contains(principal)
    }

    /// Append a principal unless already present.
    ///
    /// A duplicate insert is a silent no-op, not an error; returns whether
    /// the list changed.
    pub fn insert(&mut self, principal: Principal) -> bool {
        if self.contains(&principal) {
            return false;
        }
        self.entries.push(principal);
        true
    }

    /// Remove a principal if present; removing an absent principal is a
    /// no-op. Returns whether the list changed.
    pub fn remove(&mut self, principal: &Principal) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p != principal);
        self.entries.len() != before
    }

    /// Iterate principals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.entries.iter()
    }

    /// Compute the change set from `self` (the last-applied state) to
    /// `after` (the edited state).
    ///
    /// `to_remove` is `self − after`, `to_add` is `after − self`, each in
    /// the source list's order. Principals present in both sides produce
    /// no entry.
    pub fn diff(&self, after: &AccessList) -> AccessDiff {
        AccessDiff {
            to_remove: self
                .entries
                .iter()
                .filter(|p| !after.contains(p))
                .cloned()
                .collect(),
            to_add: after
                .entries
                .iter()
                .filter(|p| !self.contains(p))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Principal>> for AccessList {
    fn from(entries: Vec<Principal>) -> Self {
        let mut list = Self::new();
        for principal in entries {
            list.insert(principal);
        }
        list
    }
}

impl From<AccessList> for Vec<Principal> {
    fn from(list: AccessList) -> Self {
        list.entries
    }
}

impl FromIterator<Principal> for AccessList {
    fn from_iter<I: IntoIterator<Item = Principal>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// The minimal change set between two access lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDiff {
    /// Principals authorized before but absent from the edited state.
    pub to_remove: Vec<Principal>,
    /// Principals absent before but present in the edited state.
    pub to_add: Vec<Principal>,
}

impl AccessDiff {
    /// Whether there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }

    /// Total number of remote calls the diff will issue.
    pub fn len(&self) -> usize {
        self.to_remove.len() + self.to_add.len()
    }

    /// The diff as an ordered change sequence, removals first.
    pub fn changes(&self) -> Vec<AccessChange> {
        self.to_remove
            .iter()
            .cloned()
            .map(AccessChange::remove)
            .chain(self.to_add.iter().cloned().map(AccessChange::add))
            .collect()
    }
}
