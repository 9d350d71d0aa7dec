//! Principal identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier (email address or username) granted or denied access to
/// a meeting-bot resource.
///
/// A principal is always a non-empty, trimmed string. Construction through
/// [`Principal::parse`] enforces this; empty or whitespace-only input is
/// rejected as `None` rather than an error, because the editor treats it
/// as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Parse a candidate identifier, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing remains after trimming.
    pub fn parse(candidate: &str) -> Option<Self> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
