//! Identifier types for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted todo record.
///
/// Identifiers are assigned by the storage engine on insert and are
/// monotonically non-decreasing, so descending id order doubles as
/// most-recently-created-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wraps a storage-assigned row identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped row identifier.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
