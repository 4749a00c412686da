//! Todo priority enumeration.

use super::TodoValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed three-value priority assigned to each todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Default priority for new todos.
    #[default]
    Low,
    /// Mid-tier priority.
    Medium,
    /// Highest priority.
    High,
}

impl Priority {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Validates an optional raw priority, defaulting when absent.
    ///
    /// An absent or empty value yields [`Priority::Low`]. Matching is exact:
    /// no trimming or case folding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`TodoValidationError::InvalidPriority`] when a non-empty
    /// value is outside the fixed set.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, TodoValidationError> {
        match raw {
            None | Some("") => Ok(Self::default()),
            Some(value) => Self::try_from(value),
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = TodoValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TodoValidationError::InvalidPriority),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
