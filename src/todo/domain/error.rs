//! Error types for todo input validation.

use thiserror::Error;

/// Errors returned while validating client-supplied todo input.
///
/// Display strings are the exact client-visible messages; the HTTP layer
/// forwards them verbatim in 400 responses together with [`field`].
///
/// [`field`]: TodoValidationError::field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoValidationError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// The trimmed title exceeds the maximum length.
    #[error("Title is too long (max 200)")]
    TitleTooLong,

    /// The priority value is outside the fixed set.
    #[error("Invalid priority")]
    InvalidPriority,

    /// The status filter value is outside the fixed set.
    #[error("Invalid status (all|completed|pending)")]
    InvalidStatus,
}

impl TodoValidationError {
    /// Names the offending input field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TitleRequired | Self::TitleTooLong => "title",
            Self::InvalidPriority => "priority",
            Self::InvalidStatus => "status",
        }
    }
}
