//! Validated todo title scalar.

use super::TodoValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed todo title of at most [`TodoTitle::MAX_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Maximum title length in characters, counted after trimming.
    pub const MAX_LENGTH: usize = 200;

    /// Validates and normalizes a raw title.
    ///
    /// The value is trimmed before validation; the stored title is the
    /// trimmed form.
    ///
    /// # Errors
    ///
    /// Returns [`TodoValidationError::TitleRequired`] when the trimmed value
    /// is empty and [`TodoValidationError::TitleTooLong`] when it exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(raw: &str) -> Result<Self, TodoValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::TitleRequired);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(TodoValidationError::TitleTooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Reconstructs a title from persisted storage without re-validation.
    ///
    /// Storage rows only ever hold titles that passed [`Self::parse`] at
    /// write time.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
