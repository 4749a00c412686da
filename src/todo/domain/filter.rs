//! Query-time filter predicates for the list operation.

use super::{Priority, TodoTitle, TodoValidationError};

/// Completion-status predicate for listing todos.
///
/// Status is a query parameter, not a stored field: `completed` and
/// `pending` project the boolean completion flag, `all` adds no clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No completion clause.
    #[default]
    All,
    /// Only todos with `completed = true`.
    Completed,
    /// Only todos with `completed = false`.
    Pending,
}

impl StatusFilter {
    /// Returns the canonical query-parameter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Validates an optional raw status, defaulting to [`StatusFilter::All`]
    /// when absent.
    ///
    /// Unlike the priority filter, an explicit empty string is invalid: the
    /// accepted values are exactly `all`, `completed`, and `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoValidationError::InvalidStatus`] for any other value.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, TodoValidationError> {
        raw.map_or(Ok(Self::default()), Self::try_from)
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = TodoValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            _ => Err(TodoValidationError::InvalidStatus),
        }
    }
}

/// Validated conjunctive filter for the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    search: Option<String>,
    status: StatusFilter,
    priority: Option<Priority>,
}

impl TodoFilter {
    /// Builds a filter from raw query parameters, failing fast on the first
    /// invalid one.
    ///
    /// Validation order matches the public contract: status first, then
    /// priority. The search term is truncated to [`TodoTitle::MAX_LENGTH`]
    /// characters before matching; an empty term means "no search clause".
    /// An absent or empty priority means "no priority clause".
    ///
    /// # Errors
    ///
    /// Returns [`TodoValidationError::InvalidStatus`] or
    /// [`TodoValidationError::InvalidPriority`] when the corresponding
    /// parameter is present and outside its fixed set.
    pub fn from_raw(
        q: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> Result<Self, TodoValidationError> {
        let status = StatusFilter::parse_or_default(status)?;
        let priority = match priority {
            None | Some("") => None,
            Some(value) => Some(Priority::try_from(value)?),
        };
        let search = q
            .map(|term| term.chars().take(TodoTitle::MAX_LENGTH).collect::<String>())
            .filter(|term| !term.is_empty());

        Ok(Self {
            search,
            status,
            priority,
        })
    }

    /// Returns the substring search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the completion-status predicate.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the exact-match priority predicate, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }
}
