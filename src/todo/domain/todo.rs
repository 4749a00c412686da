//! Todo aggregate root and creation/mutation parameter objects.

use super::{Priority, TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RFC 3339 serialisation with millisecond precision and `Z` suffix.
///
/// Creation timestamps travel as text both on the wire and in storage, so
/// one fixed rendering keeps round-trips byte-stable.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Renders a timestamp in the canonical wire format.
    #[must_use]
    pub fn to_string(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parses a timestamp from any RFC 3339 rendering.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`chrono::ParseError`] when the text is not a
    /// valid RFC 3339 timestamp.
    pub fn parse(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(text).map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Serde serialiser for [`DateTime<Utc>`] fields.
    ///
    /// # Errors
    ///
    /// Propagates serialiser failures.
    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_string(timestamp))
    }

    /// Serde deserialiser for [`DateTime<Utc>`] fields.
    ///
    /// # Errors
    ///
    /// Fails when the text is not a valid RFC 3339 timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }
}

/// Coerces a loosely-typed completion flag to a boolean.
///
/// Accepts JSON booleans, the numbers `1`/`0`, and the strings
/// `"1"`/`"0"`/`"true"`/`"false"`; every other value coerces to `false`
/// rather than erroring. This permissive rule is part of the public
/// contract (see `DESIGN.md` for the open question around it).
#[must_use]
pub fn coerce_completed(raw: &Value) -> bool {
    match raw {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_i64() == Some(1),
        Value::String(text) => text == "1" || text == "true",
        _ => false,
    }
}

/// Todo aggregate root.
///
/// Serialises to the public wire representation: `id`, `title`,
/// `completed`, `priority`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    completed: bool,
    priority: Priority,
    #[serde(with = "iso8601")]
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Storage-assigned identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: TodoTitle,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            priority: data.priority,
            created_at: data.created_at,
        }
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Validated draft of a todo awaiting its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Validated title.
    pub title: TodoTitle,
    /// Coerced completion flag.
    pub completed: bool,
    /// Validated priority.
    pub priority: Priority,
    /// Creation timestamp, sourced from the injected clock.
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    /// Creates a draft stamped with the current clock time.
    #[must_use]
    pub fn new(title: TodoTitle, completed: bool, priority: Priority, clock: &dyn Clock) -> Self {
        Self {
            title,
            completed,
            priority,
            created_at: clock.utc(),
        }
    }
}

/// Validated field overrides for the update operation.
///
/// `None` fields retain the persisted value; `Some` fields override it. The
/// merge with the existing row happens inside the repository so the
/// read-merge-write cannot interleave with a concurrent update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    /// Replacement title, already validated.
    pub title: Option<TodoTitle>,
    /// Replacement completion flag, already coerced.
    pub completed: Option<bool>,
    /// Replacement priority, already validated.
    pub priority: Option<Priority>,
}
