//! Diesel row models for todo persistence.

use super::schema::todos;
use crate::todo::domain::{NewTodo, iso8601};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Storage-assigned row identifier.
    pub id: i64,
    /// Persisted title text.
    pub title: String,
    /// Completion flag as stored (0/1).
    pub completed: i32,
    /// Priority as stored (lowercase text).
    pub priority: String,
    /// Creation timestamp as stored (RFC 3339 text).
    pub created_at: String,
}

/// Insert model for todo records; the id column is storage-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Title text.
    pub title: String,
    /// Completion flag as 0/1.
    pub completed: i32,
    /// Priority as lowercase text.
    pub priority: String,
    /// Creation timestamp as RFC 3339 text.
    pub created_at: String,
}

impl NewTodoRow {
    /// Maps a validated draft to its storage representation.
    #[must_use]
    pub fn from_domain(new_todo: &NewTodo) -> Self {
        Self {
            title: new_todo.title.as_str().to_owned(),
            completed: i32::from(new_todo.completed),
            priority: new_todo.priority.as_str().to_owned(),
            created_at: iso8601::to_string(&new_todo.created_at),
        }
    }
}
