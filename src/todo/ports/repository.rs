//! Repository port for todo persistence, lookup, and filtering.

use crate::todo::domain::{NewTodo, Todo, TodoChanges, TodoFilter, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Absent rows surface as `None`/`false` rather than errors: translating a
/// missing id into a not-found failure is a service-layer decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new row, returning the stored todo with its
    /// storage-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the storage engine
    /// rejects the insert.
    async fn insert(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the row does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns all todos matching the filter, newest first (descending id).
    ///
    /// An empty result is not an error.
    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>>;

    /// Merges the given field overrides into an existing row and persists
    /// all mutable fields.
    ///
    /// The read-merge-write runs atomically with respect to concurrent
    /// updates of the same row. Returns `None` when the row does not exist.
    async fn update(&self, id: TodoId, changes: &TodoChanges)
    -> TodoRepositoryResult<Option<Todo>>;

    /// Removes a row permanently.
    ///
    /// Returns `false` when no row was affected.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
