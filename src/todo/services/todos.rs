//! Application service for todo creation, filtering, and mutation.
//!
//! The service owns the validate-then-construct pipeline: raw request
//! payloads are normalized into domain values before any repository call,
//! so an invalid request never touches storage.

use crate::todo::{
    domain::{
        NewTodo, Priority, Todo, TodoChanges, TodoFilter, TodoId, TodoTitle, TodoValidationError,
        coerce_completed,
    },
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo.
///
/// Every field is optional on the wire; validation decides which absences
/// are acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodoRequest {
    /// Raw title; trimmed and required.
    pub title: Option<String>,
    /// Loosely-typed completion flag; anything unrecognized coerces to
    /// `false`.
    pub completed: Option<Value>,
    /// Raw priority; absent or empty defaults to `low`.
    pub priority: Option<String>,
}

/// Request payload for updating a todo.
///
/// Absent fields retain the persisted value; present fields are validated
/// with the same rules as creation and override it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodoRequest {
    /// Replacement title, validated when present.
    pub title: Option<String>,
    /// Replacement completion flag, coerced when present.
    pub completed: Option<Value>,
    /// Replacement priority, validated when present; an empty string resets
    /// to `low`.
    pub priority: Option<String>,
}

/// Raw query parameters for the list operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListTodosQuery {
    /// Substring search over titles.
    pub q: Option<String>,
    /// Completion-status filter: `all`, `completed`, or `pending`.
    pub status: Option<String>,
    /// Exact-match priority filter; empty means no filter.
    pub priority: Option<String>,
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Client input failed validation.
    #[error(transparent)]
    Validation(#[from] TodoValidationError),

    /// The addressed todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo orchestration service.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TodoService {
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(
        repository: Arc<dyn TodoRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self { repository, clock }
    }

    /// Creates a todo from a raw request payload.
    ///
    /// The title is validated first, then the priority; the completion flag
    /// is coerced and cannot fail. The creation timestamp comes from the
    /// injected clock and the identifier from storage.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] for invalid input and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTodoRequest) -> TodoServiceResult<Todo> {
        let title = TodoTitle::parse(request.title.as_deref().unwrap_or_default())?;
        let priority = Priority::parse_or_default(request.priority.as_deref())?;
        let completed = request.completed.as_ref().is_some_and(coerce_completed);

        let draft = NewTodo::new(title, completed, priority, self.clock.as_ref());
        Ok(self.repository.insert(&draft).await?)
    }

    /// Lists todos matching the given raw filter parameters, newest first.
    ///
    /// Filters are validated before any query executes; an empty result is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] for an invalid status or
    /// priority filter and [`TodoServiceError::Repository`] when the query
    /// fails.
    pub async fn list(&self, query: ListTodosQuery) -> TodoServiceResult<Vec<Todo>> {
        let filter = TodoFilter::from_raw(
            query.q.as_deref(),
            query.status.as_deref(),
            query.priority.as_deref(),
        )?;
        let todos = self.repository.list(&filter).await?;

        if todos.is_empty() {
            tracing::info!(
                q = filter.search().unwrap_or_default(),
                status = filter.status().as_str(),
                priority = filter.priority().map(Priority::as_str).unwrap_or_default(),
                "list returned no matches"
            );
        }
        Ok(todos)
    }

    /// Returns the todo with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the id is unknown and
    /// [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }

    /// Applies a partial update to an existing todo.
    ///
    /// The existence check runs before field validation, so an unknown id
    /// is reported as not-found even when the patch is also invalid.
    /// Present fields are validated with creation rules and merged into the
    /// stored row inside a single storage transaction; all mutable fields
    /// are persisted, even unchanged ones.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] for an unknown id,
    /// [`TodoServiceError::Validation`] for invalid patch fields, and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TodoId, request: UpdateTodoRequest) -> TodoServiceResult<Todo> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TodoServiceError::NotFound);
        }

        let changes = TodoChanges {
            title: request.title.as_deref().map(TodoTitle::parse).transpose()?,
            completed: request.completed.as_ref().map(coerce_completed),
            priority: request
                .priority
                .as_deref()
                .map(|raw| Priority::parse_or_default(Some(raw)))
                .transpose()?,
        };

        self.repository
            .update(id, &changes)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }

    /// Permanently removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no row was affected and
    /// [`TodoServiceError::Repository`] when the delete fails.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(TodoServiceError::NotFound)
        }
    }
}
