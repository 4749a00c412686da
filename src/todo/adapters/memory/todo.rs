//! In-memory repository for todo service and HTTP tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{
        NewTodo, PersistedTodoData, StatusFilter, Todo, TodoChanges, TodoFilter, TodoId, TodoTitle,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Ids are assigned from a monotonic counter, matching the storage
/// contract of the SQLite adapter. Substring search is ASCII
/// case-insensitive to mirror SQLite's default `LIKE` comparison.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_state(
        &self,
    ) -> TodoRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|_| poisoned_lock())
    }

    fn read_state(
        &self,
    ) -> TodoRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|_| poisoned_lock())
    }
}

fn poisoned_lock() -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other("in-memory repository lock poisoned"))
}

/// Mirrors the SQLite adapter's conjunctive WHERE clause.
fn matches_filter(todo: &Todo, filter: &TodoFilter) -> bool {
    if let Some(term) = filter.search() {
        let haystack = todo.title().as_str().to_ascii_lowercase();
        if !haystack.contains(&term.to_ascii_lowercase()) {
            return false;
        }
    }
    let status_ok = match filter.status() {
        StatusFilter::All => true,
        StatusFilter::Completed => todo.completed(),
        StatusFilter::Pending => !todo.completed(),
    };
    if !status_ok {
        return false;
    }
    filter
        .priority()
        .is_none_or(|priority| todo.priority() == priority)
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self.write_state()?;
        state.next_id += 1;
        let id = state.next_id;

        let todo = Todo::from_persisted(PersistedTodoData {
            id: TodoId::new(id),
            title: TodoTitle::from_persisted(new_todo.title.as_str().to_owned()),
            completed: new_todo.completed,
            priority: new_todo.priority,
            created_at: new_todo.created_at,
        });
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.read_state()?;
        Ok(state.todos.get(&id.into_inner()).cloned())
    }

    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.read_state()?;
        Ok(state
            .todos
            .values()
            .rev()
            .filter(|todo| matches_filter(todo, filter))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: TodoId,
        changes: &TodoChanges,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let mut state = self.write_state()?;
        let Some(existing) = state.todos.get(&id.into_inner()) else {
            return Ok(None);
        };

        let merged = Todo::from_persisted(PersistedTodoData {
            id: existing.id(),
            title: changes
                .title
                .clone()
                .unwrap_or_else(|| existing.title().clone()),
            completed: changes.completed.unwrap_or_else(|| existing.completed()),
            priority: changes.priority.unwrap_or_else(|| existing.priority()),
            created_at: existing.created_at(),
        });
        state.todos.insert(id.into_inner(), merged.clone());
        Ok(Some(merged))
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.write_state()?;
        Ok(state.todos.remove(&id.into_inner()).is_some())
    }
}
