//! Application services for todo orchestration.

mod todos;

pub use todos::{
    CreateTodoRequest, ListTodosQuery, TodoService, TodoServiceError, TodoServiceResult,
    UpdateTodoRequest,
};
