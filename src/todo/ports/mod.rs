//! Port contracts for todo persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};

#[cfg(test)]
pub use repository::MockTodoRepository;
