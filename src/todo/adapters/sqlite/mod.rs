//! SQLite adapters for todo persistence.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTodoRepository, TodoSqlitePool, build_pool, ensure_schema};
