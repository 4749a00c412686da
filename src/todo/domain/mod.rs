//! Domain model for todo records.
//!
//! The domain owns input validation and normalization: titles are trimmed
//! and length-checked, priorities and status filters are matched against
//! their fixed sets, and the loosely-typed completion flag is coerced to a
//! boolean. Infrastructure concerns stay outside this boundary.

mod error;
mod filter;
mod ids;
mod priority;
mod title;
mod todo;

pub use error::TodoValidationError;
pub use filter::{StatusFilter, TodoFilter};
pub use ids::TodoId;
pub use priority::Priority;
pub use title::TodoTitle;
pub use todo::{NewTodo, PersistedTodoData, Todo, TodoChanges, coerce_completed, iso8601};
