//! HTTP surface for the todo API.
//!
//! Handlers stay thin: extract, delegate to [`crate::todo::services`], map
//! the outcome through [`error::ApiError`].

pub mod api;
pub mod error;

pub use api::{configure, fallback_not_found, json_config};
pub use error::{ApiError, ErrorBody, ErrorDetail};
