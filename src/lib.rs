//! Taskbook: a personal task-tracking REST API.
//!
//! This crate provides a single-table todo store behind an HTTP/JSON
//! surface: create, list (with validated filters), read, update, and
//! delete operations over todo records.
//!
//! # Architecture
//!
//! The todo core follows hexagonal architecture principles:
//!
//! - **Domain**: Pure validation and normalization logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: Domain model, persistence port and adapters, and services
//! - [`http`]: actix-web route handlers and error mapping
//! - [`config`]: Environment-driven server configuration

pub mod config;
pub mod http;
pub mod todo;
