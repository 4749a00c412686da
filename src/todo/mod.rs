//! Todo records: validation, filtering, persistence, and orchestration.
//!
//! This module implements the task-tracking core: creating todos from
//! loosely-typed input, listing them through validated filters, and
//! applying partial updates. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
