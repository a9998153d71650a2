//! Task tracking.
//!
//! A task carries a title, a description and a completion flag. The
//! [`services::TaskService`] validates input and mediates access to a
//! [`ports::TaskRepository`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
