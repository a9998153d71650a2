//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned when task input violates an entity invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty or whitespace only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No title was supplied.
    #[error("task title is required")]
    MissingTitle,

    /// No description was supplied.
    #[error("task description is required")]
    MissingDescription,
}
