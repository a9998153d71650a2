//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations document their own ordering and concurrency guarantees.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task, or replaces the stored task with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the underlying storage fails.
    fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the underlying storage fails.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task in implementation-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the underlying storage fails.
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes the task with the given ID. Absent IDs are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the underlying storage fails.
    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The storage backend could not be reached.
    #[error("task storage unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
