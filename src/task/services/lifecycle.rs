//! Service layer for task creation, completion, listing and removal.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use log::{debug, info};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`TaskService`] operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task violates a domain invariant.
    #[error(transparent)]
    InvalidTask(#[from] TaskDomainError),

    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking service.
///
/// Every operation is a single synchronous delegation to the repository.
/// Repository errors are returned unchanged inside
/// [`TaskServiceError::Repository`].
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service over a shared repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a task.
    ///
    /// Tasks with duplicate titles are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTask`] when the title is blank, or
    /// [`TaskServiceError::Repository`] when the save fails.
    pub fn add_task(&self, task: &Task) -> TaskServiceResult<()> {
        if task.title().trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle.into());
        }
        self.repository.save(task)?;
        info!("added task {}", task.id());
        Ok(())
    }

    /// Returns completed tasks in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when listing fails.
    pub fn list_done(&self) -> TaskServiceResult<Vec<Task>> {
        self.list_where(Task::is_done)
    }

    /// Returns tasks that are not yet completed, in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when listing fails.
    pub fn list_pending(&self) -> TaskServiceResult<Vec<Task>> {
        self.list_where(|task| !task.is_done())
    }

    /// Marks the task as done and saves it.
    ///
    /// The task is saved on every call, including when it was already done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the ID, or
    /// [`TaskServiceError::Repository`] when lookup or save fails.
    pub fn mark_done(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)?
            .ok_or(TaskServiceError::NotFound(id))?;
        task.mark_done();
        self.repository.save(&task)?;
        info!("marked task {id} done");
        Ok(task)
    }

    /// Removes the task. Removing an unknown ID succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the delete fails.
    pub fn remove(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id)?;
        info!("removed task {id}");
        Ok(())
    }

    fn list_where(&self, keep: impl Fn(&Task) -> bool) -> TaskServiceResult<Vec<Task>> {
        let tasks: Vec<Task> = self
            .repository
            .find_all()?
            .into_iter()
            .filter(&keep)
            .collect();
        debug!("listed {} tasks", tasks.len());
        Ok(tasks)
    }
}
