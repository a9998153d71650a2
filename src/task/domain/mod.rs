//! Domain model for task tracking.
//!
//! The domain owns the task entity and its invariants. Persistence stays
//! outside the domain boundary behind the repository port.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{RandomTaskIdGenerator, SequentialTaskIdGenerator, TaskId, TaskIdGenerator};
pub use task::{PersistedTaskData, Task, TaskDraft};
