//! Application services for task tracking.

mod lifecycle;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
