//! Task identifier and the injectable generators that produce it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Unique identifier for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

/// Source of identifiers for newly constructed tasks.
///
/// Task construction takes the generator by reference so callers can swap
/// the random default for a deterministic one.
pub trait TaskIdGenerator {
    /// Returns the identifier for the next task.
    fn next_id(&self) -> TaskId;
}

/// Generates random version 4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIdGenerator;

impl TaskIdGenerator for RandomTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId(Uuid::new_v4())
    }
}

/// Generates identifiers from a monotonically increasing counter.
///
/// The first identifier is `00000000-0000-0000-0000-000000000001`.
#[derive(Debug, Default)]
pub struct SequentialTaskIdGenerator {
    issued: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier has the value one.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        let previous = self.issued.fetch_add(1, Ordering::Relaxed);
        TaskId(Uuid::from_u128(u128::from(previous) + 1))
    }
}
