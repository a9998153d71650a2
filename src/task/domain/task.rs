//! Task entity.

use super::{TaskDomainError, TaskId, TaskIdGenerator};
use serde::{Deserialize, Serialize};

/// A single unit of tracked work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    done: bool,
}

impl Task {
    /// Creates a pending task with a fresh identifier.
    ///
    /// The title is stored trimmed. The description is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ids: &impl TaskIdGenerator,
    ) -> Result<Self, TaskDomainError> {
        let validated_title = normalize_title(title.into())?;
        Ok(Self {
            id: ids.next_id(),
            title: validated_title,
            description: description.into(),
            done: false,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the stored title is
    /// blank.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: data.id,
            title: normalize_title(data.title)?,
            description: data.description,
            done: data.done,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the trimmed task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Replaces the title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming. The current title is kept in that case.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        self.title = normalize_title(title.into())?;
        Ok(())
    }

    /// Replaces the description verbatim. Empty descriptions are allowed.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Marks the task as completed. Repeated calls have no further effect.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = TaskDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub done: bool,
}

/// Trims a title and rejects it when nothing remains.
fn normalize_title(raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    if trimmed.len() == raw.len() {
        return Ok(raw);
    }
    Ok(trimmed.to_owned())
}

/// Task input whose fields may be absent, such as a deserialized payload.
///
/// A draft is the only place where a missing title or description can be
/// expressed; [`Task`] itself always holds both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Requested title, if supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// Requested description, if supplied.
    #[serde(default)]
    pub description: Option<String>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
        }
    }

    /// Sets the draft title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the draft description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds a new pending task from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingTitle`],
    /// [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::MissingDescription`] when the draft is incomplete.
    pub fn build(self, ids: &impl TaskIdGenerator) -> Result<Task, TaskDomainError> {
        let (title, description) = self.validate()?;
        Ok(Task {
            id: ids.next_id(),
            title,
            description,
            done: false,
        })
    }

    /// Edits an existing task.
    ///
    /// An absent title keeps the current one. Both fields are validated
    /// before either is written, so a rejected draft leaves the task
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingDescription`] when no description
    /// is supplied, or [`TaskDomainError::EmptyTitle`] when a supplied title
    /// is blank.
    pub fn apply_to(self, task: &mut Task) -> Result<(), TaskDomainError> {
        let title = self.title.map(normalize_title).transpose()?;
        let description = self
            .description
            .ok_or(TaskDomainError::MissingDescription)?;
        if let Some(validated_title) = title {
            task.title = validated_title;
        }
        task.description = description;
        Ok(())
    }

    fn validate(self) -> Result<(String, String), TaskDomainError> {
        let title = normalize_title(self.title.ok_or(TaskDomainError::MissingTitle)?)?;
        let description = self
            .description
            .ok_or(TaskDomainError::MissingDescription)?;
        Ok((title, description))
    }
}
