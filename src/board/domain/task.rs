//! Task entity.

use super::{ProjectId, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    project: ProjectId,
}

impl Task {
    /// Creates a task as returned by the remote API.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        status: TaskStatus,
        project: ProjectId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            project,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns a copy of this task with its status advanced one step.
    #[must_use]
    pub fn advanced(&self) -> Self {
        Self {
            status: self.status.advance(),
            ..self.clone()
        }
    }
}
