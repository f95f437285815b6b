//! Validated input for creating projects and tasks on the remote.

use super::{BoardDomainError, ProjectId, TaskStatus};

/// A project that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    description: String,
}

impl ProjectDraft {
    /// Creates a validated project draft.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            description: description.into(),
        })
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A task that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    status: TaskStatus,
    project: ProjectId,
}

impl TaskDraft {
    /// Creates a validated task draft for the given project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        status: TaskStatus,
        project: ProjectId,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            status,
            project,
        })
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }
}
