//! Session-scoped project board and the optimistic status reconciler.

use super::{BoardDomainError, Project, ProjectId, Task, TaskId, TaskStatus};
use std::sync::Arc;

/// Status change to persist for a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    task_id: TaskId,
    status: TaskStatus,
}

impl StatusUpdate {
    /// Creates a status update.
    #[must_use]
    pub const fn new(task_id: TaskId, status: TaskStatus) -> Self {
        Self { task_id, status }
    }

    /// Returns the task to update.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the status to persist.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Ordered collection of projects owned by one dashboard session.
///
/// Boards are immutable values: every operation returns a new board. Projects
/// that an operation does not touch are shared with the previous board
/// rather than copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectBoard {
    projects: Vec<Arc<Project>>,
}

impl ProjectBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from projects in display order.
    #[must_use]
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the projects in display order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().map(AsRef::as_ref)
    }

    /// Returns the shared project handles in display order.
    #[must_use]
    pub fn shared_projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when the board has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects().find(|project| project.id() == project_id)
    }

    /// Finds a task within the named project.
    #[must_use]
    pub fn task(&self, project_id: ProjectId, task_id: TaskId) -> Option<&Task> {
        self.project(project_id)?.task(task_id)
    }

    /// Returns a board with the project appended.
    #[must_use]
    pub fn with_project(&self, project: Project) -> Self {
        let mut projects = self.projects.clone();
        projects.push(Arc::new(project));
        Self { projects }
    }

    /// Returns a board with the task appended to its owning project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownProject`] when the task's project is
    /// not on the board; tasks are never added without an owner.
    pub fn with_task(&self, task: Task) -> Result<Self, BoardDomainError> {
        let project_id = task.project();
        if self.project(project_id).is_none() {
            return Err(BoardDomainError::UnknownProject(project_id));
        }

        let mut pending = Some(task);
        let projects = self
            .projects
            .iter()
            .map(|project| match pending.take_if(|_| project.id() == project_id) {
                Some(task) => Arc::new(project.with_appended_task(task)),
                None => Arc::clone(project),
            })
            .collect();
        Ok(Self { projects })
    }

    /// Describes the update an advance would persist, based on this board.
    ///
    /// Returns `None` when the project or task is not on the board, in which
    /// case nothing must be sent to the remote.
    #[must_use]
    pub fn status_update_for(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> Option<StatusUpdate> {
        self.task(project_id, task_id)
            .map(|task| StatusUpdate::new(task_id, task.status().advance()))
    }

    /// Advances a task's status and re-sorts its project.
    ///
    /// Within the affected project, finished tasks are moved after
    /// unfinished ones while each group keeps its relative order. Other
    /// projects are shared unchanged. An unknown project or task yields a
    /// board equal to this one.
    #[must_use]
    pub fn advance_status(&self, project_id: ProjectId, task_id: TaskId) -> Self {
        let projects = self
            .projects
            .iter()
            .map(|project| {
                if project.id() != project_id {
                    return Arc::clone(project);
                }
                project
                    .with_advanced_task(task_id)
                    .map_or_else(|| Arc::clone(project), Arc::new)
            })
            .collect();
        Self { projects }
    }
}
