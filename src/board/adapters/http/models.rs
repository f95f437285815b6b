//! Wire representations for the remote project API.

use serde::{Deserialize, Serialize};

use crate::board::domain::{
    Project, ProjectDraft, ProjectId, StatusUpdate, Task, TaskDraft, TaskId, TaskStatus,
};

/// Project as returned by `GET /projects/` and `POST /projects/`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ProjectPayload {
    id: u64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tasks: Option<Vec<TaskPayload>>,
}

impl ProjectPayload {
    /// Converts to the domain type, assigning nested tasks that omit their
    /// `project` field to this project.
    pub(super) fn into_domain(self) -> Project {
        let project_id = ProjectId::new(self.id);
        let tasks = self
            .tasks
            .unwrap_or_default()
            .into_iter()
            .map(|task| task.into_domain(project_id));
        Project::new(project_id, self.name, self.description.unwrap_or_default()).with_tasks(tasks)
    }
}

/// Task as returned by the API, nested in a project or on its own.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskPayload {
    id: u64,
    title: String,
    status: TaskStatus,
    #[serde(default)]
    project: Option<u64>,
}

impl TaskPayload {
    pub(super) fn into_domain(self, fallback_project: ProjectId) -> Task {
        let project = self.project.map_or(fallback_project, ProjectId::new);
        Task::new(TaskId::new(self.id), self.title, self.status, project)
    }
}

/// Body of `POST /projects/`.
#[derive(Debug, Serialize)]
pub(super) struct NewProjectBody<'a> {
    name: &'a str,
    description: &'a str,
}

impl<'a> From<&'a ProjectDraft> for NewProjectBody<'a> {
    fn from(draft: &'a ProjectDraft) -> Self {
        Self {
            name: draft.name(),
            description: draft.description(),
        }
    }
}

/// Body of `POST /tasks/`.
#[derive(Debug, Serialize)]
pub(super) struct NewTaskBody<'a> {
    title: &'a str,
    status: TaskStatus,
    project: u64,
}

impl<'a> From<&'a TaskDraft> for NewTaskBody<'a> {
    fn from(draft: &'a TaskDraft) -> Self {
        Self {
            title: draft.title(),
            status: draft.status(),
            project: draft.project().value(),
        }
    }
}

/// Body of `PATCH /tasks/{id}/`.
#[derive(Debug, Serialize)]
pub(super) struct StatusBody {
    status: TaskStatus,
}

impl From<&StatusUpdate> for StatusBody {
    fn from(update: &StatusUpdate) -> Self {
        Self {
            status: update.status(),
        }
    }
}
