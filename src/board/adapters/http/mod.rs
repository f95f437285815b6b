//! HTTP adapter for the remote project API.

mod models;

use async_trait::async_trait;
use reqwest::Method;

use self::models::{NewProjectBody, NewTaskBody, ProjectPayload, StatusBody, TaskPayload};
use crate::auth::domain::AccessToken;
use crate::board::{
    domain::{Project, ProjectDraft, StatusUpdate, Task, TaskDraft},
    ports::{BoardRemote, BoardRemoteError, BoardRemoteResult},
};
use crate::transport::{ApiClient, ApiError};

/// Remote board backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpBoardRemote {
    api: ApiClient,
}

impl HttpBoardRemote {
    /// Creates an adapter over a shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl From<ApiError> for BoardRemoteError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::Unauthorized,
            ApiError::Rejected { status, body } => Self::Rejected { status, body },
            ApiError::Transport(source) | ApiError::Decode(source) => Self::Transport(source),
        }
    }
}

#[async_trait]
impl BoardRemote for HttpBoardRemote {
    async fn list_projects(&self, token: &AccessToken) -> BoardRemoteResult<Vec<Project>> {
        tracing::debug!("fetching projects");
        let payloads: Vec<ProjectPayload> = self.api.get_json("/projects/", Some(token)).await?;
        Ok(payloads.into_iter().map(ProjectPayload::into_domain).collect())
    }

    async fn create_project(
        &self,
        token: &AccessToken,
        draft: &ProjectDraft,
    ) -> BoardRemoteResult<Project> {
        tracing::debug!(name = draft.name(), "creating project");
        let payload: ProjectPayload = self
            .api
            .post_json("/projects/", Some(token), &NewProjectBody::from(draft))
            .await?;
        Ok(payload.into_domain())
    }

    async fn create_task(&self, token: &AccessToken, draft: &TaskDraft) -> BoardRemoteResult<Task> {
        tracing::debug!(project_id = %draft.project(), "creating task");
        let payload: TaskPayload = self
            .api
            .post_json("/tasks/", Some(token), &NewTaskBody::from(draft))
            .await?;
        Ok(payload.into_domain(draft.project()))
    }

    async fn update_task_status(
        &self,
        token: &AccessToken,
        update: &StatusUpdate,
    ) -> BoardRemoteResult<()> {
        tracing::debug!(
            task_id = %update.task_id(),
            status = %update.status(),
            "patching task status"
        );
        let path = format!("/tasks/{}/", update.task_id());
        self.api
            .send_ignoring_body(Method::PATCH, &path, Some(token), &StatusBody::from(update))
            .await?;
        Ok(())
    }
}
