//! Service layer for the project dashboard.

use crate::auth::domain::{AccessToken, Session};
use crate::board::{
    domain::{
        BoardDomainError, Project, ProjectBoard, ProjectDraft, ProjectId, Task, TaskDraft, TaskId,
        TaskStatus,
    },
    ports::{BoardRemote, BoardRemoteError},
};
use crate::notify::{Notification, Notifier};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;

use super::sync::{PendingSync, SYNC_FAILED_MESSAGE, SyncOutcome, persist_status};

/// Message shown when the dashboard is used without a session.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in first";
/// Message shown when the project list cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch projects";
/// Message shown after a project is created.
pub const PROJECT_CREATED_MESSAGE: &str = "Project created successfully!";
/// Message shown when project creation fails.
pub const PROJECT_CREATE_FAILED_MESSAGE: &str = "Failed to create project";
/// Message shown after a task is added.
pub const TASK_ADDED_MESSAGE: &str = "Task added!";
/// Message shown when task creation fails.
pub const TASK_ADD_FAILED_MESSAGE: &str = "Failed to add task";

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    status: TaskStatus,
}

impl AddTaskRequest {
    /// Creates a request with the required title and a `pending` status.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: TaskStatus::Pending,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Service-level errors for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The session has no bearer token.
    #[error("no authenticated session")]
    Unauthenticated,
    /// Input validation or a board invariant failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The remote store failed.
    #[error(transparent)]
    Remote(#[from] BoardRemoteError),
}

/// Result type for dashboard service operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Session-scoped dashboard owning the in-memory project board.
///
/// All board mutation goes through `&mut self`, so the board has a single
/// writer. Status changes are applied locally first and persisted in the
/// background.
pub struct DashboardService<R, N, C>
where
    R: BoardRemote,
    N: Notifier,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    token: Option<AccessToken>,
    board: ProjectBoard,
}

impl<R, N, C> DashboardService<R, N, C>
where
    R: BoardRemote,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a dashboard for the given session with an empty board.
    #[must_use]
    pub fn new(remote: Arc<R>, notifier: Arc<N>, clock: Arc<C>, session: &Session) -> Self {
        Self {
            remote,
            notifier,
            clock,
            token: session.access_token().cloned(),
            board: ProjectBoard::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &ProjectBoard {
        &self.board
    }

    /// Replaces the board with the remote's current projects.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Unauthenticated`] without a session token
    /// and [`DashboardError::Remote`] when fetching fails. Both are also
    /// reported through the notifier.
    pub async fn load(&mut self) -> DashboardResult<&ProjectBoard> {
        let token = self.require_token()?;
        match self.remote.list_projects(&token).await {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "projects loaded");
                self.board = ProjectBoard::from_projects(projects);
                Ok(&self.board)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch projects");
                self.notify_error(FETCH_FAILED_MESSAGE);
                Err(err.into())
            }
        }
    }

    /// Creates a project remotely and appends it to the board.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when there is no session, the name is
    /// blank, or the remote rejects the request.
    pub async fn create_project(
        &mut self,
        request: CreateProjectRequest,
    ) -> DashboardResult<Project> {
        let token = self.require_token()?;
        let draft = ProjectDraft::new(request.name, request.description)
            .inspect_err(|err| self.notify_error(err.to_string()))?;

        match self.remote.create_project(&token, &draft).await {
            Ok(project) => {
                tracing::info!(project_id = %project.id(), "project created");
                self.board = self.board.with_project(project.clone());
                self.notify_success(PROJECT_CREATED_MESSAGE);
                Ok(project)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to create project");
                self.notify_error(PROJECT_CREATE_FAILED_MESSAGE);
                Err(err.into())
            }
        }
    }

    /// Creates a task remotely and appends it to its project.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when there is no session, the title is
    /// blank, the project is not on the board, or the remote rejects the
    /// request. An unknown project is rejected before any request is sent.
    pub async fn add_task(
        &mut self,
        project_id: ProjectId,
        request: AddTaskRequest,
    ) -> DashboardResult<Task> {
        let token = self.require_token()?;
        let draft = TaskDraft::new(request.title, request.status, project_id)
            .inspect_err(|err| self.notify_error(err.to_string()))?;
        if self.board.project(project_id).is_none() {
            self.notify_error(TASK_ADD_FAILED_MESSAGE);
            return Err(BoardDomainError::UnknownProject(project_id).into());
        }

        let task = match self.remote.create_task(&token, &draft).await {
            Ok(task) => task,
            Err(err) => {
                tracing::warn!(error = %err, %project_id, "failed to add task");
                self.notify_error(TASK_ADD_FAILED_MESSAGE);
                return Err(err.into());
            }
        };

        self.board = self.board.with_task(task.clone())?;
        tracing::info!(%project_id, task_id = %task.id(), "task added");
        self.notify_success(TASK_ADDED_MESSAGE);
        Ok(task)
    }

    fn require_token(&self) -> DashboardResult<AccessToken> {
        self.token.clone().ok_or_else(|| {
            self.notify_error(LOGIN_REQUIRED_MESSAGE);
            DashboardError::Unauthenticated
        })
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::success(message, &*self.clock));
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::error(message, &*self.clock));
    }
}

impl<R, N, C> DashboardService<R, N, C>
where
    R: BoardRemote + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Advances a task's status optimistically and persists it in the
    /// background.
    ///
    /// The board is updated before this returns. The status update is built
    /// from the board as it was before the change; when the project or task
    /// is not on the board, nothing is sent and `None` is returned. A failed
    /// background update is logged and reported as exactly one error
    /// notification; the local change is never rolled back and the request
    /// is never retried.
    ///
    /// Must be called from within a Tokio runtime for the update to be
    /// persisted.
    pub fn advance_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> Option<PendingSync> {
        let update = self.board.status_update_for(project_id, task_id);
        self.board = self.board.advance_status(project_id, task_id);

        let Some(update) = update else {
            tracing::debug!(%project_id, %task_id, "task not on board, skipping status sync");
            return None;
        };
        let Some(token) = self.token.clone() else {
            tracing::debug!(%task_id, "no session token, skipping status sync");
            return None;
        };
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    %task_id,
                    "no async runtime, status change not persisted"
                );
                self.notify_error(SYNC_FAILED_MESSAGE);
                return None;
            }
        };

        let remote = Arc::clone(&self.remote);
        let notifier = Arc::clone(&self.notifier);
        let clock = Arc::clone(&self.clock);
        tracing::debug!(%task_id, status = %update.status(), "dispatching status sync");
        let handle = runtime.spawn(async move {
            let outcome = persist_status(&*remote, &token, update).await;
            if let SyncOutcome::Failed { error, .. } = &outcome {
                tracing::warn!(
                    task_id = %update.task_id(),
                    status = %update.status(),
                    error = %error,
                    "status sync failed"
                );
                notifier.notify(Notification::error(SYNC_FAILED_MESSAGE, &*clock));
            }
            outcome
        });
        Some(PendingSync::new(update, handle))
    }
}
