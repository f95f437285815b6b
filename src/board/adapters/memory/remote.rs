//! In-memory remote board for tests and offline use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::auth::domain::AccessToken;
use crate::board::{
    domain::{Project, ProjectDraft, ProjectId, StatusUpdate, Task, TaskDraft, TaskId},
    ports::{BoardRemote, BoardRemoteError, BoardRemoteResult},
};

/// Thread-safe in-memory stand-in for the remote project API.
///
/// Failures can be injected per operation, and every status update call is
/// recorded whether or not it succeeds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRemote {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    projects: Vec<Project>,
    last_project_id: u64,
    last_task_id: u64,
    accepted_token: Option<AccessToken>,
    received_status_updates: Vec<StatusUpdate>,
    failures: FailurePlan,
}

#[derive(Debug, Default, Clone, Copy)]
struct FailurePlan {
    listing: bool,
    creation: bool,
    status_updates: bool,
}

impl InMemoryBoardRemote {
    /// Creates an empty remote that accepts any token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a remote seeded with projects.
    ///
    /// Identifiers for newly created records continue after the highest
    /// seeded identifier.
    #[must_use]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let projects: Vec<Project> = projects.into_iter().collect();
        let last_project_id = projects
            .iter()
            .map(|project| project.id().value())
            .max()
            .unwrap_or_default();
        let last_task_id = projects
            .iter()
            .flat_map(Project::tasks)
            .map(|task| task.id().value())
            .max()
            .unwrap_or_default();

        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState {
                projects,
                last_project_id,
                last_task_id,
                ..InMemoryBoardState::default()
            })),
        }
    }

    /// Rejects every request not carrying this bearer token.
    #[must_use]
    pub fn requiring_token(self, token: AccessToken) -> Self {
        self.update_state(|state| state.accepted_token = Some(token));
        self
    }

    /// Makes project listing fail until reset.
    pub fn fail_listing(&self, fail: bool) {
        self.update_state(|state| state.failures.listing = fail);
    }

    /// Makes project and task creation fail until reset.
    pub fn fail_creation(&self, fail: bool) {
        self.update_state(|state| state.failures.creation = fail);
    }

    /// Makes status updates fail until reset.
    pub fn fail_status_updates(&self, fail: bool) {
        self.update_state(|state| state.failures.status_updates = fail);
    }

    /// Returns every status update received, in arrival order.
    #[must_use]
    pub fn received_status_updates(&self) -> Vec<StatusUpdate> {
        self.read_state(|state| state.received_status_updates.clone())
    }

    /// Returns the projects as currently stored.
    #[must_use]
    pub fn stored_projects(&self) -> Vec<Project> {
        self.read_state(|state| state.projects.clone())
    }

    fn update_state(&self, apply: impl FnOnce(&mut InMemoryBoardState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut state);
    }

    fn read_state<T>(&self, read: impl FnOnce(&InMemoryBoardState) -> T) -> T {
        let state = self
            .state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        read(&state)
    }
}

fn simulated_outage() -> BoardRemoteError {
    BoardRemoteError::Rejected {
        status: 503,
        body: "simulated outage".to_owned(),
    }
}

fn check_token(state: &InMemoryBoardState, token: &AccessToken) -> BoardRemoteResult<()> {
    match &state.accepted_token {
        Some(accepted) if accepted != token => Err(BoardRemoteError::Unauthorized),
        _ => Ok(()),
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRemoteError {
    BoardRemoteError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRemote for InMemoryBoardRemote {
    async fn list_projects(&self, token: &AccessToken) -> BoardRemoteResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        check_token(&state, token)?;
        if state.failures.listing {
            return Err(simulated_outage());
        }
        Ok(state.projects.clone())
    }

    async fn create_project(
        &self,
        token: &AccessToken,
        draft: &ProjectDraft,
    ) -> BoardRemoteResult<Project> {
        let mut state = self.state.write().map_err(lock_error)?;
        check_token(&state, token)?;
        if state.failures.creation {
            return Err(simulated_outage());
        }

        state.last_project_id += 1;
        let project = Project::new(
            ProjectId::new(state.last_project_id),
            draft.name(),
            draft.description(),
        );
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn create_task(&self, token: &AccessToken, draft: &TaskDraft) -> BoardRemoteResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        check_token(&state, token)?;
        if state.failures.creation {
            return Err(simulated_outage());
        }

        let task_id = TaskId::new(state.last_task_id + 1);
        let task = Task::new(task_id, draft.title(), draft.status(), draft.project());
        let project = state
            .projects
            .iter_mut()
            .find(|project| project.id() == draft.project())
            .ok_or_else(|| BoardRemoteError::Rejected {
                status: 400,
                body: format!("project {} does not exist", draft.project()),
            })?;

        let tasks: Vec<Task> = project
            .tasks()
            .iter()
            .cloned()
            .chain(std::iter::once(task.clone()))
            .collect();
        *project = project.clone().with_tasks(tasks);
        state.last_task_id = task_id.value();
        Ok(task)
    }

    async fn update_task_status(
        &self,
        token: &AccessToken,
        update: &StatusUpdate,
    ) -> BoardRemoteResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.received_status_updates.push(*update);
        check_token(&state, token)?;
        if state.failures.status_updates {
            return Err(simulated_outage());
        }

        let project = state
            .projects
            .iter_mut()
            .find(|project| project.task(update.task_id()).is_some())
            .ok_or_else(|| BoardRemoteError::Rejected {
                status: 404,
                body: format!("task {} does not exist", update.task_id()),
            })?;

        let tasks: Vec<Task> = project
            .tasks()
            .iter()
            .map(|task| {
                if task.id() == update.task_id() {
                    Task::new(task.id(), task.title(), update.status(), task.project())
                } else {
                    task.clone()
                }
            })
            .collect();
        *project = project.clone().with_tasks(tasks);
        Ok(())
    }
}
