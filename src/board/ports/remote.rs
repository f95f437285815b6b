//! Remote store port for projects and tasks.

use crate::auth::domain::AccessToken;
use crate::board::domain::{Project, ProjectDraft, StatusUpdate, Task, TaskDraft};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote board operations.
pub type BoardRemoteResult<T> = Result<T, BoardRemoteError>;

/// Remote project and task store contract.
///
/// Every call carries the caller's bearer token; adapters do not validate or
/// refresh it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRemote: Send + Sync {
    /// Lists all projects visible to the token, each with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRemoteError`] when the remote cannot be reached or
    /// rejects the request.
    async fn list_projects(&self, token: &AccessToken) -> BoardRemoteResult<Vec<Project>>;

    /// Creates a project and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRemoteError`] when the remote cannot be reached or
    /// rejects the request.
    async fn create_project(
        &self,
        token: &AccessToken,
        draft: &ProjectDraft,
    ) -> BoardRemoteResult<Project>;

    /// Creates a task and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRemoteError`] when the remote cannot be reached or
    /// rejects the request.
    async fn create_task(&self, token: &AccessToken, draft: &TaskDraft) -> BoardRemoteResult<Task>;

    /// Persists a task's new status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRemoteError`] when the remote cannot be reached or
    /// rejects the request.
    async fn update_task_status(
        &self,
        token: &AccessToken,
        update: &StatusUpdate,
    ) -> BoardRemoteResult<()>;
}

/// Errors returned by remote board adapters.
#[derive(Debug, Clone, Error)]
pub enum BoardRemoteError {
    /// The bearer token was rejected.
    #[error("bearer token rejected")]
    Unauthorized,

    /// The remote answered with a non-success status.
    #[error("request rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The request could not be completed or the response was unreadable.
    #[error("remote transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRemoteError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
