//! Background persistence of optimistic status changes.

use crate::auth::domain::AccessToken;
use crate::board::{
    domain::StatusUpdate,
    ports::{BoardRemote, BoardRemoteError},
};
use tokio::task::{JoinError, JoinHandle};

/// Message shown when a background status update fails.
pub const SYNC_FAILED_MESSAGE: &str = "Failed to sync with server";

/// Result of persisting one status update.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// The remote accepted the update.
    Synced(StatusUpdate),
    /// The remote rejected the update or could not be reached.
    ///
    /// Local state is left as is; it may diverge from the remote until the
    /// board is reloaded.
    Failed {
        /// The update that was not persisted.
        update: StatusUpdate,
        /// Why persistence failed.
        error: BoardRemoteError,
    },
}

impl SyncOutcome {
    /// Returns `true` when the remote accepted the update.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        matches!(self, Self::Synced(_))
    }

    /// Returns the update this outcome refers to.
    #[must_use]
    pub const fn update(&self) -> &StatusUpdate {
        match self {
            Self::Synced(update) | Self::Failed { update, .. } => update,
        }
    }
}

/// Sends a single status update and reports the outcome as a value.
///
/// Never retries.
pub async fn persist_status<R>(remote: &R, token: &AccessToken, update: StatusUpdate) -> SyncOutcome
where
    R: BoardRemote + ?Sized,
{
    match remote.update_task_status(token, &update).await {
        Ok(()) => SyncOutcome::Synced(update),
        Err(error) => SyncOutcome::Failed { update, error },
    }
}

/// Handle to a status update running in the background.
///
/// Dropping the handle does not cancel the request.
#[derive(Debug)]
pub struct PendingSync {
    update: StatusUpdate,
    handle: JoinHandle<SyncOutcome>,
}

impl PendingSync {
    pub(super) const fn new(update: StatusUpdate, handle: JoinHandle<SyncOutcome>) -> Self {
        Self { update, handle }
    }

    /// Returns the update being persisted.
    #[must_use]
    pub const fn update(&self) -> &StatusUpdate {
        &self.update
    }

    /// Waits for the background request to finish.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError`] if the background task panicked or the runtime
    /// shut down before it completed.
    pub async fn outcome(self) -> Result<SyncOutcome, JoinError> {
        self.handle.await
    }
}
