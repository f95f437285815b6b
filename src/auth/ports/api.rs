//! Remote authentication API port.

use crate::auth::domain::{AccessToken, Credentials, RefreshToken, Registration, TokenPair};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authentication API operations.
pub type AuthApiResult<T> = Result<T, AuthApiError>;

/// Token issuance and account registration contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for an access and refresh token pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthApiError::Unauthorized`] when the credentials are
    /// rejected.
    async fn obtain_tokens(&self, credentials: &Credentials) -> AuthApiResult<TokenPair>;

    /// Exchanges a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthApiError::Unauthorized`] when the refresh token is
    /// expired or revoked.
    async fn refresh(&self, refresh: &RefreshToken) -> AuthApiResult<AccessToken>;

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthApiError::Rejected`] when the remote refuses the
    /// registration (for example a taken username).
    async fn register(&self, registration: &Registration) -> AuthApiResult<()>;
}

/// Errors returned by authentication API adapters.
#[derive(Debug, Clone, Error)]
pub enum AuthApiError {
    /// Credentials or refresh token were rejected.
    #[error("authentication rejected")]
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
    #[error("authentication transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthApiError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
