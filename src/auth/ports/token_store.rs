//! Local token storage port.

use crate::auth::domain::{AccessToken, RefreshToken, TokenPair};
use std::sync::Arc;
use thiserror::Error;

/// Result type for token storage operations.
pub type TokenStoreResult<T> = Result<T, TokenStoreError>;

/// Persistent storage for the session's access and refresh tokens.
///
/// Stored tokens outlive the process; the in-memory project board does not.
pub trait TokenStore: Send + Sync {
    /// Returns the stored access token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be read.
    fn access_token(&self) -> TokenStoreResult<Option<AccessToken>>;

    /// Returns the stored refresh token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be read.
    fn refresh_token(&self) -> TokenStoreResult<Option<RefreshToken>>;

    /// Stores both tokens, replacing any previous values.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be written.
    fn store_pair(&self, pair: &TokenPair) -> TokenStoreResult<()>;

    /// Replaces the access token, keeping the refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be written.
    fn store_access(&self, access: &AccessToken) -> TokenStoreResult<()>;

    /// Removes both tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be written.
    fn clear(&self) -> TokenStoreResult<()>;
}

/// Errors returned by token store implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing storage failed.
    #[error("token storage I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// Stored data could not be decoded.
    #[error("stored tokens are corrupt: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for TokenStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
