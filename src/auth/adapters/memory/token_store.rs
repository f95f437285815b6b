//! In-memory token store.

use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{AccessToken, RefreshToken, TokenPair},
    ports::{TokenStore, TokenStoreError, TokenStoreResult},
};

/// Thread-safe token store that forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    state: Arc<RwLock<StoredTokens>>,
}

#[derive(Debug, Default)]
struct StoredTokens {
    access: Option<AccessToken>,
    refresh: Option<RefreshToken>,
}

impl InMemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding a token pair.
    #[must_use]
    pub fn with_pair(pair: TokenPair) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoredTokens {
                access: Some(pair.access),
                refresh: Some(pair.refresh),
            })),
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> TokenStoreError {
    TokenStoreError::from(std::io::Error::other(err.to_string()))
}

impl TokenStore for InMemoryTokenStore {
    fn access_token(&self) -> TokenStoreResult<Option<AccessToken>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.access.clone())
    }

    fn refresh_token(&self) -> TokenStoreResult<Option<RefreshToken>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.refresh.clone())
    }

    fn store_pair(&self, pair: &TokenPair) -> TokenStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.access = Some(pair.access.clone());
        state.refresh = Some(pair.refresh.clone());
        Ok(())
    }

    fn store_access(&self, access: &AccessToken) -> TokenStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.access = Some(access.clone());
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        *state = StoredTokens::default();
        Ok(())
    }
}
