//! In-memory authentication API for tests and offline use.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{AccessToken, Credentials, RefreshToken, Registration, TokenPair},
    ports::{AuthApi, AuthApiError, AuthApiResult},
};

/// Thread-safe stand-in for the remote user and token endpoints.
///
/// Tokens are issued as sequential opaque strings. Refresh tokens stay valid
/// until [`InMemoryAuthApi::revoke_refresh_tokens`] is called.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthApi {
    state: Arc<RwLock<InMemoryAuthState>>,
}

#[derive(Debug, Default)]
struct InMemoryAuthState {
    accounts: HashMap<String, Account>,
    live_refresh_tokens: HashSet<String>,
    issued: u64,
}

#[derive(Debug)]
struct Account {
    password: String,
}

impl InMemoryAuthApi {
    /// Creates an API with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account that can log in immediately.
    #[must_use]
    pub fn with_account(self, username: &str, password: &str) -> Self {
        self.write_state(|state| {
            state.accounts.insert(
                username.to_owned(),
                Account {
                    password: password.to_owned(),
                },
            );
        });
        self
    }

    /// Invalidates every refresh token issued so far.
    pub fn revoke_refresh_tokens(&self) {
        self.write_state(|state| state.live_refresh_tokens.clear());
    }

    /// Returns `true` when an account with this username exists.
    #[must_use]
    pub fn has_account(&self, username: &str) -> bool {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .accounts
            .contains_key(username)
    }

    fn write_state(&self, apply: impl FnOnce(&mut InMemoryAuthState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut state);
    }
}

fn lock_error(err: impl std::fmt::Display) -> AuthApiError {
    AuthApiError::transport(std::io::Error::other(err.to_string()))
}

fn next_token(state: &mut InMemoryAuthState, kind: &str) -> String {
    state.issued += 1;
    format!("{kind}-{}", state.issued)
}

#[async_trait]
impl AuthApi for InMemoryAuthApi {
    async fn obtain_tokens(&self, credentials: &Credentials) -> AuthApiResult<TokenPair> {
        let mut state = self.state.write().map_err(lock_error)?;
        let is_valid = state
            .accounts
            .get(credentials.username())
            .is_some_and(|account| account.password == credentials.password());
        if !is_valid {
            return Err(AuthApiError::Unauthorized);
        }

        let access = next_token(&mut state, "access");
        let refresh = next_token(&mut state, "refresh");
        state.live_refresh_tokens.insert(refresh.clone());
        Ok(TokenPair::new(
            AccessToken::new(access),
            RefreshToken::new(refresh),
        ))
    }

    async fn refresh(&self, refresh: &RefreshToken) -> AuthApiResult<AccessToken> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.live_refresh_tokens.contains(refresh.expose()) {
            return Err(AuthApiError::Unauthorized);
        }
        Ok(AccessToken::new(next_token(&mut state, "access")))
    }

    async fn register(&self, registration: &Registration) -> AuthApiResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if registration.password() != registration.password_confirmation() {
            return Err(AuthApiError::Rejected {
                status: 400,
                body: "passwords do not match".to_owned(),
            });
        }
        if state.accounts.contains_key(registration.username()) {
            return Err(AuthApiError::Rejected {
                status: 400,
                body: format!("username '{}' is taken", registration.username()),
            });
        }
        state.accounts.insert(
            registration.username().to_owned(),
            Account {
                password: registration.password().to_owned(),
            },
        );
        Ok(())
    }
}
