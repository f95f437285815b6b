//! Service layer for the session lifecycle: restore, login, register, logout.

use crate::auth::{
    domain::{AuthDomainError, Credentials, Registration, Session, SessionUser},
    ports::{AuthApi, AuthApiError, TokenStore, TokenStoreError},
};
use crate::notify::{Notification, Notifier};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Message shown after a successful login.
pub const LOGIN_SUCCEEDED_MESSAGE: &str = "Login successful!";
/// Message shown when login is rejected.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials";
/// Message shown after an account is registered.
pub const REGISTERED_MESSAGE: &str = "Account created successfully!";
/// Message shown when registration is rejected.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// Request payload for logging in.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Request payload for registering an account.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
    password_confirmation: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),
    /// The authentication API failed.
    #[error(transparent)]
    Auth(#[from] AuthApiError),
    /// Token storage failed.
    #[error(transparent)]
    Storage(#[from] TokenStoreError),
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session lifecycle orchestration service.
#[derive(Clone)]
pub struct SessionService<A, S, N, C>
where
    A: AuthApi,
    S: TokenStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    store: Arc<S>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<A, S, N, C> SessionService<A, S, N, C>
where
    A: AuthApi,
    S: TokenStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(api: Arc<A>, store: Arc<S>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            api,
            store,
            notifier,
            clock,
        }
    }

    /// Restores a session from stored tokens.
    ///
    /// Makes a single refresh attempt with the stored refresh token. Without
    /// a stored refresh token the session is anonymous. When the refresh
    /// fails the stored tokens are cleared and the session is anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when token storage fails.
    pub async fn restore(&self) -> SessionResult<Session> {
        let Some(refresh) = self.store.refresh_token()? else {
            tracing::debug!("no stored refresh token");
            return Ok(Session::Anonymous);
        };

        match self.api.refresh(&refresh).await {
            Ok(access) => {
                self.store.store_access(&access)?;
                tracing::info!("session restored");
                Ok(Session::Authenticated {
                    user: SessionUser::Restored,
                    access,
                    since: self.clock.utc(),
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed, ending session");
                self.logout()
            }
        }
    }

    /// Logs in and stores the issued tokens.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for blank credentials,
    /// [`SessionError::Auth`] when the credentials are rejected, and
    /// [`SessionError::Storage`] when the tokens cannot be stored.
    pub async fn login(&self, request: LoginRequest) -> SessionResult<Session> {
        let credentials = Credentials::new(request.username, request.password)
            .inspect_err(|err| self.notify_error(err.to_string()))?;

        let pair = match self.api.obtain_tokens(&credentials).await {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!(
                    username = credentials.username(),
                    error = %err,
                    "login rejected"
                );
                self.notify_error(LOGIN_FAILED_MESSAGE);
                return Err(err.into());
            }
        };

        self.store.store_pair(&pair)?;
        tracing::info!(username = credentials.username(), "logged in");
        self.notify_success(LOGIN_SUCCEEDED_MESSAGE);
        Ok(Session::Authenticated {
            user: SessionUser::Named(credentials.username().to_owned()),
            access: pair.access,
            since: self.clock.utc(),
        })
    }

    /// Registers a new account without logging in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for invalid input and
    /// [`SessionError::Auth`] when the remote rejects the registration.
    pub async fn register(&self, request: RegisterRequest) -> SessionResult<()> {
        let registration = Registration::new(
            request.username,
            request.email,
            request.password,
            request.password_confirmation,
        )
        .inspect_err(|err| self.notify_error(err.to_string()))?;

        match self.api.register(&registration).await {
            Ok(()) => {
                tracing::info!(username = registration.username(), "account registered");
                self.notify_success(REGISTERED_MESSAGE);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    username = registration.username(),
                    error = %err,
                    "registration rejected"
                );
                self.notify_error(REGISTRATION_FAILED_MESSAGE);
                Err(err.into())
            }
        }
    }

    /// Clears both stored tokens and ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the tokens cannot be removed.
    pub fn logout(&self) -> SessionResult<Session> {
        self.store.clear()?;
        tracing::info!("logged out");
        Ok(Session::Anonymous)
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::success(message, &*self.clock));
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::error(message, &*self.clock));
    }
}
