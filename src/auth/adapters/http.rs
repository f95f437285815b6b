//! HTTP adapter for the remote user and token endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::auth::{
    domain::{AccessToken, Credentials, RefreshToken, Registration, TokenPair},
    ports::{AuthApi, AuthApiError, AuthApiResult},
};
use crate::transport::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshBody<'a> {
    refresh: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    password2: &'a str,
}

impl<'a> From<&'a Registration> for RegisterBody<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: registration.username(),
            email: registration.email(),
            password: registration.password(),
            password2: registration.password_confirmation(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenPairPayload {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct AccessPayload {
    access: String,
}

/// Authentication API backed by the REST endpoints under `/users/`.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    api: ApiClient,
}

impl HttpAuthApi {
    /// Creates an adapter over a shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl From<ApiError> for AuthApiError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::Unauthorized,
            ApiError::Rejected { status, body } => Self::Rejected { status, body },
            ApiError::Transport(source) | ApiError::Decode(source) => Self::Transport(source),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn obtain_tokens(&self, credentials: &Credentials) -> AuthApiResult<TokenPair> {
        let body = LoginBody {
            username: credentials.username(),
            password: credentials.password(),
        };
        let payload: TokenPairPayload = self.api.post_json("/users/token/", None, &body).await?;
        Ok(TokenPair::new(
            AccessToken::new(payload.access),
            RefreshToken::new(payload.refresh),
        ))
    }

    async fn refresh(&self, refresh: &RefreshToken) -> AuthApiResult<AccessToken> {
        let body = RefreshBody {
            refresh: refresh.expose(),
        };
        let payload: AccessPayload = self
            .api
            .post_json("/users/token/refresh/", None, &body)
            .await?;
        Ok(AccessToken::new(payload.access))
    }

    async fn register(&self, registration: &Registration) -> AuthApiResult<()> {
        self.api
            .send_ignoring_body(
                Method::POST,
                "/users/register/",
                None,
                &RegisterBody::from(registration),
            )
            .await?;
        Ok(())
    }
}
