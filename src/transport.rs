//! HTTP client shared by the remote board and authentication adapters.

use crate::auth::domain::AccessToken;
use crate::config::ClientConfig;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// Result type for raw API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single HTTP exchange with the remote API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The remote answered `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,

    /// The remote answered with another non-success status.
    #[error("API error ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The request could not be sent or the connection failed.
    #[error("failed to send request: {0}")]
    Transport(Arc<reqwest::Error>),

    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Decode(Arc<reqwest::Error>),
}

/// Thin wrapper around [`reqwest::Client`] bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| ApiError::Transport(Arc::new(err)))?;

        Ok(Self {
            client,
            base_url: config.api_url().to_owned(),
        })
    }

    /// Returns the absolute URL for an API path such as `/tasks/10/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a `GET` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
    ) -> ApiResult<T> {
        let response = execute(self.request(Method::GET, path, token)).await?;
        decode(response).await
    }

    /// Sends a JSON `POST` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
        body: &B,
    ) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = execute(self.request(Method::POST, path, token).json(body)).await?;
        decode(response).await
    }

    /// Sends a JSON request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn send_ignoring_body<B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&AccessToken>,
        body: &B,
    ) -> ApiResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        execute(self.request(method, path, token).json(body)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }
}

async fn execute(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|err| ApiError::Transport(Arc::new(err)))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(Arc::new(err)))
}
