//! Client configuration for the remote task-tracking API.

use camino::Utf8PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "TASKTRACKR_API_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "TASKTRACKR_TIMEOUT_SECS";
/// Environment variable naming the directory used for token storage.
pub const TOKEN_DIR_ENV: &str = "TASKTRACKR_TOKEN_DIR";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors returned while building a [`ClientConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No API base URL was provided.
    #[error("missing API base URL, set {API_URL_ENV}")]
    MissingApiUrl,

    /// The API base URL does not use an HTTP scheme.
    #[error("invalid API base URL '{0}', expected an http:// or https:// URL")]
    InvalidApiUrl(String),

    /// The timeout value is not a positive number of seconds.
    #[error("invalid request timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Settings shared by the HTTP adapters and the token store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    request_timeout: Duration,
    token_dir: Option<Utf8PathBuf>,
}

impl ClientConfig {
    /// Creates a configuration for the given API base URL.
    ///
    /// A trailing `/` is removed so endpoint paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiUrl`] for a blank value and
    /// [`ConfigError::InvalidApiUrl`] when the scheme is not HTTP(S).
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(raw));
        }

        Ok(Self {
            api_url: trimmed.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_dir: None,
        })
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_ENV).ok_or(ConfigError::MissingApiUrl)?;
        let mut config = Self::new(api_url)?;

        if let Some(raw_timeout) = lookup(TIMEOUT_ENV) {
            let secs = raw_timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw_timeout))?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        if let Some(dir) = lookup(TOKEN_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            config = config.with_token_dir(dir);
        }

        Ok(config)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the directory used for file-backed token storage.
    #[must_use]
    pub fn with_token_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.token_dir = Some(dir.into());
        self
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the token storage directory, if configured.
    #[must_use]
    pub fn token_dir(&self) -> Option<&camino::Utf8Path> {
        self.token_dir.as_deref()
    }
}
