//! Opaque bearer and refresh tokens.
//!
//! Token contents are never validated or decoded on the client. `Debug`
//! output is redacted so tokens cannot leak through logs or panics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-lived bearer token sent with authenticated API requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token issued by the remote API.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Long-lived token exchanged for a fresh [`AccessToken`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Wraps a refresh token issued by the remote API.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for the refresh request body.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(<redacted>)")
    }
}

/// Access and refresh tokens issued together at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Bearer token for API requests.
    pub access: AccessToken,
    /// Token used to obtain a new access token.
    pub refresh: RefreshToken,
}

impl TokenPair {
    /// Creates a token pair.
    #[must_use]
    pub const fn new(access: AccessToken, refresh: RefreshToken) -> Self {
        Self { access, refresh }
    }
}
