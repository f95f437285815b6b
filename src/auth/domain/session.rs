//! Session context passed explicitly to services that need authentication.

use super::AccessToken;
use chrono::{DateTime, Utc};

/// Identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUser {
    /// The user logged in with this username during the current session.
    Named(String),
    /// The session was restored from a stored refresh token; the username is
    /// not known locally.
    Restored,
}

/// Authentication state for one client session.
///
/// A session is produced by restoring stored tokens, logging in, or logging
/// out. Services receive it by reference instead of reading tokens from
/// ambient storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No valid tokens are available.
    Anonymous,
    /// A bearer token is available for API requests.
    Authenticated {
        /// Who the session belongs to.
        user: SessionUser,
        /// Bearer token for API requests.
        access: AccessToken,
        /// When the access token was obtained.
        since: DateTime<Utc>,
    },
}

impl Session {
    /// Returns `true` when a bearer token is available.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { access, .. } => Some(access),
        }
    }

    /// Returns the session user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user, .. } => Some(user),
        }
    }
}
