//! Error types for credential validation.

use thiserror::Error;

/// Errors returned while constructing credentials or registrations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password confirmation is empty.
    #[error("password confirmation must not be empty")]
    EmptyPasswordConfirmation,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}
