//! Login credentials and account registration data.

use super::AuthDomainError;
use std::fmt;

/// Username and password submitted at login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyUsername`] or
    /// [`AuthDomainError::EmptyPassword`] for blank fields.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        Ok(Self {
            username: normalize_username(&username.into())?,
            password: require_password(password.into())?,
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Account details submitted at registration.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
    password_confirmation: String,
}

impl Registration {
    /// Creates a validated registration.
    ///
    /// The confirmation is passed through unchanged; the server decides
    /// whether it matches.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError`] when the username, password or
    /// confirmation is blank or the email address is malformed.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let normalized_username = normalize_username(&username.into())?;
        let raw_email = email.into();
        let normalized_email = raw_email.trim();
        let is_valid_email = normalized_email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !normalized_email.chars().any(char::is_whitespace);
        if !is_valid_email {
            return Err(AuthDomainError::InvalidEmail(raw_email));
        }

        Ok(Self {
            username: normalized_username,
            email: normalized_email.to_owned(),
            password: require_password(password.into())?,
            password_confirmation: require_confirmation(password_confirmation.into())?,
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the password confirmation as entered.
    #[must_use]
    pub fn password_confirmation(&self) -> &str {
        &self.password_confirmation
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn normalize_username(raw: &str) -> Result<String, AuthDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuthDomainError::EmptyUsername);
    }
    Ok(trimmed.to_owned())
}

fn require_confirmation(raw: String) -> Result<String, AuthDomainError> {
    if raw.is_empty() {
        return Err(AuthDomainError::EmptyPasswordConfirmation);
    }
    Ok(raw)
}

fn require_password(raw: String) -> Result<String, AuthDomainError> {
    if raw.is_empty() {
        return Err(AuthDomainError::EmptyPassword);
    }
    Ok(raw)
}
