//! Notification value type.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// An operation completed successfully.
    Success,
    /// An operation failed or input was rejected.
    Error,
}

impl NotificationLevel {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable message raised by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
    raised_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a success notification stamped with the current clock time.
    #[must_use]
    pub fn success(message: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(NotificationLevel::Success, message, clock)
    }

    /// Creates an error notification stamped with the current clock time.
    #[must_use]
    pub fn error(message: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(NotificationLevel::Error, message, clock)
    }

    fn new(level: NotificationLevel, message: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: clock.utc(),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the notification was raised.
    #[must_use]
    pub const fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}
