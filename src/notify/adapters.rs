//! Notifier adapters.

use super::{Notification, NotificationLevel, Notifier};
use std::sync::{Arc, Mutex, PoisonError};

/// Notifier that keeps every notification in memory.
///
/// Clones share the same underlying list, so a test can hand one clone to a
/// service and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded notifications in arrival order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded messages at the given level.
    #[must_use]
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|notification| notification.level() == level)
            .map(|notification| notification.message().to_owned())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Notifier that emits notifications as tracing events.
///
/// Useful for headless clients where there is no toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level() {
            NotificationLevel::Success => {
                tracing::info!(text = notification.message(), "notification");
            }
            NotificationLevel::Error => {
                tracing::warn!(text = notification.message(), "notification");
            }
        }
    }
}
