//! User-visible notifications.
//!
//! Services report outcomes the user should see (successful creation,
//! rejected input, failed background sync) through the [`Notifier`] port.
//! How a notification is presented is up to the adapter.

mod adapters;
mod notification;

pub use adapters::{RecordingNotifier, TracingNotifier};
pub use notification::{Notification, NotificationLevel};

/// Sink for user-visible notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Presents a notification to the user.
    fn notify(&self, notification: Notification);
}
