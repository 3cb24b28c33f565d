//! Native desktop notification support.
//!
//! Sends system notifications for events worth seeing while the terminal
//! is in the background:
//! - A message left the modem
//! - A message failed to send
//! - A permission decision needs attention

use std::time::Instant;

use notify_rust::{Notification, Timeout};

use crate::config::NotificationSettings;

/// Types of notifications that can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// SMS dispatched successfully
    MessageSent,
    /// SMS dispatch failed
    SendFailed,
    /// A permission dialog is waiting for the user
    PermissionAttention,
}

/// Manages sending desktop notifications with deduplication.
pub struct NotificationManager {
    settings: NotificationSettings,
    last_notification: Option<(NotificationType, Instant)>,
}

impl NotificationManager {
    /// Create a new notification manager with the given settings.
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings,
            last_notification: None,
        }
    }

    /// Send a notification if enabled and not a duplicate.
    ///
    /// Returns `true` if the notification was sent.
    pub fn send(&mut self, ntype: NotificationType, title: &str, body: &str) -> bool {
        if !self.settings.enabled {
            return false;
        }

        if self.is_duplicate(ntype) {
            return false;
        }

        let result = Notification::new()
            .summary(title)
            .body(body)
            .timeout(Timeout::Milliseconds(5000))
            .show();

        if result.is_ok() {
            self.last_notification = Some((ntype, Instant::now()));
            true
        } else {
            false
        }
    }

    /// Send a message-sent notification.
    pub fn notify_message_sent(&mut self, number: &str) {
        let title = "Message Sent";
        let body = format!("SMS to {} accepted by the modem", number);
        self.send(NotificationType::MessageSent, title, &body);
    }

    /// Send a send-failure notification.
    pub fn notify_send_failed(&mut self, reason: &str) {
        let title = "Send Failed";
        self.send(NotificationType::SendFailed, title, reason);
    }

    /// Send a permission-attention notification.
    pub fn notify_permission_attention(&mut self, identifier: &str) {
        let title = "Permission";
        let body = format!("{} needs a decision", identifier);
        self.send(NotificationType::PermissionAttention, title, &body);
    }

    /// Check if this notification type was recently sent.
    fn is_duplicate(&self, ntype: NotificationType) -> bool {
        self.last_notification
            .map(|(t, when)| {
                t == ntype && when.elapsed().as_secs() < self.settings.dedupe_interval_secs
            })
            .unwrap_or(false)
    }

    /// Check if notifications are enabled.
    #[allow(dead_code)] // May be useful for UI display
    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }
}
