// SPDX-License-Identifier: MPL-2.0
//! Notification data.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Action confirmed (green, 3s).
    #[default]
    Success,
    /// Something was recovered from (orange, 6s).
    Warning,
    /// Something was lost (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors, which stay until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A message shown as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key, resolved at render time.
    message_key: String,
    /// Clock time at which the toast became visible. Set by the manager.
    shown_at: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub(super) fn mark_shown(&mut self, now: Duration) {
        self.shown_at.get_or_insert(now);
    }

    /// Returns whether the toast has been visible long enough to go away.
    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        match (self.shown_at, self.severity.auto_dismiss_duration()) {
            (Some(shown_at), Some(duration)) => now.saturating_sub(shown_at) >= duration,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }

    #[test]
    fn error_never_expires() {
        let mut notification = Notification::error("error-storage");
        notification.mark_shown(Duration::ZERO);
        assert!(!notification.is_expired(Duration::from_secs(3600)));
    }

    #[test]
    fn unshown_notification_never_expires() {
        let notification = Notification::success("notification-added-to-cart");
        assert!(!notification.is_expired(Duration::from_secs(3600)));
    }

    #[test]
    fn success_expires_after_its_duration() {
        let mut notification = Notification::success("notification-added-to-cart");
        notification.mark_shown(Duration::from_secs(10));
        assert!(!notification.is_expired(Duration::from_millis(12_999)));
        assert!(notification.is_expired(Duration::from_secs(13)));
    }
}
