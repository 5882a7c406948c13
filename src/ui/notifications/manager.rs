// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts and expires them
//! against the clock time passed to [`Manager::tick`].

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a notification; it shows immediately if there is room.
    ///
    /// Warnings and errors are also logged.
    pub fn push(&mut self, mut notification: Notification, now: Duration) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "notification"),
            Severity::Error => tracing::error!(key = notification.message_key(), "notification"),
            Severity::Success => {}
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId, now: Duration) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops expired notifications.
    pub fn tick(&mut self, now: Duration) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Duration) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Duration) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: Duration = Duration::ZERO;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")), T0);
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"), T0);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first, T0);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")), T0);
        }
        manager.push(Notification::success("queued"), T0);

        assert!(manager.dismiss(first_id, T0));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("temp").id();
        assert!(!manager.dismiss(stray, T0));
    }

    #[test]
    fn tick_expires_success_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-added-to-cart"), T0);
        let error = Notification::error("error-storage");
        let error_id = error.id();
        manager.push(error, T0);

        manager.tick(Duration::from_secs(10));
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Dismiss(error_id), Duration::from_secs(10));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promoted_notification_times_from_promotion() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")), T0);
        }
        manager.push(Notification::success("queued"), T0);

        // The first three expire at 3s and the queued one shows from then.
        manager.tick(Duration::from_secs(3));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(Duration::from_secs(5));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(Duration::from_secs(6));
        assert_eq!(manager.visible_count(), 0);
    }
}
