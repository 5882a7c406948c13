// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for action feedback (item added to the cart) and for problems the
//! app recovered from (unreadable storage, unwritable preferences).
//!
//! - Duration: 3s for success, 6s for warnings, manual dismiss for errors
//! - At most 3 visible toasts, others are queued
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
