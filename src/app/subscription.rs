// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The application is the single owner of global pointer listeners: cursor
//! moves and button releases anywhere in the window are forwarded while the
//! home page is mounted, so a drag that ends outside the hero still ends.
//! Finger presses carry their own position, since a touch screen reports
//! no movement between the last lift and the next press.

use super::Message;
use crate::config::defaults::ANIMATION_TICK_MS;
use iced::{event, mouse, time, touch, Subscription};
use std::time::Duration;

/// Creates the pointer subscription feeding the hero drag gesture.
///
/// Returns an empty subscription when no page needs pointer tracking.
pub fn create_pointer_subscription(home_mounted: bool) -> Subscription<Message> {
    if !home_mounted {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position.x))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | event::Event::Touch(touch::Event::FingerLifted { .. })
        | event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::PointerReleased),
        event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position.x))
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(position.x))
        }
        _ => None,
    })
}

/// Creates the periodic tick that drives slide timers, counters and toast
/// expiry. Runs only while one of them has pending work.
pub fn create_tick_subscription(
    home_wants_ticks: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if home_wants_ticks || has_notifications {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
