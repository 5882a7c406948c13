// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{cart, home, navbar, notifications, pages, product};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Product(product::Message),
    Cart(cart::Message),
    Page(pages::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving slide timers, counters and toast expiry.
    Tick(Instant),
    /// Cursor moved anywhere in the window (x in logical pixels).
    PointerMoved(f32),
    /// Finger touched down anywhere in the window (x in logical pixels).
    PointerPressed(f32),
    /// Primary button or touch released anywhere in the window.
    PointerReleased,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the cart and wishlist file).
    /// Takes precedence over `ADENA_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ADENA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional start path such as `/product/rings`.
    pub route: Option<String>,
}
