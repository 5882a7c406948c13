// SPDX-License-Identifier: MPL-2.0
//! Preference and storage persistence.
//!
//! Writes happen synchronously in the update loop; both files are tiny.
//! Failures never abort the update, they come back as notifications.

use crate::config::{self, Config};
use crate::store::{KeyValueStore, PersistEffect, ThemeFlag};
use crate::ui::notifications::Notification;
use std::path::PathBuf;

/// Stores the theme choice in the config and saves it to disk.
///
/// Returns a warning notification if the file could not be written. The
/// in-memory config is updated either way.
pub fn persist_theme(
    config: &mut Config,
    theme: ThemeFlag,
    config_dir: Option<PathBuf>,
) -> Option<Notification> {
    config.general.theme_mode = theme.to_mode();

    match config::save_with_override(config, config_dir) {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            Some(Notification::warning("notification-config-save-error"))
        }
    }
}

/// Applies a cart or wishlist write and reports the outcome.
pub fn apply_effect(
    effect: &PersistEffect,
    storage: &mut dyn KeyValueStore,
    success_key: &str,
) -> Notification {
    match effect.apply(storage) {
        Ok(()) => {
            tracing::debug!(key = effect.key, len = effect.ids.len(), "sequence persisted");
            Notification::success(success_key)
        }
        Err(error) => {
            tracing::error!(key = effect.key, %error, "failed to persist sequence");
            Notification::error("notification-storage-write-error")
        }
    }
}
