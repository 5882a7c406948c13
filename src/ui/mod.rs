// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every page follows the Elm-style "state down, messages up" pattern: a
//! `ViewContext` carries what the page needs to render, `update` turns a
//! page `Message` into an `Event` for the application.
//!
//! # Pages
//!
//! - [`home`] - Hero carousel, statistics and landing sections
//! - [`product`] - Filter sidebar and product grid
//! - [`cart`] - Cart and wishlist
//! - [`pages`] - About, contact and account
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with search overlay and theme toggle
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes and theme mode

pub mod cart;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod product;
pub mod styles;
pub mod theming;

use crate::domain::catalog::{Category, Metal};
use crate::i18n::fluent::I18n;

/// Display name of a category: the translation, or the raw identifier for
/// categories without one.
#[must_use]
pub fn category_label(i18n: &I18n, category: &Category) -> String {
    category
        .i18n_key()
        .map_or_else(|| category.id().to_string(), |key| i18n.tr(key))
}

/// Display name of a metal.
#[must_use]
pub fn metal_label(i18n: &I18n, metal: &Metal) -> String {
    metal
        .i18n_key()
        .map_or_else(|| metal.id().to_string(), |key| i18n.tr(key))
}
