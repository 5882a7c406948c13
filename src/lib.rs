// SPDX-License-Identifier: MPL-2.0
//! `adena` is a desktop jewelry storefront built with the Iced GUI framework.
//!
//! It shows a rotating hero carousel, animated statistics and a filterable
//! product listing, and keeps the cart and wishlist on the device.
//!
//! # Layers
//!
//! - [`domain`]: carousel state machine, catalog filtering, timers
//! - [`store`]: catalog and theme containers, on-device storage
//! - [`ui`]: pages and shared widgets
//! - [`app`]: application root, routing and persistence

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod store;
pub mod ui;
