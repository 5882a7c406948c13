// SPDX-License-Identifier: MPL-2.0
//! Domain layer - storefront state and rules without any GUI dependency.
//!
//! Everything timed takes the current clock time as an argument, so the
//! whole layer can be driven deterministically from tests.
//!
//! # Modules
//!
//! - [`clock`]: Time sources ([`MonotonicClock`](clock::MonotonicClock),
//!   [`ManualClock`](clock::ManualClock))
//! - [`scheduler`]: Deterministic timer queue
//! - [`slider`]: Hero carousel ([`SlideController`](slider::SlideController))
//! - [`catalog`]: Products and filtering ([`FilterSelection`](catalog::FilterSelection))
//! - [`stats`]: Count-up animations
//! - [`content`]: Static home page content
//! - [`image`]: Image URL fallback

pub mod catalog;
pub mod clock;
pub mod content;
pub mod image;
pub mod scheduler;
pub mod slider;
pub mod stats;
