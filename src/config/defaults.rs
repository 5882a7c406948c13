// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slider**: Hero carousel transition timing and swipe threshold
//! - **Catalog**: Price filter bounds and slider step
//! - **Layout**: Fixed component sizes shared by several views

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Time the outgoing slide content takes to fade out (in milliseconds).
pub const DEFAULT_EXIT_DELAY_MS: u64 = 500;

/// Time the incoming slide content takes to fade in (in milliseconds).
pub const DEFAULT_ENTRY_DELAY_MS: u64 = 500;

/// Upper bound for either transition delay (in milliseconds).
pub const MAX_TRANSITION_DELAY_MS: u64 = 5_000;

/// Interval between automatic slide advances (in milliseconds).
pub const DEFAULT_CYCLE_INTERVAL_MS: u64 = 4_000;

/// Minimum automatic cycle interval (in milliseconds).
pub const MIN_CYCLE_INTERVAL_MS: u64 = 1_000;

/// Maximum automatic cycle interval (in milliseconds).
pub const MAX_CYCLE_INTERVAL_MS: u64 = 60_000;

/// Horizontal pointer travel needed for a swipe to change slide (in pixels).
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold (in pixels).
pub const MIN_DRAG_THRESHOLD_PX: f32 = 5.0;

/// Maximum swipe threshold (in pixels).
pub const MAX_DRAG_THRESHOLD_PX: f32 = 500.0;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Upper bound of the price filter.
pub const DEFAULT_MAX_PRICE: u32 = 20_000;

/// Smallest configurable price filter upper bound.
pub const MIN_MAX_PRICE: u32 = 100;

/// Price slider step.
pub const DEFAULT_PRICE_STEP: u32 = 100;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height of the search overlay when open.
pub const SEARCH_OVERLAY_HEIGHT: f32 = 128.0;

/// Height of the hero carousel.
pub const HERO_HEIGHT: f32 = 420.0;

/// Refresh interval for timers while the home page is mounted (in milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_EXIT_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(DEFAULT_ENTRY_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(MIN_CYCLE_INTERVAL_MS <= DEFAULT_CYCLE_INTERVAL_MS);
    assert!(DEFAULT_CYCLE_INTERVAL_MS <= MAX_CYCLE_INTERVAL_MS);
    assert!(MIN_DRAG_THRESHOLD_PX <= DEFAULT_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);
    assert!(MIN_MAX_PRICE <= DEFAULT_MAX_PRICE);
    assert!(DEFAULT_PRICE_STEP > 0);
    assert!(DEFAULT_PRICE_STEP <= MIN_MAX_PRICE);
};
