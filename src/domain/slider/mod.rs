// SPDX-License-Identifier: MPL-2.0
//! Hero carousel: slide deck, swipe gestures and the timed transition
//! controller.

pub mod controller;
pub mod gesture;
pub mod slide;

pub use controller::{Direction, Phase, SlideController, SliderTimings};
pub use gesture::{DragSession, GestureTracker, Swipe};
pub use slide::{Slide, SlideDeck};
