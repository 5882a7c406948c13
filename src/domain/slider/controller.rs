// SPDX-License-Identifier: MPL-2.0
//! Hero slide controller.
//!
//! The controller is a small state machine with three phases:
//!
//! ```text
//!   Idle ──advance──▶ Exiting{target} ──exit delay──▶ Entering ──entry delay──▶ Idle
//! ```
//!
//! The visible index changes only on the `Exiting → Entering` boundary. While
//! a transition is running every navigation request is ignored, which
//! serializes manual clicks, swipes and the automatic cycle.
//!
//! Timers live in a [`Scheduler`] and fire when the owner calls
//! [`SlideController::tick`] with the current clock time. Follow-up timers are
//! scheduled relative to the deadline of the timer that fired, so a late tick
//! replays the same timeline as a punctual one.

use super::gesture::{GestureTracker, Swipe};
use super::slide::{Slide, SlideDeck};
use crate::config::{defaults, Config};
use crate::domain::scheduler::{Scheduler, TimerId};
use std::time::Duration;

/// Navigation direction through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Transition phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The current slide is fading out; `target` becomes current next.
    Exiting { target: usize },
    /// The new slide is fading in.
    Entering,
}

/// Durations and thresholds used by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTimings {
    pub exit_delay: Duration,
    pub entry_delay: Duration,
    pub cycle_interval: Duration,
    /// Minimum horizontal travel, in pixels, for a drag to count as a swipe.
    pub drag_threshold: f32,
}

impl Default for SliderTimings {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_millis(defaults::DEFAULT_EXIT_DELAY_MS),
            entry_delay: Duration::from_millis(defaults::DEFAULT_ENTRY_DELAY_MS),
            cycle_interval: Duration::from_millis(defaults::DEFAULT_CYCLE_INTERVAL_MS),
            drag_threshold: defaults::DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl SliderTimings {
    /// Reads timings from the `[slider]` config section, clamped to bounds.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            exit_delay: config.slider.exit_delay(),
            entry_delay: config.slider.entry_delay(),
            cycle_interval: config.slider.cycle_interval(),
            drag_threshold: config.slider.drag_threshold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliderTimer {
    ExitElapsed,
    EntryElapsed,
    CycleElapsed,
}

/// Controller for the hero carousel.
#[derive(Debug, Clone)]
pub struct SlideController {
    deck: SlideDeck,
    current_index: usize,
    phase: Phase,
    /// Clock time at which the current phase began.
    phase_started: Duration,
    timings: SliderTimings,
    timers: Scheduler<SliderTimer>,
    cycle_timer: Option<TimerId>,
    gestures: GestureTracker,
    torn_down: bool,
}

impl SlideController {
    /// Mounts a controller at index 0 and arms the automatic cycle.
    #[must_use]
    pub fn mount(deck: SlideDeck, timings: SliderTimings, now: Duration) -> Self {
        let mut controller = Self {
            deck,
            current_index: 0,
            phase: Phase::Idle,
            phase_started: now,
            timings,
            timers: Scheduler::new(),
            cycle_timer: None,
            gestures: GestureTracker::new(timings.drag_threshold),
            torn_down: false,
        };
        controller.arm_cycle(now);
        tracing::debug!(slides = controller.deck.len(), "hero slider mounted");
        controller
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        self.deck.get(self.current_index)
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_active()
    }

    #[must_use]
    pub fn timings(&self) -> &SliderTimings {
        &self.timings
    }

    /// Earliest pending timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Opacity of the visible slide content at `now`, in `[0, 1]`.
    ///
    /// Fades out across the exit delay and back in across the entry delay.
    #[must_use]
    pub fn content_opacity(&self, now: Duration) -> f32 {
        let progress = |delay: Duration| {
            if delay.is_zero() {
                return 1.0;
            }
            let elapsed = now.saturating_sub(self.phase_started);
            (elapsed.as_secs_f32() / delay.as_secs_f32()).clamp(0.0, 1.0)
        };
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Exiting { .. } => 1.0 - progress(self.timings.exit_delay),
            Phase::Entering => progress(self.timings.entry_delay),
        }
    }

    /// Starts a transition to the neighbouring slide in `direction`.
    ///
    /// Returns `false` without side effects while a transition is running or
    /// after teardown.
    pub fn advance(&mut self, direction: Direction, now: Duration) -> bool {
        let count = self.deck.len();
        let target = match direction {
            Direction::Forward => (self.current_index + 1) % count,
            Direction::Backward => (self.current_index + count - 1) % count,
        };
        self.begin_transition(target, now)
    }

    /// Starts a transition to `index`, clamped into the deck.
    pub fn go_to(&mut self, index: usize, now: Duration) -> bool {
        let target = index.min(self.deck.len() - 1);
        self.begin_transition(target, now)
    }

    fn begin_transition(&mut self, target: usize, now: Duration) -> bool {
        if self.torn_down || self.is_transitioning() {
            return false;
        }
        tracing::debug!(from = self.current_index, to = target, "slide transition started");
        self.enter_phase(Phase::Exiting { target }, now);
        self.timers
            .schedule(now + self.timings.exit_delay, SliderTimer::ExitElapsed);
        true
    }

    /// Fires every timer due at `now`. Returns `true` if anything fired.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.torn_down {
            return false;
        }
        let mut fired_any = false;
        while let Some(fired) = self.timers.pop_due(now) {
            fired_any = true;
            let at = fired.deadline;
            match fired.event {
                SliderTimer::ExitElapsed => self.on_exit_elapsed(at),
                SliderTimer::EntryElapsed => self.enter_phase(Phase::Idle, at),
                SliderTimer::CycleElapsed => {
                    self.cycle_timer = None;
                    self.advance(Direction::Forward, at);
                    // Committing a changed index re-arms the cycle at the exit
                    // boundary; keep it armed until then.
                    if self.cycle_timer.is_none() {
                        self.arm_cycle(at);
                    }
                }
            }
        }
        fired_any
    }

    fn on_exit_elapsed(&mut self, at: Duration) {
        let Phase::Exiting { target } = self.phase else {
            return;
        };
        let changed = target != self.current_index;
        self.current_index = target;
        self.enter_phase(Phase::Entering, at);
        self.timers
            .schedule(at + self.timings.entry_delay, SliderTimer::EntryElapsed);
        if changed {
            self.arm_cycle(at);
        }
        tracing::debug!(index = target, "slide committed");
    }

    fn enter_phase(&mut self, phase: Phase, at: Duration) {
        self.phase = phase;
        self.phase_started = at;
    }

    /// (Re)starts the automatic cycle countdown from `at`.
    fn arm_cycle(&mut self, at: Duration) {
        if let Some(id) = self.cycle_timer.take() {
            self.timers.cancel(id);
        }
        let id = self
            .timers
            .schedule(at + self.timings.cycle_interval, SliderTimer::CycleElapsed);
        self.cycle_timer = Some(id);
    }

    /// Opens a drag session at `pointer_x` unless one is already active.
    pub fn on_drag_start(&mut self, pointer_x: f32) -> bool {
        if self.torn_down {
            return false;
        }
        self.gestures.start(pointer_x)
    }

    pub fn on_drag_move(&mut self, pointer_x: f32) {
        if !self.torn_down {
            self.gestures.move_to(pointer_x);
        }
    }

    /// Ends the drag session at `pointer_x`. Returns `true` if a swipe
    /// started a transition.
    pub fn on_drag_end(&mut self, pointer_x: f32, now: Duration) -> bool {
        if self.torn_down {
            return false;
        }
        let swipe = self.gestures.end(pointer_x);
        self.apply_swipe(swipe, now)
    }

    /// Ends an active session at its last known pointer position.
    ///
    /// Used for releases delivered outside the hero surface.
    pub fn on_pointer_released(&mut self, now: Duration) -> bool {
        if self.torn_down {
            return false;
        }
        let swipe = self.gestures.end_at_last();
        self.apply_swipe(swipe, now)
    }

    /// Drops the drag session without evaluating it.
    pub fn cancel_drag(&mut self) {
        self.gestures.cancel();
    }

    fn apply_swipe(&mut self, swipe: Option<Swipe>, now: Duration) -> bool {
        match swipe {
            Some(Swipe::Next) => self.advance(Direction::Forward, now),
            Some(Swipe::Previous) => self.advance(Direction::Backward, now),
            None => false,
        }
    }

    /// Cancels every pending timer and drag session. Afterwards the
    /// controller ignores all input.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.cycle_timer = None;
        self.gestures.cancel();
        self.torn_down = true;
        tracing::debug!("hero slider torn down");
    }
}
