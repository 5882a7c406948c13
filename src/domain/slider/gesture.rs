// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe gesture tracking.
//!
//! A [`GestureTracker`] owns at most one [`DragSession`] at a time. Sessions
//! open on pointer press, follow pointer moves, and close on release or
//! cancellation. Closing by release evaluates the horizontal travel against
//! the swipe threshold.

/// Outcome of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer travelled left past the threshold: show the next slide.
    Next,
    /// Pointer travelled right past the threshold: show the previous slide.
    Previous,
}

/// An open drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x coordinate when the gesture started.
    pub start_x: f32,
    /// Most recent pointer x coordinate seen during the gesture.
    pub last_x: f32,
}

/// Owner of the current drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    session: Option<DragSession>,
    threshold: f32,
}

impl GestureTracker {
    /// Creates a tracker that recognizes swipes longer than `threshold` pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            session: None,
            threshold: threshold.abs(),
        }
    }

    /// Opens a session at `pointer_x`. Returns `false` if one is already open.
    pub fn start(&mut self, pointer_x: f32) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            start_x: pointer_x,
            last_x: pointer_x,
        });
        true
    }

    /// Records pointer movement for the open session.
    pub fn move_to(&mut self, pointer_x: f32) {
        if let Some(session) = self.session.as_mut() {
            session.last_x = pointer_x;
        }
    }

    /// Closes the session at `pointer_x` and classifies the gesture.
    ///
    /// Returns `None` when no session was open or the travel stayed within
    /// the threshold. The session is closed in every case.
    pub fn end(&mut self, pointer_x: f32) -> Option<Swipe> {
        let session = self.session.take()?;
        let delta = session.start_x - pointer_x;
        if delta > self.threshold {
            Some(Swipe::Next)
        } else if delta < -self.threshold {
            Some(Swipe::Previous)
        } else {
            None
        }
    }

    /// Closes the session at the last recorded pointer position.
    pub fn end_at_last(&mut self) -> Option<Swipe> {
        let last_x = self.session.as_ref()?.last_x;
        self.end(last_x)
    }

    /// Closes the session without evaluating it.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracker_is_idle() {
        let tracker = GestureTracker::new(50.0);
        assert!(!tracker.is_active());
        assert!(tracker.session().is_none());
    }

    #[test]
    fn start_opens_only_one_session() {
        let mut tracker = GestureTracker::new(50.0);
        assert!(tracker.start(300.0));
        assert!(!tracker.start(10.0));
        assert_eq!(tracker.session().map(|s| s.start_x), Some(300.0));
    }

    #[test]
    fn left_swipe_past_threshold_is_next() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.start(300.0);
        assert_eq!(tracker.end(200.0), Some(Swipe::Next));
        assert!(!tracker.is_active());
    }

    #[test]
    fn right_swipe_past_threshold_is_previous() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.start(100.0);
        assert_eq!(tracker.end(151.0), Some(Swipe::Previous));
    }

    #[test]
    fn travel_at_threshold_is_not_a_swipe() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.start(100.0);
        assert_eq!(tracker.end(50.0), None);
        assert!(!tracker.is_active(), "session closes regardless of outcome");
    }

    #[test]
    fn end_without_session_is_none() {
        let mut tracker = GestureTracker::new(50.0);
        assert_eq!(tracker.end(0.0), None);
    }

    #[test]
    fn end_at_last_uses_recorded_movement() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.start(400.0);
        tracker.move_to(380.0);
        tracker.move_to(250.0);
        assert_eq!(tracker.end_at_last(), Some(Swipe::Next));
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.move_to(10.0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn cancel_closes_without_swipe() {
        let mut tracker = GestureTracker::new(50.0);
        tracker.start(400.0);
        tracker.move_to(0.0);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert_eq!(tracker.end_at_last(), None);
    }
}
