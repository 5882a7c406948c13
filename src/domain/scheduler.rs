// SPDX-License-Identifier: MPL-2.0
//! Deterministic timer queue.
//!
//! A [`Scheduler`] stores deferred events keyed by their deadline. Nothing
//! fires on its own: the owner calls [`Scheduler::pop_due`] with the current
//! clock time and handles each event it gets back. Events with equal
//! deadlines fire in the order they were scheduled.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled event, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A fired timer: its deadline, handle and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub deadline: Duration,
    pub id: TimerId,
    pub event: T,
}

/// Queue of pending timed events.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    pending: BTreeMap<(Duration, TimerId), T>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire once the clock reaches `deadline`.
    pub fn schedule(&mut self, deadline: Duration, event: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), event);
        id
    }

    /// Cancels a pending event. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, pending)| *pending == id).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancels every pending event.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns the earliest event whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<T>> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.pending.remove(&(deadline, id)).map(|event| Fired {
            deadline,
            id,
            event,
        })
    }

    /// Deadline of the earliest pending event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Returns `true` if the given timer is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.keys().any(|(_, pending)| *pending == id)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
