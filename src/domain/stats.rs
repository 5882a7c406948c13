// SPDX-License-Identifier: MPL-2.0
//! Animated statistics counters for the home page.

use std::time::Duration;

/// Count-up animation from `from` to `to` over `duration`, with cubic-out
/// easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub from: u64,
    pub to: u64,
    pub duration: Duration,
    started_at: Option<Duration>,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(from: u64, to: u64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
        }
    }

    /// Starts the animation at clock time `now`. Restarting is ignored.
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Puts the animation back to its initial, not started state.
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns `true` once the final value has been reached.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_sub(start) >= self.duration)
    }

    /// Value to display at clock time `now`.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> u64 {
        let Some(start) = self.started_at else {
            return self.from;
        };
        let elapsed = now.saturating_sub(start);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_out_cubic(progress);
        let from = self.from as f64;
        let span = self.to as f64 - from;
        // Rounded result always lies between `from` and `to`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (from + eased * span).round() as u64;
        value
    }
}

/// Cubic-out easing: fast start, slow finish.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Formats `value` with comma thousands separators: `799103` → `799,103`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
