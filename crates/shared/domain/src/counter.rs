//! Arithmetic behind the animated stat counters.
//!
//! The counter is a linear interpolation from zero to a target over a fixed duration.
//! Callers feed it the time elapsed since the first frame; the UI layer owns the clock.

use crate::config::DEFAULT_COUNTER_DURATION_MS;
use std::time::Duration;

/// A single frame of a running counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Integer to display, always within `0..=target`.
    pub value: u64,
    /// `true` once progress has reached 1; no further frames are needed.
    pub finished: bool,
}

/// Linear count-up from zero to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
}

impl Default for CounterAnimation {
    fn default() -> Self {
        Self::new(0, Duration::from_millis(DEFAULT_COUNTER_DURATION_MS))
    }
}

impl CounterAnimation {
    #[must_use]
    pub const fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the animation completed, clamped to `0.0..=1.0`.
    ///
    /// A zero duration counts as already complete.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`: `floor(progress * target)`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn value(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        // Float rounding must never push an intermediate frame past the target.
        ((progress * self.target as f64).floor() as u64).min(self.target)
    }

    #[must_use]
    pub fn frame(&self, elapsed: Duration) -> CounterFrame {
        CounterFrame { value: self.value(elapsed), finished: self.progress(elapsed) >= 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_at_target() {
        let counter = CounterAnimation::new(99, Duration::from_millis(2000));
        assert_eq!(counter.value(Duration::ZERO), 0);
        assert_eq!(counter.value(Duration::from_millis(2000)), 99);
        assert_eq!(counter.value(Duration::from_secs(60)), 99);
    }

    #[test]
    fn interpolates_linearly_and_floors() {
        let counter = CounterAnimation::new(10, Duration::from_millis(2000));
        assert_eq!(counter.value(Duration::from_millis(1000)), 5);
        assert_eq!(counter.value(Duration::from_millis(1999)), 9);
        assert!(!counter.frame(Duration::from_millis(1999)).finished);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let counter = CounterAnimation::new(24, Duration::ZERO);
        assert_eq!(counter.frame(Duration::ZERO), CounterFrame { value: 24, finished: true });
    }

    #[test]
    fn default_uses_two_seconds() {
        assert_eq!(CounterAnimation::default().duration(), Duration::from_millis(2000));
    }
}
