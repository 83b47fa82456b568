// SPDX-License-Identifier: MPL-2.0
//! Time-based eased interpolation between two scroll offsets.

use std::time::{Duration, Instant};

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`. Returns the target once the duration has elapsed.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Fast start, gentle stop.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_abs_diff_eq!(ease_out_cubic(0.0), 0.0);
        assert_abs_diff_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn sample_starts_at_origin() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(100.0, 500.0, start, Duration::from_millis(300));
        assert_abs_diff_eq!(animation.sample(start), 100.0);
        assert!(!animation.is_finished(start));
    }

    #[test]
    fn sample_reaches_target_after_duration() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(100.0, 500.0, start, Duration::from_millis(300));
        let end = start + Duration::from_millis(400);
        assert_abs_diff_eq!(animation.sample(end), 500.0);
        assert!(animation.is_finished(end));
    }

    #[test]
    fn sample_moves_monotonically_towards_target() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(800.0, 0.0, start, Duration::from_millis(300));
        let mut previous = animation.sample(start);
        for ms in (30..=300).step_by(30) {
            let current = animation.sample(start + Duration::from_millis(ms));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn zero_duration_jumps() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(0.0, 250.0, start, Duration::ZERO);
        assert!(animation.is_finished(start));
        assert_abs_diff_eq!(animation.sample(start), 250.0);
    }
}
