// SPDX-License-Identifier: MPL-2.0
//! Hero banner auto-advance cadence.

use crate::config::{DEFAULT_HERO_INTERVAL_MS, MAX_HERO_INTERVAL_MS, MIN_HERO_INTERVAL_MS};
use std::time::Duration;

/// Delay between two automatic hero advances, in milliseconds.
///
/// The value is always within 2000–60000 ms.
///
/// # Example
///
/// ```
/// use iced_flix::ui::state::HeroInterval;
///
/// let interval = HeroInterval::new(8_000);
/// assert_eq!(interval.value(), 8_000);
///
/// // Values outside range are clamped
/// let too_fast = HeroInterval::new(10);
/// assert_eq!(too_fast.value(), 2_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroInterval(u64);

impl HeroInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_HERO_INTERVAL_MS, MAX_HERO_INTERVAL_MS))
    }

    /// Reads the configured value, falling back to the default.
    #[must_use]
    pub fn from_config(millis: Option<u64>) -> Self {
        Self::new(millis.unwrap_or(DEFAULT_HERO_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HeroInterval {
    fn default() -> Self {
        Self(DEFAULT_HERO_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(HeroInterval::new(0).value(), MIN_HERO_INTERVAL_MS);
        assert_eq!(HeroInterval::new(u64::MAX).value(), MAX_HERO_INTERVAL_MS);
    }

    #[test]
    fn from_config_uses_default_when_absent() {
        assert_eq!(HeroInterval::from_config(None), HeroInterval::default());
        assert_eq!(HeroInterval::from_config(Some(5_000)).value(), 5_000);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            HeroInterval::default().as_duration(),
            Duration::from_millis(8_000)
        );
    }
}
