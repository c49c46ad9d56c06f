// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_SKIP_SECS, DEFAULT_VOLUME_LEVEL, LOUD_VOLUME_THRESHOLD,
    MAX_POLL_INTERVAL_MS, MAX_SKIP_SECS, MAX_VOLUME_LEVEL, MIN_POLL_INTERVAL_MS, MIN_SKIP_SECS,
};
use std::time::Duration;

// =============================================================================
// VolumeLevel
// =============================================================================

/// Volume level in percent, guaranteed to be within valid range (0–100).
///
/// This is the value shown on the volume slider. The media resource takes a
/// 0.0–1.0 float, see [`VolumeLevel::as_media_volume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Silent level.
    pub const ZERO: Self = Self(0);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_VOLUME_LEVEL))
    }

    /// Returns the level as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the level is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the level warrants the "loud" speaker glyph.
    #[must_use]
    pub fn is_loud(self) -> bool {
        self.0 > LOUD_VOLUME_THRESHOLD
    }

    /// Converts to the media resource scale (0.0–1.0), rounded to tenths.
    ///
    /// Ties (levels ending in 5) follow the binary value of `level / 100`,
    /// the way `Number.toFixed(1)` rounds: 15 gives 0.1, 45 gives 0.5.
    ///
    /// # Example
    ///
    /// ```
    /// use playback_overlay::domain::video::VolumeLevel;
    ///
    /// assert_eq!(VolumeLevel::new(50).as_media_volume(), 0.5);
    /// assert_eq!(VolumeLevel::new(37).as_media_volume(), 0.4);
    /// ```
    #[must_use]
    pub fn as_media_volume(self) -> f64 {
        let level = f64::from(self.0);
        let tenths = self.0 / 10;
        let round_up = match self.0 % 10 {
            0..=4 => false,
            5 => (level / 100.0).mul_add(100.0, -level) >= 0.0,
            _ => true,
        };
        f64::from(tenths + u8::from(round_up)) / 10.0
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(DEFAULT_VOLUME_LEVEL)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip offset in seconds used by double-click and double-tap.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SKIP_SECS, MAX_SKIP_SECS))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the signed offset for the given direction.
    #[must_use]
    pub fn offset(self, direction: super::SkipDirection) -> f64 {
        self.0 * direction.sign()
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_SECS)
    }
}

// =============================================================================
// PollInterval
// =============================================================================

/// Interval of the fallback position poller, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u32);

impl PollInterval {
    /// Creates a new poll interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(DEFAULT_POLL_INTERVAL_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::SkipDirection;
    use crate::test_utils::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // VolumeLevel tests
    // -------------------------------------------------------------------------

    #[test]
    fn volume_level_clamps_to_max() {
        assert_eq!(VolumeLevel::new(150).value(), MAX_VOLUME_LEVEL);
        assert_eq!(VolumeLevel::new(42).value(), 42);
    }

    #[test]
    fn volume_level_default_is_half() {
        assert_eq!(VolumeLevel::default().value(), DEFAULT_VOLUME_LEVEL);
    }

    #[test]
    fn volume_level_rounds_media_volume_to_tenths() {
        assert_abs_diff_eq!(VolumeLevel::new(0).as_media_volume(), 0.0);
        assert_abs_diff_eq!(VolumeLevel::new(4).as_media_volume(), 0.0);
        assert_abs_diff_eq!(VolumeLevel::new(5).as_media_volume(), 0.1);
        assert_abs_diff_eq!(VolumeLevel::new(64).as_media_volume(), 0.6);
        assert_abs_diff_eq!(VolumeLevel::new(100).as_media_volume(), 1.0);
    }

    #[test]
    fn volume_level_ties_follow_binary_value() {
        assert_abs_diff_eq!(VolumeLevel::new(15).as_media_volume(), 0.1);
        assert_abs_diff_eq!(VolumeLevel::new(25).as_media_volume(), 0.3);
        assert_abs_diff_eq!(VolumeLevel::new(35).as_media_volume(), 0.3);
        assert_abs_diff_eq!(VolumeLevel::new(45).as_media_volume(), 0.5);
        assert_abs_diff_eq!(VolumeLevel::new(85).as_media_volume(), 0.8);
        assert_abs_diff_eq!(VolumeLevel::new(95).as_media_volume(), 0.9);
    }

    #[test]
    fn volume_level_loud_threshold() {
        assert!(!VolumeLevel::new(50).is_loud());
        assert!(VolumeLevel::new(51).is_loud());
        assert!(VolumeLevel::ZERO.is_zero());
    }

    // -------------------------------------------------------------------------
    // SkipStep tests
    // -------------------------------------------------------------------------

    #[test]
    fn skip_step_clamps_to_valid_range() {
        assert_abs_diff_eq!(SkipStep::new(0.0).value(), MIN_SKIP_SECS);
        assert_abs_diff_eq!(SkipStep::new(500.0).value(), MAX_SKIP_SECS);
        assert_abs_diff_eq!(SkipStep::new(f64::NAN).value(), DEFAULT_SKIP_SECS);
    }

    #[test]
    fn skip_step_offset_is_signed() {
        let step = SkipStep::default();
        assert_abs_diff_eq!(step.offset(SkipDirection::Forward), 10.0);
        assert_abs_diff_eq!(step.offset(SkipDirection::Backward), -10.0);
    }

    // -------------------------------------------------------------------------
    // PollInterval tests
    // -------------------------------------------------------------------------

    #[test]
    fn poll_interval_clamps_and_converts() {
        assert_eq!(PollInterval::new(0).value(), MIN_POLL_INTERVAL_MS);
        assert_eq!(PollInterval::new(10_000).value(), MAX_POLL_INTERVAL_MS);
        assert_eq!(
            PollInterval::default().as_duration(),
            Duration::from_millis(100)
        );
    }
}
