// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI timing values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_CENTER_DWELL_MS, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_SKIP_DWELL_MS,
    MAX_DOUBLE_TAP_WINDOW_MS, MAX_DWELL_MS, MIN_DOUBLE_TAP_WINDOW_MS, MIN_DWELL_MS,
};
use std::time::Duration;

// =============================================================================
// DwellTime
// =============================================================================

/// How long an overlay stays visible after its last trigger, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (50–5000 ms).
///
/// # Example
///
/// ```
/// use playback_overlay::domain::ui::DwellTime;
///
/// let dwell = DwellTime::new(500);
/// assert_eq!(dwell.value(), 500);
///
/// // Values outside range are clamped
/// assert_eq!(DwellTime::new(0).value(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellTime(u32);

impl DwellTime {
    /// Creates a new dwell time, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_DWELL_MS, MAX_DWELL_MS))
    }

    /// Dwell of the center play/pause glyph.
    #[must_use]
    pub fn center_glyph() -> Self {
        Self(DEFAULT_CENTER_DWELL_MS)
    }

    /// Dwell of the forward/backward skip indicators.
    #[must_use]
    pub fn skip_indicator() -> Self {
        Self(DEFAULT_SKIP_DWELL_MS)
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the dwell as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum delay between two taps that still counts as a double tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u32);

impl DoubleTapWindow {
    /// Creates a new window, clamping to valid range (100–1000 ms).
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwell_time_clamps_to_valid_range() {
        assert_eq!(DwellTime::new(0).value(), MIN_DWELL_MS);
        assert_eq!(DwellTime::new(60_000).value(), MAX_DWELL_MS);
        assert_eq!(DwellTime::new(750).value(), 750);
    }

    #[test]
    fn dwell_time_presets() {
        assert_eq!(
            DwellTime::center_glyph().as_duration(),
            Duration::from_millis(300)
        );
        assert_eq!(
            DwellTime::skip_indicator().as_duration(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn double_tap_window_clamps_and_defaults() {
        assert_eq!(DoubleTapWindow::new(1).value(), MIN_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(DoubleTapWindow::new(5_000).value(), MAX_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(
            DoubleTapWindow::default().as_duration(),
            Duration::from_millis(300)
        );
    }
}
