// SPDX-License-Identifier: MPL-2.0
//! Double-tap detection for touch devices.
//!
//! Touch screens deliver single `touchstart` events, so a double tap is
//! rebuilt from two taps on the same side within the window. Every tap
//! overwrites the stored timestamp, fired or not: taps at 0, 250 and 600 ms
//! give one skip (taps 1-2), and tap 3 opens a fresh window.
//!
//! Pointer double-clicks do not go through this detector.

use crate::domain::ui::DoubleTapWindow;
use crate::domain::video::SkipDirection;
use std::time::Instant;

/// Per-direction last-tap tracker.
#[derive(Debug, Clone, Default)]
pub struct DoubleTapDetector {
    window: DoubleTapWindow,
    last_forward: Option<Instant>,
    last_backward: Option<Instant>,
}

impl DoubleTapDetector {
    pub fn new(window: DoubleTapWindow) -> Self {
        Self {
            window,
            last_forward: None,
            last_backward: None,
        }
    }

    /// Records a tap. Returns true if it completes a double tap.
    pub fn register_tap(&mut self, direction: SkipDirection, now: Instant) -> bool {
        let window = self.window.as_duration();
        let last = match direction {
            SkipDirection::Forward => &mut self.last_forward,
            SkipDirection::Backward => &mut self.last_backward,
        };

        let fired = last.is_some_and(|previous| now.saturating_duration_since(previous) <= window);
        *last = Some(now);
        fired
    }
}
