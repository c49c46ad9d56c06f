// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Dwell times for the center glyph and skip indicators
//! - **Gesture**: Double-tap detection window
//! - **Skip**: Relative seek offset for double-click / double-tap
//! - **Volume**: Initial volume level and the loud/quiet glyph threshold
//! - **Polling**: Fallback position polling cadence

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Dwell time of the center play/pause glyph (in milliseconds).
pub const DEFAULT_CENTER_DWELL_MS: u32 = 300;

/// Dwell time of the forward/backward skip indicators (in milliseconds).
pub const DEFAULT_SKIP_DWELL_MS: u32 = 500;

/// Minimum overlay dwell time (in milliseconds).
pub const MIN_DWELL_MS: u32 = 50;

/// Maximum overlay dwell time (in milliseconds).
pub const MAX_DWELL_MS: u32 = 5_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between two taps for them to count as a double tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u32 = 300;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u32 = 100;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u32 = 1_000;

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Default skip offset (in seconds).
pub const DEFAULT_SKIP_SECS: f64 = 10.0;

/// Minimum skip offset (in seconds).
pub const MIN_SKIP_SECS: f64 = 1.0;

/// Maximum skip offset (in seconds).
pub const MAX_SKIP_SECS: f64 = 60.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Initial volume level (percent).
pub const DEFAULT_VOLUME_LEVEL: u8 = 50;

/// Maximum volume level (percent).
pub const MAX_VOLUME_LEVEL: u8 = 100;

/// Levels strictly above this show the "loud" speaker glyph.
pub const LOUD_VOLUME_THRESHOLD: u8 = 50;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Position polling interval used when the media resource has no push events.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Minimum polling interval (in milliseconds).
pub const MIN_POLL_INTERVAL_MS: u32 = 16;

/// Maximum polling interval (in milliseconds).
pub const MAX_POLL_INTERVAL_MS: u32 = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Overlay validation
    assert!(MIN_DWELL_MS > 0);
    assert!(MAX_DWELL_MS >= MIN_DWELL_MS);
    assert!(DEFAULT_CENTER_DWELL_MS >= MIN_DWELL_MS);
    assert!(DEFAULT_CENTER_DWELL_MS <= MAX_DWELL_MS);
    assert!(DEFAULT_SKIP_DWELL_MS >= MIN_DWELL_MS);
    assert!(DEFAULT_SKIP_DWELL_MS <= MAX_DWELL_MS);

    // Gesture validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(MAX_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);

    // Skip validation
    assert!(MIN_SKIP_SECS > 0.0);
    assert!(MAX_SKIP_SECS >= MIN_SKIP_SECS);
    assert!(DEFAULT_SKIP_SECS >= MIN_SKIP_SECS);
    assert!(DEFAULT_SKIP_SECS <= MAX_SKIP_SECS);

    // Volume validation
    assert!(DEFAULT_VOLUME_LEVEL <= MAX_VOLUME_LEVEL);
    assert!(LOUD_VOLUME_THRESHOLD < MAX_VOLUME_LEVEL);

    // Polling validation
    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(MAX_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_defaults_are_valid() {
        assert_eq!(DEFAULT_CENTER_DWELL_MS, 300);
        assert_eq!(DEFAULT_SKIP_DWELL_MS, 500);
        assert!(DEFAULT_CENTER_DWELL_MS < DEFAULT_SKIP_DWELL_MS);
    }

    #[test]
    fn gesture_defaults_are_valid() {
        assert_eq!(DEFAULT_DOUBLE_TAP_WINDOW_MS, 300);
        assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
        assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    }

    #[test]
    fn skip_defaults_are_valid() {
        assert_eq!(DEFAULT_SKIP_SECS, 10.0);
        assert!(DEFAULT_SKIP_SECS >= MIN_SKIP_SECS);
        assert!(DEFAULT_SKIP_SECS <= MAX_SKIP_SECS);
    }

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME_LEVEL, 50);
        assert!(DEFAULT_VOLUME_LEVEL <= MAX_VOLUME_LEVEL);
    }

    #[test]
    fn polling_defaults_are_valid() {
        assert_eq!(DEFAULT_POLL_INTERVAL_MS, 100);
        assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    }
}
