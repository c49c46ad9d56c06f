// SPDX-License-Identifier: MPL-2.0
//! Video playback state snapshot.
//!
//! This module defines the mirrored playback state owned by the playback
//! store, plus the small enums describing skip gestures.

use super::VolumeLevel;

/// Mirrored state of the bound media resource.
///
/// Position and duration are a cache of resource-owned values; they are kept
/// approximately consistent by `timeupdate`/`loadedmetadata` events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// True unless a play request was acknowledged and nothing paused since.
    pub is_paused: bool,
    /// Media duration in seconds. `0.0` means unknown (metadata not loaded).
    pub duration_secs: f64,
    /// Current position in seconds, never negative.
    pub position_secs: f64,
    /// Retained volume level; muting does not change it.
    pub volume: VolumeLevel,
    /// Whether the resource is muted.
    pub is_muted: bool,
    /// Actual (not requested) fullscreen status.
    pub is_full_screen: bool,
}

impl PlaybackState {
    /// Returns true once metadata has provided a duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration_secs > 0.0
    }

    /// Returns true if toggling playback must restart from the beginning.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.has_duration() && self.position_secs >= self.duration_secs
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_paused: true,
            duration_secs: 0.0,
            position_secs: 0.0,
            volume: VolumeLevel::default(),
            is_muted: false,
            is_full_screen: false,
        }
    }
}

/// Direction of a skip gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipDirection {
    Forward,
    Backward,
}

impl SkipDirection {
    /// Returns `1.0` for forward and `-1.0` for backward.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Upper-bound policy applied by relative skips.
///
/// Skips never go below zero. `Overshoot` lets a forward skip land past the
/// end of the media; `Strict` clamps it to the known duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipClampPolicy {
    #[default]
    Overshoot,
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_paused_with_unknown_duration() {
        let state = PlaybackState::default();
        assert!(state.is_paused);
        assert!(!state.has_duration());
        assert!(!state.is_full_screen);
    }

    #[test]
    fn at_end_requires_known_duration() {
        let mut state = PlaybackState::default();
        assert!(!state.is_at_end());

        state.duration_secs = 30.0;
        state.position_secs = 30.0;
        assert!(state.is_at_end());

        state.position_secs = 40.0;
        assert!(state.is_at_end());

        state.position_secs = 29.9;
        assert!(!state.is_at_end());
    }

    #[test]
    fn skip_direction_sign() {
        assert_eq!(SkipDirection::Forward.sign(), 1.0);
        assert_eq!(SkipDirection::Backward.sign(), -1.0);
    }
}
