// SPDX-License-Identifier: MPL-2.0
//! Render model for the video controls.
//!
//! [`ControlsView`] is everything a host needs to draw the widget: which
//! glyphs to show, slider values and overlay visibility. It is rebuilt from
//! the playback state after every message.

use super::state::{Overlay, OverlaySet};
use crate::domain::video::PlaybackState;

/// Glyph of the play button in the controls bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
    /// Shown at the end of media; pressing it restarts.
    Replay,
}

/// Glyph flashed in the center after a tap on the video area.
///
/// It reflects the state just entered, not the action available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterGlyph {
    Paused,
    Playing,
}

/// Speaker glyph next to the volume slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeGlyph {
    Muted,
    Low,
    High,
}

/// Snapshot of everything the widget renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub play_glyph: PlayGlyph,
    pub center_glyph: CenterGlyph,
    pub center_visible: bool,
    pub forward_visible: bool,
    pub backward_visible: bool,

    /// Scrubber thumb position in seconds.
    pub scrubber_position_secs: f64,
    /// Scrubber upper bound; `0.0` until the duration is known.
    pub scrubber_max_secs: f64,

    pub volume_glyph: VolumeGlyph,
    /// Volume slider value; reads 0 while muted.
    pub volume_slider: u8,

    pub is_full_screen: bool,
}

impl ControlsView {
    pub fn new(state: &PlaybackState, overlays: &OverlaySet) -> Self {
        let play_glyph = if state.is_at_end() {
            PlayGlyph::Replay
        } else if state.is_paused {
            PlayGlyph::Play
        } else {
            PlayGlyph::Pause
        };

        let volume_glyph = if state.is_muted {
            VolumeGlyph::Muted
        } else if state.volume.is_loud() {
            VolumeGlyph::High
        } else {
            VolumeGlyph::Low
        };

        let scrubber_position_secs = if state.has_duration() {
            state.position_secs.min(state.duration_secs)
        } else {
            state.position_secs
        };

        Self {
            play_glyph,
            center_glyph: if state.is_paused {
                CenterGlyph::Paused
            } else {
                CenterGlyph::Playing
            },
            center_visible: overlays.is_visible(Overlay::CenterGlyph),
            forward_visible: overlays.is_visible(Overlay::ForwardIndicator),
            backward_visible: overlays.is_visible(Overlay::BackwardIndicator),
            scrubber_position_secs,
            scrubber_max_secs: state.duration_secs,
            volume_glyph,
            volume_slider: if state.is_muted {
                0
            } else {
                state.volume.value()
            },
            is_full_screen: state.is_full_screen,
        }
    }
}
