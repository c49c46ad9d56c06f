// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by `PlaybackController::update`.

use crate::domain::ui::Orientation;
use crate::domain::video::SkipDirection;

/// Every input the widget reacts to, from the user or the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tap/click on the video surface: flash the center glyph and toggle.
    AreaTapped,
    /// Play button in the controls bar.
    TogglePlayback,
    /// Scrubber moved to a position in seconds.
    Scrub(f64),
    /// Pointer double-click on a skip zone.
    SkipDoubleClicked(SkipDirection),
    /// Single `touchstart` on a skip zone.
    SkipTouched(SkipDirection),
    /// Volume slider moved (0–100).
    SetVolume(u8),
    ToggleMute,
    /// Fullscreen button.
    ToggleFullscreen,
    /// `orientationchange`.
    OrientationChanged(Orientation),
    /// `fullscreenchange` (or a vendor variant), with the new status.
    FullscreenChanged(bool),
    /// A pending fullscreen request was refused asynchronously.
    FullscreenRequestRejected(String),
    /// Event from the media resource.
    Media(MediaEvent),
}

/// Events emitted by the media resource itself.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// `timeupdate`, with the current position in seconds.
    TimeUpdate(f64),
    /// `loadedmetadata`/`canplay`, with the duration in seconds.
    LoadedMetadata(f64),
    /// `emptied`/`loadstart`: the resource switched source.
    SourceChanged,
    /// `play` not initiated by the widget.
    Play,
    /// `pause` not initiated by the widget.
    Pause,
    /// `ended`.
    Ended,
    /// The play promise rejected.
    PlayRejected(String),
    /// `webkitendfullscreen`: the native player left fullscreen.
    EndFullscreen,
}

impl From<MediaEvent> for Message {
    fn from(event: MediaEvent) -> Self {
        Message::Media(event)
    }
}
