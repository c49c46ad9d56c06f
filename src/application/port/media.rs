// SPDX-License-Identifier: MPL-2.0
//! Media resource port definition.
//!
//! This module defines the [`MediaResource`] trait: the capabilities the
//! playback store needs from the playing media element.
//!
//! # Design Notes
//!
//! - The resource mutates itself asynchronously (buffering, native players,
//!   autoplay policy). Values read here are authoritative; the store's
//!   mirrored fields are only a cache of them.
//! - `play()` returning `Ok` means the request was accepted. A later
//!   asynchronous refusal is delivered as a `pause`/`PlayRejected` event.
//! - Volume uses the element's 0.0–1.0 scale.

use crate::domain::error::MediaError;

/// Port for the bound media element.
///
/// # Example
///
/// ```ignore
/// use playback_overlay::application::port::MediaResource;
///
/// fn restart(media: &mut impl MediaResource) {
///     media.set_current_time(0.0);
///     if let Err(e) = media.play() {
///         tracing::warn!("restart refused: {e}");
///     }
/// }
/// ```
pub trait MediaResource {
    /// Requests playback.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::PlayRejected`] if the platform refuses to play.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pauses playback. Pausing a paused resource is a no-op.
    fn pause(&mut self);

    /// Returns the resource's own paused flag.
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position. The resource may clamp the value.
    fn set_current_time(&mut self, secs: f64);

    /// Media duration in seconds, or `None` until metadata is loaded.
    fn duration(&self) -> Option<f64>;

    /// Output volume in the 0.0–1.0 range.
    fn volume(&self) -> f64;

    /// Sets the output volume (0.0–1.0).
    fn set_volume(&mut self, volume: f64);

    /// Returns the resource's muted flag.
    fn is_muted(&self) -> bool;

    /// Sets the resource's muted flag. Does not touch the volume.
    fn set_muted(&mut self, muted: bool);

    /// Whether the resource delivers `timeupdate` push events.
    ///
    /// When false the controller falls back to polling [`Self::current_time`].
    fn emits_time_updates(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaResource) {}

    // Minimal implementation for testing default methods
    struct FixedMedia {
        paused: bool,
        time: f64,
    }

    impl MediaResource for FixedMedia {
        fn play(&mut self) -> Result<(), MediaError> {
            self.paused = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn current_time(&self) -> f64 {
            self.time
        }

        fn set_current_time(&mut self, secs: f64) {
            self.time = secs;
        }

        fn duration(&self) -> Option<f64> {
            None
        }

        fn volume(&self) -> f64 {
            1.0
        }

        fn set_volume(&mut self, _volume: f64) {}

        fn is_muted(&self) -> bool {
            false
        }

        fn set_muted(&mut self, _muted: bool) {}
    }

    #[test]
    fn push_events_are_assumed_by_default() {
        let media = FixedMedia {
            paused: true,
            time: 0.0,
        };
        assert!(media.emits_time_updates());
    }

    #[test]
    fn fixed_media_lifecycle() {
        let mut media = FixedMedia {
            paused: true,
            time: 0.0,
        };
        media.play().unwrap();
        assert!(!media.is_paused());
        media.set_current_time(4.0);
        assert_eq!(media.current_time(), 4.0);
        media.pause();
        assert!(media.is_paused());
    }
}
