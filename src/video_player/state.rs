// SPDX-License-Identifier: MPL-2.0
//! Playback state store for the video widget.
//!
//! The store is the single writer of the bound media resource on the widget
//! side and holds the mirrored [`PlaybackState`]:
//! - Playback toggling, with replay taking precedence at the end of media
//! - Absolute seeks (scrubbing) and relative skips
//! - Volume and mute, kept independent of each other
//! - Reconciliation from the resource's own events
//!
//! Every operation is a no-op while no resource is bound.

use crate::application::port::MediaResource;
use crate::domain::video::{PlaybackState, SkipClampPolicy, VolumeLevel};

/// What a call to [`PlaybackStore::toggle_playback`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Playback started from the current position.
    Played,
    /// Playback paused.
    Paused,
    /// Position was at the end; restarted from zero.
    Replayed,
    /// The resource refused the play request; the store stays paused.
    Rejected,
    /// No resource bound.
    Ignored,
}

/// Single source of truth for playback state, bound to one media resource.
#[derive(Debug)]
pub struct PlaybackStore<M> {
    /// Mirrored state.
    state: PlaybackState,

    /// Bound media resource, absent before mount or after unmount.
    media: Option<M>,

    /// Upper-bound policy for relative skips.
    skip_clamp: SkipClampPolicy,
}

impl<M: MediaResource> PlaybackStore<M> {
    /// Creates an unbound store with the given retained volume.
    pub fn new(initial_volume: VolumeLevel, skip_clamp: SkipClampPolicy) -> Self {
        Self {
            state: PlaybackState {
                volume: initial_volume,
                ..PlaybackState::default()
            },
            media: None,
            skip_clamp,
        }
    }

    /// Binds the store to a media resource (widget mount).
    ///
    /// The retained volume and mute flag are pushed to the resource; paused
    /// flag, position and duration are read from it.
    pub fn bind(&mut self, mut media: M) {
        media.set_volume(self.state.volume.as_media_volume());
        media.set_muted(self.state.is_muted);

        self.state.is_paused = media.is_paused();
        self.state.position_secs = media.current_time().max(0.0);
        self.state.duration_secs = 0.0;
        if let Some(duration) = media.duration() {
            self.accept_duration(duration);
        }

        tracing::debug!(
            duration_secs = self.state.duration_secs,
            "media resource bound"
        );
        self.media = Some(media);
    }

    /// Releases the media resource (widget unmount).
    pub fn unbind(&mut self) -> Option<M> {
        self.state.is_paused = true;
        self.media.take()
    }

    /// Returns true if a media resource is bound.
    pub fn is_bound(&self) -> bool {
        self.media.is_some()
    }

    /// Returns the mirrored playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Returns the bound media resource.
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Returns the bound media resource mutably.
    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    /// Returns the skip clamp policy.
    pub fn skip_clamp(&self) -> SkipClampPolicy {
        self.skip_clamp
    }

    /// Plays, pauses, or replays.
    ///
    /// State transitions:
    /// - at end of media (position ≥ known duration) → seek to 0 and play
    /// - paused → play (only an acknowledged request clears `is_paused`)
    /// - playing → pause
    pub fn toggle_playback(&mut self) -> PlaybackAction {
        let Some(media) = self.media.as_ref() else {
            tracing::debug!("toggle_playback ignored: no media resource bound");
            return PlaybackAction::Ignored;
        };

        // Metadata may have arrived without a loadedmetadata event reaching us
        if let Some(duration) = media.duration() {
            self.accept_duration(duration);
        }

        if self.state.is_at_end() {
            self.replay()
        } else if self.state.is_paused {
            self.play()
        } else {
            self.pause()
        }
    }

    fn play(&mut self) -> PlaybackAction {
        let Some(media) = self.media.as_mut() else {
            return PlaybackAction::Ignored;
        };
        match media.play() {
            Ok(()) => {
                self.state.is_paused = false;
                tracing::debug!(position_secs = self.state.position_secs, "playing");
                PlaybackAction::Played
            }
            Err(err) => {
                self.state.is_paused = true;
                tracing::warn!("play request failed: {err}");
                PlaybackAction::Rejected
            }
        }
    }

    fn pause(&mut self) -> PlaybackAction {
        let Some(media) = self.media.as_mut() else {
            return PlaybackAction::Ignored;
        };
        media.pause();
        self.state.is_paused = true;
        tracing::debug!(position_secs = self.state.position_secs, "paused");
        PlaybackAction::Paused
    }

    fn replay(&mut self) -> PlaybackAction {
        let Some(media) = self.media.as_mut() else {
            return PlaybackAction::Ignored;
        };
        media.set_current_time(0.0);
        self.state.position_secs = 0.0;
        match media.play() {
            Ok(()) => {
                self.state.is_paused = false;
                tracing::debug!("replaying from start");
                PlaybackAction::Replayed
            }
            Err(err) => {
                self.state.is_paused = true;
                tracing::warn!("replay request failed: {err}");
                PlaybackAction::Rejected
            }
        }
    }

    /// Seeks to an absolute position (scrubber).
    ///
    /// Clamped to `[0, duration]` once the duration is known. The mirror is
    /// written immediately, without waiting for the resource to confirm.
    pub fn seek_to(&mut self, target_secs: f64) {
        if !target_secs.is_finite() {
            tracing::debug!(target_secs, "seek ignored: non-finite target");
            return;
        }
        let Some(media) = self.media.as_mut() else {
            tracing::debug!("seek ignored: no media resource bound");
            return;
        };

        let mut target = target_secs.max(0.0);
        if self.state.has_duration() {
            target = target.min(self.state.duration_secs);
        }

        media.set_current_time(target);
        self.state.position_secs = target;
    }

    /// Moves the position by a signed offset, returning the new mirrored position.
    ///
    /// The offset applies to the resource's actual position. Skips never go
    /// below zero; past the end they overshoot unless the policy is
    /// [`SkipClampPolicy::Strict`].
    pub fn skip(&mut self, delta_secs: f64) -> Option<f64> {
        let Some(media) = self.media.as_mut() else {
            tracing::debug!("skip ignored: no media resource bound");
            return None;
        };

        let mut target = (media.current_time() + delta_secs).max(0.0);
        if self.skip_clamp == SkipClampPolicy::Strict && self.state.has_duration() {
            target = target.min(self.state.duration_secs);
        }

        media.set_current_time(target);
        self.state.position_secs = target;
        tracing::debug!(delta_secs, position_secs = target, "skipped");
        Some(target)
    }

    /// Sets the volume level.
    ///
    /// A non-zero level unmutes; level zero mutes.
    pub fn set_volume(&mut self, level: VolumeLevel) {
        let Some(media) = self.media.as_mut() else {
            tracing::debug!("volume change ignored: no media resource bound");
            return;
        };

        self.state.volume = level;
        self.state.is_muted = level.is_zero();
        media.set_volume(level.as_media_volume());
        media.set_muted(self.state.is_muted);
    }

    /// Flips the mute flag. The retained volume level is untouched.
    pub fn toggle_mute(&mut self) {
        let Some(media) = self.media.as_mut() else {
            tracing::debug!("mute toggle ignored: no media resource bound");
            return;
        };

        self.state.is_muted = !self.state.is_muted;
        media.set_muted(self.state.is_muted);
    }

    /// Volume actually heard (0.0 while muted).
    pub fn effective_volume(&self) -> f64 {
        if self.state.is_muted {
            return 0.0;
        }
        self.media
            .as_ref()
            .map_or_else(|| self.state.volume.as_media_volume(), |m| m.volume())
    }

    // -------------------------------------------------------------------------
    // Reconciliation from resource events
    // -------------------------------------------------------------------------

    /// Handles `timeupdate`.
    pub fn on_time_update(&mut self, position_secs: f64) {
        if position_secs.is_finite() {
            self.state.position_secs = position_secs.max(0.0);
        }
    }

    /// Reads the position straight from the resource (poller fallback).
    pub fn sync_position_from_media(&mut self) -> Option<f64> {
        let position = self.media.as_ref()?.current_time();
        self.on_time_update(position);
        Some(self.state.position_secs)
    }

    /// Handles `loadedmetadata`/`canplay`. Returns true if the duration changed.
    ///
    /// The duration is set once per source; later values are ignored until
    /// [`Self::reset_source`].
    pub fn on_loaded_metadata(&mut self, duration_secs: f64) -> bool {
        self.accept_duration(duration_secs)
    }

    fn accept_duration(&mut self, duration_secs: f64) -> bool {
        if self.state.has_duration() || !duration_secs.is_finite() || duration_secs <= 0.0 {
            return false;
        }
        self.state.duration_secs = duration_secs;
        tracing::debug!(duration_secs, "duration known");
        true
    }

    /// Forgets position and duration when the resource switches source.
    pub fn reset_source(&mut self) {
        self.state.duration_secs = 0.0;
        self.state.position_secs = 0.0;
        self.state.is_paused = true;
    }

    /// Handles an unsolicited `play` from the resource.
    pub fn on_external_play(&mut self) {
        if self.is_bound() {
            self.state.is_paused = false;
        }
    }

    /// Handles an unsolicited `pause` or an asynchronous play rejection.
    pub fn on_external_pause(&mut self) {
        self.state.is_paused = true;
    }

    /// Handles `ended`: paused, parked on the last position.
    pub fn on_ended(&mut self) {
        self.state.is_paused = true;
        if self.state.has_duration() {
            self.state.position_secs = self.state.position_secs.max(self.state.duration_secs);
        }
    }

    /// Marks playback as paused regardless of what the resource reports.
    ///
    /// Used after a native fullscreen player was dismissed; that player ran
    /// playback on its own and the widget must show a paused state.
    pub fn force_paused(&mut self) {
        self.state.is_paused = true;
    }

    /// Records the actual fullscreen status.
    pub fn set_full_screen(&mut self, full_screen: bool) {
        self.state.is_full_screen = full_screen;
    }
}
