// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the playback controller.

use super::{MediaEvent, Message, PlaybackController};
use crate::application::port::MediaResource;
use crate::domain::video::{SkipDirection, VolumeLevel};
use crate::ui::state::Overlay;
use crate::video_player::PlaybackAction;
use std::time::Instant;

impl<M: MediaResource> PlaybackController<M> {
    /// Applies one message at time `now`.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::AreaTapped => {
                self.overlays.trigger(Overlay::CenterGlyph, now);
                self.handle_toggle_playback(now);
            }
            Message::TogglePlayback => self.handle_toggle_playback(now),
            Message::Scrub(secs) => self.store.seek_to(secs),
            Message::SkipDoubleClicked(direction) => self.handle_skip(direction, now),
            Message::SkipTouched(direction) => {
                if self.gestures.register_tap(direction, now) {
                    self.handle_skip(direction, now);
                }
            }
            Message::SetVolume(level) => self.store.set_volume(VolumeLevel::new(level)),
            Message::ToggleMute => self.store.toggle_mute(),
            Message::ToggleFullscreen => self.fullscreen.toggle(&mut self.store),
            Message::OrientationChanged(orientation) => {
                tracing::debug!(?orientation, "orientation changed");
                self.fullscreen.on_orientation_change(
                    orientation,
                    self.environment.as_ref(),
                    &mut self.store,
                );
            }
            Message::FullscreenChanged(active) => {
                self.fullscreen.on_fullscreen_change(active, &mut self.store);
            }
            Message::FullscreenRequestRejected(reason) => {
                self.fullscreen.on_request_rejected(&reason, &mut self.store);
            }
            Message::Media(event) => self.handle_media_event(event, now),
        }
    }

    fn handle_toggle_playback(&mut self, now: Instant) {
        match self.store.toggle_playback() {
            PlaybackAction::Played | PlaybackAction::Replayed => self.poller.start(now),
            PlaybackAction::Paused | PlaybackAction::Rejected => self.poller.stop(),
            PlaybackAction::Ignored => {}
        }
    }

    /// The indicator is shown even when no resource is bound.
    fn handle_skip(&mut self, direction: SkipDirection, now: Instant) {
        self.store.skip(self.settings.skip_step.offset(direction));
        self.overlays.trigger(Overlay::for_skip(direction), now);
    }

    fn handle_media_event(&mut self, event: MediaEvent, now: Instant) {
        match event {
            MediaEvent::TimeUpdate(secs) => self.store.on_time_update(secs),
            MediaEvent::LoadedMetadata(duration) => {
                self.store.on_loaded_metadata(duration);
            }
            MediaEvent::SourceChanged => {
                self.poller.stop();
                self.store.reset_source();
            }
            MediaEvent::Play => {
                self.store.on_external_play();
                self.poller.start(now);
            }
            MediaEvent::Pause => {
                self.store.on_external_pause();
                self.poller.stop();
            }
            MediaEvent::Ended => {
                self.store.on_ended();
                self.poller.stop();
            }
            MediaEvent::PlayRejected(reason) => {
                tracing::warn!("play request rejected: {reason}");
                self.store.on_external_pause();
                self.poller.stop();
            }
            MediaEvent::EndFullscreen => {
                self.fullscreen.on_native_fullscreen_ended(&mut self.store);
            }
        }
    }
}
