// SPDX-License-Identifier: MPL-2.0
//! Application root for the playback widget.
//!
//! [`PlaybackController`] wires the playback store, transient overlays,
//! double-tap detection, position polling and fullscreen coordination
//! together and exposes an Elm-style loop to hosts:
//!
//! - `update(message, now)` for every user or platform input,
//! - `tick(now)` when [`PlaybackController::next_deadline`] passes,
//! - `view()` to obtain the render model.
//!
//! Time is always passed in, so the same controller runs under the tokio
//! driver in [`subscription`], the scenario runner, and unit tests.

pub mod fullscreen;
pub mod message;
pub mod subscription;
mod update;

pub use fullscreen::FullscreenCoordinator;
pub use message::{MediaEvent, Message};

use crate::application::port::{FullscreenController, MediaResource, PlatformEnvironment};
use crate::config::ControllerSettings;
use crate::domain::video::PlaybackState;
use crate::ui::controls::ControlsView;
use crate::ui::state::{DoubleTapDetector, OverlaySet};
use crate::video_player::{PlaybackStore, PositionPoller, PositionSync};
use std::fmt;
use std::time::Instant;

/// Root state of one video widget.
pub struct PlaybackController<M> {
    store: PlaybackStore<M>,
    overlays: OverlaySet,
    gestures: DoubleTapDetector,
    poller: PositionPoller,
    fullscreen: FullscreenCoordinator,
    environment: Box<dyn PlatformEnvironment>,
    settings: ControllerSettings,
}

impl<M: MediaResource> PlaybackController<M> {
    /// Creates an unmounted controller.
    ///
    /// `fullscreen` must already be the controller for the platform's
    /// preferred API; see [`PlatformEnvironment::preferred_fullscreen_api`].
    pub fn new(
        settings: ControllerSettings,
        fullscreen: Box<dyn FullscreenController>,
        environment: Box<dyn PlatformEnvironment>,
    ) -> Self {
        Self {
            store: PlaybackStore::new(settings.initial_volume, settings.skip_clamp),
            overlays: OverlaySet::new(settings.center_dwell, settings.skip_dwell),
            gestures: DoubleTapDetector::new(settings.double_tap_window),
            poller: PositionPoller::new(PositionSync::Push),
            fullscreen: FullscreenCoordinator::new(fullscreen, settings.auto_rotate_fullscreen),
            environment,
            settings,
        }
    }

    /// Binds the media resource (widget mount).
    ///
    /// Picks the position sync strategy once and reads the actual
    /// fullscreen status from the environment.
    pub fn mount(&mut self, media: M) {
        let strategy = PositionSync::for_media(&media, self.settings.poll_interval);
        tracing::debug!(?strategy, api = ?self.fullscreen.api(), "mounting playback controller");

        self.poller = PositionPoller::new(strategy);
        self.store.bind(media);
        self.fullscreen
            .sync_with_environment(self.environment.as_ref(), &mut self.store);
    }

    /// Releases the media resource (widget unmount) and cancels every timer.
    pub fn unmount(&mut self) -> Option<M> {
        self.poller.stop();
        self.overlays = OverlaySet::new(self.settings.center_dwell, self.settings.skip_dwell);
        self.store.unbind()
    }

    /// Fires every timer due at `now`. Returns true if the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hidden = self.overlays.poll(now);
        for overlay in &hidden {
            tracing::trace!(?overlay, "overlay hidden");
        }
        let polled = self.poller.poll(now, &mut self.store);
        !hidden.is_empty() || polled
    }

    /// Fires timers in deadline order until none is due at `now`.
    pub fn advance_to(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(deadline) = self.next_deadline().filter(|deadline| *deadline <= now) {
            changed |= self.tick(deadline);
        }
        changed
    }

    /// Earliest pending timer: an overlay hide or a position poll.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.overlays.next_deadline(), self.poller.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Render model for the current state.
    pub fn view(&self) -> ControlsView {
        ControlsView::new(self.store.state(), &self.overlays)
    }

    pub fn state(&self) -> &PlaybackState {
        self.store.state()
    }

    pub fn store(&self) -> &PlaybackStore<M> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PlaybackStore<M> {
        &mut self.store
    }

    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    pub fn fullscreen(&self) -> &FullscreenCoordinator {
        &self.fullscreen
    }

    pub fn poller(&self) -> &PositionPoller {
        &self.poller
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }
}

impl<M: fmt::Debug> fmt::Debug for PlaybackController<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("store", &self.store)
            .field("overlays", &self.overlays)
            .field("poller", &self.poller)
            .field("fullscreen", &self.fullscreen)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
