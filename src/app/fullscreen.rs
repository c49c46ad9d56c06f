// SPDX-License-Identifier: MPL-2.0
//! Fullscreen/orientation coordination.
//!
//! Reconciles three sources of truth that disagree with each other:
//! - user requests (fullscreen button),
//! - device orientation (landscape enters, portrait leaves),
//! - the platform itself, which may leave fullscreen on its own (back
//!   gesture, Esc, dismissing the iOS native player).
//!
//! The store's `is_full_screen` only changes once the platform confirms.
//! Failed or refused requests are logged and leave the state unchanged;
//! nothing is retried.

use crate::application::port::{FullscreenController, MediaResource, PlatformEnvironment};
use crate::domain::error::FullscreenError;
use crate::domain::ui::{FullscreenApi, FullscreenMode, FullscreenOutcome, Orientation};
use crate::video_player::PlaybackStore;

/// Windowed/fullscreen state machine over one probed [`FullscreenController`].
pub struct FullscreenCoordinator {
    controller: Box<dyn FullscreenController>,
    mode: FullscreenMode,

    /// A request was accepted and awaits a change notification or rejection.
    pending: bool,

    /// Device went back to portrait while a request was pending; leave
    /// again as soon as the platform confirms.
    exit_on_confirm: bool,

    /// Whether orientation changes drive fullscreen.
    auto_rotate: bool,
}

impl FullscreenCoordinator {
    pub fn new(controller: Box<dyn FullscreenController>, auto_rotate: bool) -> Self {
        tracing::debug!(api = ?controller.api(), "fullscreen controller selected");
        Self {
            controller,
            mode: FullscreenMode::Windowed,
            pending: false,
            exit_on_confirm: false,
            auto_rotate,
        }
    }

    pub fn api(&self) -> FullscreenApi {
        self.controller.api()
    }

    pub fn mode(&self) -> FullscreenMode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Fullscreen button: enter when windowed, leave when fullscreen.
    pub fn toggle<M: MediaResource>(&mut self, store: &mut PlaybackStore<M>) {
        if self.mode.is_fullscreen() {
            self.exit(store);
        } else {
            self.enter(store);
        }
    }

    /// Requests fullscreen on the controller's target element.
    pub fn enter<M: MediaResource>(&mut self, store: &mut PlaybackStore<M>) {
        if self.mode.is_fullscreen() || self.pending {
            return;
        }
        if !store.is_bound() {
            tracing::debug!("fullscreen request ignored: no media resource bound");
            return;
        }

        let target = self.controller.target();
        match self.controller.request(target) {
            Ok(FullscreenOutcome::Entered) => self.set_mode(FullscreenMode::Fullscreen, store),
            Ok(FullscreenOutcome::Pending) => {
                tracing::debug!(?target, "fullscreen request pending");
                self.pending = true;
            }
            Err(err) => {
                tracing::warn!(api = ?self.controller.api(), "fullscreen request failed: {err}");
            }
        }
    }

    /// Leaves fullscreen through the controller's exit method.
    pub fn exit<M: MediaResource>(&mut self, store: &mut PlaybackStore<M>) {
        self.exit_on_confirm = false;
        match self.controller.exit() {
            Ok(()) => {
                self.pending = false;
                self.set_mode(FullscreenMode::Windowed, store);
            }
            Err(FullscreenError::NotActive) => {
                // Platform already left fullscreen without telling us
                self.pending = false;
                self.set_mode(FullscreenMode::Windowed, store);
            }
            Err(err) => {
                tracing::warn!(api = ?self.controller.api(), "fullscreen exit failed: {err}");
            }
        }
    }

    /// Device rotated.
    pub fn on_orientation_change<M: MediaResource>(
        &mut self,
        orientation: Orientation,
        environment: &dyn PlatformEnvironment,
        store: &mut PlaybackStore<M>,
    ) {
        if !self.auto_rotate {
            return;
        }
        match orientation {
            Orientation::Landscape if !self.mode.is_fullscreen() => {
                self.exit_on_confirm = false;
                self.enter(store);
            }
            Orientation::Portrait if self.pending && !self.mode.is_fullscreen() => {
                tracing::debug!("portrait while fullscreen request pending");
                self.exit_on_confirm = true;
            }
            Orientation::Portrait
                if self.mode.is_fullscreen() || environment.fullscreen_element_active() =>
            {
                self.exit(store);
            }
            _ => {}
        }
    }

    /// Platform reported a fullscreen status change.
    pub fn on_fullscreen_change<M: MediaResource>(
        &mut self,
        active: bool,
        store: &mut PlaybackStore<M>,
    ) {
        self.pending = false;
        if active {
            self.set_mode(FullscreenMode::Fullscreen, store);
            if self.exit_on_confirm {
                self.exit(store);
            }
        } else if self.mode.is_fullscreen() {
            self.on_system_exit(store);
        }
    }

    /// `webkitendfullscreen`: the native video player left fullscreen.
    ///
    /// Also fires after our own `webkitExitFullscreen`; playback then
    /// continues inline and the mirror is left alone.
    pub fn on_native_fullscreen_ended<M: MediaResource>(&mut self, store: &mut PlaybackStore<M>) {
        let solicited = !self.mode.is_fullscreen() && !self.pending;
        self.pending = false;
        self.exit_on_confirm = false;
        if solicited {
            tracing::debug!("native player closed after our own exit");
            return;
        }
        self.on_system_exit(store);
    }

    /// A pending request was refused asynchronously.
    pub fn on_request_rejected<M: MediaResource>(
        &mut self,
        reason: &str,
        store: &mut PlaybackStore<M>,
    ) {
        self.pending = false;
        self.exit_on_confirm = false;
        tracing::warn!(api = ?self.controller.api(), "fullscreen request rejected: {reason}");
        store.set_full_screen(self.mode.is_fullscreen());
    }

    /// Re-reads the actual fullscreen status from the environment.
    pub fn sync_with_environment<M: MediaResource>(
        &mut self,
        environment: &dyn PlatformEnvironment,
        store: &mut PlaybackStore<M>,
    ) {
        let mode = if environment.fullscreen_element_active() {
            FullscreenMode::Fullscreen
        } else {
            FullscreenMode::Windowed
        };
        self.set_mode(mode, store);
    }

    fn on_system_exit<M: MediaResource>(&mut self, store: &mut PlaybackStore<M>) {
        tracing::info!("fullscreen left by the platform");
        self.set_mode(FullscreenMode::Windowed, store);
        if self.controller.owns_playback() {
            store.force_paused();
        }
    }

    fn set_mode<M: MediaResource>(&mut self, mode: FullscreenMode, store: &mut PlaybackStore<M>) {
        if self.mode != mode {
            tracing::info!(?mode, "fullscreen mode changed");
        }
        self.mode = mode;
        store.set_full_screen(mode.is_fullscreen());
    }
}

impl std::fmt::Debug for FullscreenCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullscreenCoordinator")
            .field("api", &self.controller.api())
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .field("exit_on_confirm", &self.exit_on_confirm)
            .field("auto_rotate", &self.auto_rotate)
            .finish()
    }
}
