// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters for the platform ports.
//!
//! These back the scenario runner and the test suites. They behave like a
//! browser media element and screen closely enough to exercise every
//! controller path without a DOM:
//! - [`SimulatedMedia`] clamps seeks, parks at the end and can refuse to play
//! - [`SimulatedFullscreen`] accepts, defers or refuses requests
//! - [`SimulatedPlatform`] reports orientation and fullscreen status
//!
//! Fullscreen controller and platform share one [`SimulatedScreen`] so a
//! granted request is visible through both.

use crate::application::port::{FullscreenController, MediaResource, PlatformEnvironment};
use crate::domain::error::{FullscreenError, MediaError};
use crate::domain::ui::{FullscreenApi, FullscreenOutcome, FullscreenTarget, Orientation};
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Media
// =============================================================================

/// Media element stand-in with a manually advanced clock.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    paused: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: f64,
    muted: bool,
    push_events: bool,
    play_rejection: Option<String>,
    play_requests: u32,
}

impl SimulatedMedia {
    /// Media with metadata already loaded, paused at zero.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration: Some(duration_secs),
            ..Self::unloaded()
        }
    }

    /// Media whose metadata has not arrived yet.
    pub fn unloaded() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            muted: false,
            push_events: true,
            play_rejection: None,
            play_requests: 0,
        }
    }

    /// Refuses every play request with `reason` (autoplay policy).
    #[must_use]
    pub fn with_play_rejected(mut self, reason: &str) -> Self {
        self.play_rejection = Some(reason.to_string());
        self
    }

    /// Whether the element advertises `timeupdate` events.
    #[must_use]
    pub fn with_push_events(mut self, push_events: bool) -> Self {
        self.push_events = push_events;
        self
    }

    /// Metadata arrives.
    pub fn load_metadata(&mut self, duration_secs: f64) {
        self.duration = Some(duration_secs);
    }

    /// Advances the clock by `secs` if playing.
    ///
    /// Returns true if this reached the end, in which case the element
    /// pauses itself the way a browser does before firing `ended`.
    pub fn advance(&mut self, secs: f64) -> bool {
        if self.paused || secs <= 0.0 {
            return false;
        }
        self.current_time += secs;
        match self.duration {
            Some(duration) if self.current_time >= duration => {
                self.current_time = duration;
                self.paused = true;
                true
            }
            _ => false,
        }
    }

    /// Number of play requests received, accepted or not.
    pub fn play_requests(&self) -> u32 {
        self.play_requests
    }
}

impl MediaResource for SimulatedMedia {
    fn play(&mut self) -> Result<(), MediaError> {
        self.play_requests += 1;
        if let Some(reason) = &self.play_rejection {
            return Err(MediaError::PlayRejected(reason.clone()));
        }
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
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        let mut secs = secs.max(0.0);
        if let Some(duration) = self.duration {
            secs = secs.min(duration);
        }
        self.current_time = secs;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn emits_time_updates(&self) -> bool {
        self.push_events
    }
}

// =============================================================================
// Screen
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
struct ScreenState {
    orientation: Orientation,
    fullscreen: bool,
}

/// Shared screen status, cloned into the fullscreen controller and platform.
#[derive(Debug, Clone, Default)]
pub struct SimulatedScreen(Rc<Cell<ScreenState>>);

impl SimulatedScreen {
    pub fn orientation(&self) -> Orientation {
        self.0.get().orientation
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        let mut state = self.0.get();
        state.orientation = orientation;
        self.0.set(state);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.0.get().fullscreen
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        let mut state = self.0.get();
        state.fullscreen = fullscreen;
        self.0.set(state);
    }
}

// =============================================================================
// Fullscreen
// =============================================================================

/// How [`SimulatedFullscreen`] answers requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FullscreenResponse {
    /// Granted synchronously.
    #[default]
    Enter,
    /// Accepted; completion arrives later as a change notification.
    Defer,
    /// Refused synchronously.
    Reject(String),
}

/// Fullscreen controller over a [`SimulatedScreen`].
#[derive(Debug, Clone)]
pub struct SimulatedFullscreen {
    api: FullscreenApi,
    screen: SimulatedScreen,
    response: FullscreenResponse,
    requests: Vec<FullscreenTarget>,
}

impl SimulatedFullscreen {
    pub fn new(api: FullscreenApi, screen: SimulatedScreen, response: FullscreenResponse) -> Self {
        Self {
            api,
            screen,
            response,
            requests: Vec::new(),
        }
    }

    /// Targets of every request issued so far.
    pub fn requests(&self) -> &[FullscreenTarget] {
        &self.requests
    }
}

impl FullscreenController for SimulatedFullscreen {
    fn api(&self) -> FullscreenApi {
        self.api
    }

    fn request(&mut self, target: FullscreenTarget) -> Result<FullscreenOutcome, FullscreenError> {
        if self.api == FullscreenApi::Unsupported {
            return Err(FullscreenError::Unsupported);
        }
        self.requests.push(target);
        match &self.response {
            FullscreenResponse::Enter => {
                self.screen.set_fullscreen(true);
                Ok(FullscreenOutcome::Entered)
            }
            FullscreenResponse::Defer => Ok(FullscreenOutcome::Pending),
            FullscreenResponse::Reject(reason) => Err(FullscreenError::Rejected(reason.clone())),
        }
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        if self.api == FullscreenApi::Unsupported {
            return Err(FullscreenError::Unsupported);
        }
        if !self.screen.is_fullscreen() {
            return Err(FullscreenError::NotActive);
        }
        self.screen.set_fullscreen(false);
        Ok(())
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Platform environment over a [`SimulatedScreen`].
#[derive(Debug, Clone)]
pub struct SimulatedPlatform {
    screen: SimulatedScreen,
    apis: Vec<FullscreenApi>,
}

impl SimulatedPlatform {
    pub fn new(screen: SimulatedScreen, apis: Vec<FullscreenApi>) -> Self {
        Self { screen, apis }
    }

    pub fn screen(&self) -> &SimulatedScreen {
        &self.screen
    }
}

impl PlatformEnvironment for SimulatedPlatform {
    fn orientation(&self) -> Orientation {
        self.screen.orientation()
    }

    fn fullscreen_element_active(&self) -> bool {
        self.screen.is_fullscreen()
    }

    fn supported_fullscreen_apis(&self) -> Vec<FullscreenApi> {
        self.apis.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn advance_stops_at_end_and_pauses() {
        let mut media = SimulatedMedia::new(1.0);
        media.play().unwrap();

        assert!(!media.advance(0.6));
        assert!(media.advance(0.6));
        assert_abs_diff_eq!(media.current_time(), 1.0);
        assert!(media.is_paused());
    }

    #[test]
    fn advance_while_paused_does_nothing() {
        let mut media = SimulatedMedia::new(10.0);
        assert!(!media.advance(1.0));
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn seeks_clamp_once_duration_known() {
        let mut media = SimulatedMedia::unloaded();
        media.set_current_time(50.0);
        assert_abs_diff_eq!(media.current_time(), 50.0);

        media.load_metadata(20.0);
        media.set_current_time(50.0);
        assert_abs_diff_eq!(media.current_time(), 20.0);
        media.set_current_time(-3.0);
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn rejected_play_keeps_paused_and_counts() {
        let mut media = SimulatedMedia::new(10.0).with_play_rejected("NotAllowedError");
        assert!(matches!(media.play(), Err(MediaError::PlayRejected(_))));
        assert!(media.is_paused());
        assert_eq!(media.play_requests(), 1);
    }

    #[test]
    fn fullscreen_shares_screen_with_platform() {
        let screen = SimulatedScreen::default();
        let platform = SimulatedPlatform::new(screen.clone(), vec![FullscreenApi::Standard]);
        let mut fullscreen =
            SimulatedFullscreen::new(FullscreenApi::Standard, screen, FullscreenResponse::Enter);

        assert_eq!(
            fullscreen.request(FullscreenTarget::Container),
            Ok(FullscreenOutcome::Entered)
        );
        assert!(platform.fullscreen_element_active());
        assert_eq!(fullscreen.requests(), &[FullscreenTarget::Container]);

        fullscreen.exit().unwrap();
        assert!(!platform.fullscreen_element_active());
        assert_eq!(fullscreen.exit(), Err(FullscreenError::NotActive));
    }

    #[test]
    fn deferred_request_leaves_screen_unchanged() {
        let screen = SimulatedScreen::default();
        let mut fullscreen =
            SimulatedFullscreen::new(FullscreenApi::Webkit, screen.clone(), FullscreenResponse::Defer);

        assert_eq!(
            fullscreen.request(FullscreenTarget::Container),
            Ok(FullscreenOutcome::Pending)
        );
        assert!(!screen.is_fullscreen());
    }

    #[test]
    fn unsupported_api_refuses_everything() {
        let mut fullscreen = SimulatedFullscreen::new(
            FullscreenApi::Unsupported,
            SimulatedScreen::default(),
            FullscreenResponse::Enter,
        );
        assert_eq!(
            fullscreen.request(FullscreenTarget::Container),
            Err(FullscreenError::Unsupported)
        );
        assert!(fullscreen.requests().is_empty());
    }
}
