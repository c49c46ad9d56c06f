// SPDX-License-Identifier: MPL-2.0
//! Scripted playback sessions.
//!
//! A scenario is a TOML file describing a simulated platform and a list of
//! timestamped user or platform actions. Running it replays the actions
//! against a [`PlaybackController`] over the simulated adapters and records
//! the rendered view after each step.
//!
//! ```toml
//! duration_secs = 30.0
//!
//! [platform]
//! fullscreen_apis = ["webkit_video"]
//!
//! [[steps]]
//! at_ms = 0
//! action = "tap_area"
//!
//! [[steps]]
//! at_ms = 200
//! action = { double_click = "forward" }
//! ```

use crate::app::{MediaEvent, Message, PlaybackController};
use crate::application::port::{MediaResource, PlatformEnvironment};
use crate::config::ControllerSettings;
use crate::domain::ui::{FullscreenApi, Orientation};
use crate::domain::video::{PlaybackState, SkipDirection};
use crate::error::{Error, Result};
use crate::infrastructure::simulated::{
    FullscreenResponse, SimulatedFullscreen, SimulatedMedia, SimulatedPlatform, SimulatedScreen,
};
use crate::ui::controls::ControlsView;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Timers still pending after the last step get this long to fire.
const SETTLE_MS: u64 = 5_000;

/// Latest step timestamp accepted: one day.
const MAX_STEP_MS: u64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Media duration; absent until a `load_metadata` step.
    #[serde(default)]
    pub duration_secs: Option<f64>,
    /// Whether the media element emits `timeupdate` events.
    #[serde(default = "default_push_time_updates")]
    pub push_time_updates: bool,
    #[serde(default)]
    pub platform: PlatformSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_push_time_updates() -> bool {
    true
}

/// Simulated device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformSpec {
    pub orientation: OrientationName,
    pub fullscreen_apis: Vec<ApiName>,
    pub fullscreen_response: ResponseName,
    /// Refuse every play request with this reason (autoplay policy).
    pub play_rejected: Option<String>,
}

impl Default for PlatformSpec {
    fn default() -> Self {
        Self {
            orientation: OrientationName::Portrait,
            fullscreen_apis: vec![ApiName::Standard],
            fullscreen_response: ResponseName::Enter,
            play_rejected: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Forward,
    Backward,
}

impl From<Side> for SkipDirection {
    fn from(side: Side) -> Self {
        match side {
            Side::Forward => SkipDirection::Forward,
            Side::Backward => SkipDirection::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationName {
    Portrait,
    Landscape,
}

impl From<OrientationName> for Orientation {
    fn from(name: OrientationName) -> Self {
        match name {
            OrientationName::Portrait => Orientation::Portrait,
            OrientationName::Landscape => Orientation::Landscape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiName {
    Standard,
    Webkit,
    Moz,
    Ms,
    WebkitVideo,
}

impl From<ApiName> for FullscreenApi {
    fn from(name: ApiName) -> Self {
        match name {
            ApiName::Standard => FullscreenApi::Standard,
            ApiName::Webkit => FullscreenApi::Webkit,
            ApiName::Moz => FullscreenApi::Moz,
            ApiName::Ms => FullscreenApi::Ms,
            ApiName::WebkitVideo => FullscreenApi::WebkitVideo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseName {
    Enter,
    Defer,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Milliseconds since the start of the session.
    pub at_ms: u64,
    pub action: Action,
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    TapArea,
    TogglePlayback,
    Scrub(f64),
    DoubleClick(Side),
    Touch(Side),
    SetVolume(u8),
    ToggleMute,
    ToggleFullscreen,
    Rotate(OrientationName),
    /// Media clock runs for this many seconds (if playing).
    Advance(f64),
    LoadMetadata(f64),
    /// A pending fullscreen request completes.
    CompleteFullscreen,
    /// A pending fullscreen request is refused.
    RejectFullscreen(String),
    /// The platform leaves fullscreen on its own (back gesture, Done button).
    SystemExitFullscreen,
}

/// View recorded after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub at_ms: u64,
    pub action: Action,
    pub view: ControlsView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub steps: Vec<StepOutcome>,
    /// State once every timer pending after the last step has fired.
    pub final_state: PlaybackState,
    pub final_view: ControlsView,
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Scenario(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Steps must be in chronological order within [`MAX_STEP_MS`], and the
    /// duration, if given, positive.
    pub fn validate(&self) -> Result<()> {
        if let Some(duration) = self.duration_secs {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(Error::Scenario(format!(
                    "duration_secs must be positive, got {duration}"
                )));
            }
        }
        if let Some((index, step)) = self
            .steps
            .iter()
            .enumerate()
            .find(|(_, step)| step.at_ms > MAX_STEP_MS)
        {
            return Err(Error::Scenario(format!(
                "step {index} at {} ms is past the {MAX_STEP_MS} ms limit",
                step.at_ms
            )));
        }
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(Error::Scenario(format!(
                    "step {} at {} ms comes before step {} at {} ms",
                    index + 1,
                    pair[1].at_ms,
                    index,
                    pair[0].at_ms
                )));
            }
        }
        Ok(())
    }

    /// Replays the scenario and records the view after every step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scenario`] if the scenario fails [`Self::validate`].
    pub fn run(&self, settings: ControllerSettings) -> Result<ScenarioReport> {
        self.validate()?;

        let start = Instant::now();
        let mut session = Session::new(self, settings);
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let now = start + Duration::from_millis(step.at_ms);
            session.controller.advance_to(now);
            session.apply(&step.action, now);
            tracing::debug!(at_ms = step.at_ms, action = ?step.action, "scenario step applied");
            outcomes.push(StepOutcome {
                at_ms: step.at_ms,
                action: step.action.clone(),
                view: session.controller.view(),
            });
        }

        let last_ms = self.steps.last().map_or(0, |step| step.at_ms);
        session
            .controller
            .advance_to(start + Duration::from_millis(last_ms + SETTLE_MS));

        Ok(ScenarioReport {
            steps: outcomes,
            final_state: *session.controller.state(),
            final_view: session.controller.view(),
        })
    }
}

struct Session {
    controller: PlaybackController<SimulatedMedia>,
    screen: SimulatedScreen,
    api: FullscreenApi,
    push_time_updates: bool,
}

impl Session {
    fn new(scenario: &Scenario, settings: ControllerSettings) -> Self {
        let setup = &scenario.platform;
        let screen = SimulatedScreen::default();
        screen.set_orientation(setup.orientation.into());

        let apis: Vec<FullscreenApi> = setup
            .fullscreen_apis
            .iter()
            .map(|&api| api.into())
            .collect();
        let platform = SimulatedPlatform::new(screen.clone(), apis);
        let api = platform.preferred_fullscreen_api();

        let response = match setup.fullscreen_response {
            ResponseName::Enter => FullscreenResponse::Enter,
            ResponseName::Defer => FullscreenResponse::Defer,
            ResponseName::Reject => FullscreenResponse::Reject("request refused".to_string()),
        };
        let fullscreen = SimulatedFullscreen::new(api, screen.clone(), response);

        let mut media = match scenario.duration_secs {
            Some(duration) => SimulatedMedia::new(duration),
            None => SimulatedMedia::unloaded(),
        }
        .with_push_events(scenario.push_time_updates);
        if let Some(reason) = &setup.play_rejected {
            media = media.with_play_rejected(reason);
        }

        let mut controller =
            PlaybackController::new(settings, Box::new(fullscreen), Box::new(platform));
        controller.mount(media);

        Self {
            controller,
            screen,
            api,
            push_time_updates: scenario.push_time_updates,
        }
    }

    fn apply(&mut self, action: &Action, now: Instant) {
        let message = match action {
            Action::TapArea => Message::AreaTapped,
            Action::TogglePlayback => Message::TogglePlayback,
            Action::Scrub(secs) => Message::Scrub(*secs),
            Action::DoubleClick(side) => Message::SkipDoubleClicked((*side).into()),
            Action::Touch(side) => Message::SkipTouched((*side).into()),
            Action::SetVolume(level) => Message::SetVolume(*level),
            Action::ToggleMute => Message::ToggleMute,
            Action::ToggleFullscreen => Message::ToggleFullscreen,
            Action::Rotate(orientation) => {
                let orientation = Orientation::from(*orientation);
                self.screen.set_orientation(orientation);
                Message::OrientationChanged(orientation)
            }
            Action::Advance(secs) => return self.advance_media(*secs, now),
            Action::LoadMetadata(duration) => {
                if let Some(media) = self.controller.store_mut().media_mut() {
                    media.load_metadata(*duration);
                }
                Message::Media(MediaEvent::LoadedMetadata(*duration))
            }
            Action::CompleteFullscreen => {
                self.screen.set_fullscreen(true);
                Message::FullscreenChanged(true)
            }
            Action::RejectFullscreen(reason) => Message::FullscreenRequestRejected(reason.clone()),
            Action::SystemExitFullscreen => {
                self.screen.set_fullscreen(false);
                if self.api.owns_playback() {
                    Message::Media(MediaEvent::EndFullscreen)
                } else {
                    Message::FullscreenChanged(false)
                }
            }
        };
        self.controller.update(message, now);
    }

    fn advance_media(&mut self, secs: f64, now: Instant) {
        let Some(media) = self.controller.store_mut().media_mut() else {
            return;
        };
        let ended = media.advance(secs);
        let position = media.current_time();

        if self.push_time_updates {
            self.controller
                .update(Message::Media(MediaEvent::TimeUpdate(position)), now);
        }
        if ended {
            self.controller.update(Message::Media(MediaEvent::Ended), now);
        }
    }
}
