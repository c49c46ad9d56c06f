// SPDX-License-Identifier: MPL-2.0
//! `<video>` element adapter.

use crate::app::subscription::MessageSender;
use crate::app::MediaEvent;
use crate::application::port::MediaResource;
use crate::domain::error::MediaError;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlMediaElement, HtmlVideoElement};

/// [`MediaResource`] backed by an `HtmlVideoElement`.
pub struct HtmlMediaResource {
    video: HtmlVideoElement,
    /// Receives asynchronous play rejections.
    events: Option<MessageSender>,
}

impl HtmlMediaResource {
    pub fn new(video: HtmlVideoElement, events: Option<MessageSender>) -> Self {
        Self { video, events }
    }

    pub fn video(&self) -> &HtmlVideoElement {
        &self.video
    }
}

impl MediaResource for HtmlMediaResource {
    fn play(&mut self) -> Result<(), MediaError> {
        if self.video.network_state() == HtmlMediaElement::NETWORK_EMPTY {
            return Err(MediaError::NotReady);
        }
        let promise = self
            .video
            .play()
            .map_err(|err| MediaError::PlayRejected(format!("{err:?}")))?;

        // Autoplay policy refusals settle the promise later
        if let Some(events) = self.events.clone() {
            let on_reject = Closure::once(move |reason: JsValue| {
                let reason = reason
                    .as_string()
                    .unwrap_or_else(|| format!("{reason:?}"));
                let _ = events.send(MediaEvent::PlayRejected(reason).into());
            });
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            tracing::warn!("pause failed: {err:?}");
        }
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&mut self, secs: f64) {
        self.video.set_current_time(secs);
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.video.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.video.set_volume(volume.clamp(0.0, 1.0));
    }

    fn is_muted(&self) -> bool {
        self.video.muted()
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
    }
}
