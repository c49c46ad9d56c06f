// SPDX-License-Identifier: MPL-2.0
//! Vendor fullscreen methods, called by name.
//!
//! `web-sys` only binds the standard API. Prefixed variants are looked up
//! with `Reflect` so a single adapter covers every [`FullscreenApi`].

use super::environment::fullscreen_element_active;
use crate::app::subscription::MessageSender;
use crate::app::Message;
use crate::application::port::FullscreenController;
use crate::domain::error::FullscreenError;
use crate::domain::ui::{FullscreenApi, FullscreenOutcome, FullscreenTarget};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlVideoElement};

/// [`FullscreenController`] for one browser API family.
pub struct BrowserFullscreen {
    api: FullscreenApi,
    document: Document,
    container: Element,
    video: HtmlVideoElement,
    /// Receives asynchronous request rejections.
    events: Option<MessageSender>,
}

impl BrowserFullscreen {
    pub fn new(
        api: FullscreenApi,
        document: Document,
        container: Element,
        video: HtmlVideoElement,
        events: Option<MessageSender>,
    ) -> Self {
        Self {
            api,
            document,
            container,
            video,
            events,
        }
    }

    fn watch_rejection(&self, result: JsValue) {
        let (Ok(promise), Some(events)) = (result.dyn_into::<Promise>(), self.events.clone())
        else {
            return;
        };
        let on_reject = Closure::once(move |reason: JsValue| {
            let reason = reason
                .as_string()
                .unwrap_or_else(|| format!("{reason:?}"));
            let _ = events.send(Message::FullscreenRequestRejected(reason));
        });
        let _ = promise.catch(&on_reject);
        on_reject.forget();
    }
}

impl FullscreenController for BrowserFullscreen {
    fn api(&self) -> FullscreenApi {
        self.api
    }

    fn request(&mut self, target: FullscreenTarget) -> Result<FullscreenOutcome, FullscreenError> {
        let (request, _) = self.api.method_names().ok_or(FullscreenError::Unsupported)?;
        let element: &JsValue = match target {
            FullscreenTarget::Container => self.container.as_ref(),
            FullscreenTarget::MediaElement => self.video.as_ref(),
        };

        let result = call_method(element, request)?;
        self.watch_rejection(result);

        // Completion arrives as a fullscreenchange/webkitbeginfullscreen event
        Ok(FullscreenOutcome::Pending)
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        let (_, exit) = self.api.method_names().ok_or(FullscreenError::Unsupported)?;

        if self.api == FullscreenApi::WebkitVideo {
            call_method(self.video.as_ref(), exit)?;
            return Ok(());
        }

        if !fullscreen_element_active(&self.document) {
            return Err(FullscreenError::NotActive);
        }
        call_method(self.document.as_ref(), exit)?;
        Ok(())
    }
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, FullscreenError> {
    let method = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| FullscreenError::Unsupported)?;
    let function: Function = method
        .dyn_into()
        .map_err(|_| FullscreenError::Unsupported)?;
    function
        .call0(target)
        .map_err(|err| FullscreenError::Rejected(format!("{err:?}")))
}
